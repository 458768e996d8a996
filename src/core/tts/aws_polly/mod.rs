//! Amazon Polly provider module.
//!
//! This module connects the gateway to Amazon Polly. It supports:
//!
//! - Paginated voice listing (DescribeVoices)
//! - Speech synthesis from plain text or SSML (SynthesizeSpeech)
//! - Output formats: mp3, ogg_vorbis, pcm
//! - AWS credential management (explicit keys, profiles, IAM roles, etc.)
//!
//! # Architecture
//!
//! Unlike HTTP-based TTS providers, this implementation uses the AWS SDK,
//! which handles request signing and credential management. The audio body of
//! a SynthesizeSpeech response is handed back as a readable stream without
//! being buffered, so the gateway can forward it chunk by chunk.
//!
//! # Authentication
//!
//! AWS credentials can be provided via:
//! 1. `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` in the server config
//! 2. A named profile (`AWS_PROFILE`)
//! 3. AWS credentials file (`~/.aws/credentials`)
//! 4. IAM instance profile (for EC2/ECS/Lambda)
//!
//! # Example
//!
//! ```rust,ignore
//! use polly_gateway::core::tts::aws_polly::{AwsPollyConfig, AwsPollyProvider};
//! use polly_gateway::core::tts::SpeechProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = AwsPollyProvider::connect(&AwsPollyConfig::default()).await;
//!     let page = provider.describe_voices(None).await?;
//!     println!("{} voices on the first page", page.voices.len());
//!     Ok(())
//! }
//! ```

mod config;
mod provider;


pub use config::{
    AwsPollyConfig, DEFAULT_ENGINE, DEFAULT_REGION, FALLBACK_ENGINE, PollyOutputFormat, TextType,
};
pub use provider::AwsPollyProvider;
