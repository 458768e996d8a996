//! Text-to-speech core.
//!
//! - `provider` - the [`SpeechProvider`] seam and its data types
//! - `aws_polly` - Amazon Polly implementation of the seam
//! - `catalog` - paginated voice listing
//! - `pipeline` - synthesis with the plain-text fallback
//! - `prosody` - speed tiers and SSML construction
//! - `stream` - fixed-size chunking of provider audio

pub mod aws_polly;
pub mod catalog;
pub mod pipeline;
pub mod prosody;
pub mod provider;
pub mod stream;

pub use aws_polly::{AwsPollyConfig, AwsPollyProvider, PollyOutputFormat, TextType};
pub use catalog::{DEFAULT_MAX_VOICE_PAGES, VoiceCatalog};
pub use pipeline::{SpeechSynthesisPipeline, SynthesisRequest, SynthesizedSpeech};
pub use prosody::{DEFAULT_SPEED, SpeedTier, VOLUME_BOOST, build_ssml, resolve_rate};
pub use provider::{
    AudioStream, ProviderError, ProviderResult, SpeechProvider, SpeechRequest, Voice, VoicePage,
};
pub use stream::{AudioChunkStream, CHUNK_SIZE};
