//! Configuration types for the Amazon Polly provider.
//!
//! This module defines the wire-level vocabulary the gateway shares with
//! Amazon Polly:
//! - Audio output formats accepted by `/read` (ogg_vorbis, mp3, pcm)
//! - Input text types (plain text or SSML)
//! - Engine names used for the primary and fallback attempts
//! - Client settings (region, profile, explicit credentials)
//!
//! # Example
//!
//! ```rust,ignore
//! use polly_gateway::core::tts::aws_polly::{AwsPollyConfig, PollyOutputFormat};
//!
//! let config = AwsPollyConfig {
//!     region: "eu-west-1".to_string(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(PollyOutputFormat::parse("mp3"), Some(PollyOutputFormat::Mp3));
//! ```

use crate::config::ServerConfig;

/// Engine requested when the caller does not name one.
pub const DEFAULT_ENGINE: &str = "neural";

/// Engine forced on the plain-text fallback attempt.
pub const FALLBACK_ENGINE: &str = "neural";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

// =============================================================================
// Polly Output Format
// =============================================================================

/// Audio output formats the gateway streams back to callers.
///
/// # Format Details
///
/// - **OggVorbis**: Open-source compression, served as `audio/ogg`
/// - **Mp3**: Compressed audio, served as `audio/mpeg`
/// - **Pcm**: Raw 16-bit signed little-endian samples, served as `audio/wave; codecs=1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollyOutputFormat {
    /// OGG Vorbis format (compressed)
    OggVorbis,
    /// MP3 format (compressed)
    Mp3,
    /// PCM format (uncompressed)
    Pcm,
}

impl PollyOutputFormat {
    /// Every format accepted by `/read`.
    pub const ALL: [PollyOutputFormat; 3] = [Self::OggVorbis, Self::Mp3, Self::Pcm];

    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OggVorbis => "ogg_vorbis",
            Self::Mp3 => "mp3",
            Self::Pcm => "pcm",
        }
    }

    /// Content type of the HTTP response carrying this format.
    #[inline]
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::OggVorbis => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Pcm => "audio/wave; codecs=1",
        }
    }

    /// Parse an exact wire name. Anything else is unsupported.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == s)
    }
}

impl std::fmt::Display for PollyOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Text Type
// =============================================================================

/// Input text type for Amazon Polly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// Plain text input
    #[default]
    Text,
    /// SSML (Speech Synthesis Markup Language) input
    Ssml,
}

impl TextType {
    /// Convert to AWS API string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ssml => "ssml",
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Settings used to build the process-wide Polly client.
///
/// # Authentication
///
/// AWS credentials can be provided via:
/// 1. `access_key_id` and `secret_access_key` fields
/// 2. Environment variables: `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`
/// 3. A named profile from `~/.aws/credentials`
/// 4. IAM instance profile (for EC2/ECS/Lambda)
///
/// Options 2-4 go through the SDK's default credential chain and are only
/// consulted when no explicit key pair is set.
#[derive(Debug, Clone)]
pub struct AwsPollyConfig {
    /// AWS region for the Polly service
    pub region: String,

    /// Named profile for the default credential chain
    pub profile: Option<String>,

    /// AWS access key ID (optional if using IAM roles)
    pub access_key_id: Option<String>,

    /// AWS secret access key (optional if using IAM roles)
    pub secret_access_key: Option<String>,

    /// AWS session token for temporary credentials (optional)
    pub session_token: Option<String>,
}

impl Default for AwsPollyConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
        }
    }
}

impl AwsPollyConfig {
    /// Build client settings from the server configuration.
    pub fn from_server_config(config: &ServerConfig) -> Self {
        Self {
            region: config.aws_region.clone(),
            profile: config.aws_profile.clone(),
            access_key_id: config.aws_access_key_id.clone(),
            secret_access_key: config.aws_secret_access_key.clone(),
            session_token: config.aws_session_token.clone(),
        }
    }

    /// Check if explicit AWS credentials are provided.
    pub fn has_explicit_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }
}
