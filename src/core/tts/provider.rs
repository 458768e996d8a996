//! Provider seam for speech backends.
//!
//! The gateway never talks to a cloud SDK directly from its handlers. Both the
//! voice catalog and the synthesis pipeline go through [`SpeechProvider`], which
//! is implemented by [`AwsPollyProvider`](super::aws_polly::AwsPollyProvider) in
//! production and by scripted fakes in tests.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::AsyncRead;

use super::aws_polly::{PollyOutputFormat, TextType};

/// Readable audio returned by a provider. Owned by the response for its lifetime.
pub type AudioStream = Pin<Box<dyn AsyncRead + Send>>;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failures reported by a speech provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider rejected the SSML payload as malformed.
    #[error("{0}")]
    InvalidMarkup(String),

    /// Any other provider failure (network, auth, throttling, validation).
    #[error("{0}")]
    Service(String),

    #[error("Provider call timed out after {0:?}")]
    Timeout(Duration),
}

impl ProviderError {
    /// Whether this error should trigger the plain-text fallback.
    pub fn is_invalid_markup(&self) -> bool {
        matches!(self, Self::InvalidMarkup(_))
    }
}

/// A voice as exposed by `/voices`.
///
/// Field names follow the provider's PascalCase shape so the JSON body matches
/// what Polly's `DescribeVoices` returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voice {
    pub gender: String,
    pub id: String,
    pub language_code: String,
    pub language_name: String,
    pub name: String,
    /// Other languages this bilingual voice can speak
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_language_codes: Vec<String>,
    /// Engines the voice is available on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_engines: Vec<String>,
}

/// One page of the provider's voice listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VoicePage {
    pub voices: Vec<Voice>,
    /// Continuation token for the next page, absent on the last page
    pub next_token: Option<String>,
}

/// Parameters of a single synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub text_type: TextType,
    pub voice_id: String,
    pub output_format: PollyOutputFormat,
    pub engine: String,
}

/// Remote text-to-speech capability shared by every in-flight request.
///
/// Implementations must be safe for concurrent use and hold no per-request state.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Fetch one page of voices, continuing from `next_token` when given.
    async fn describe_voices(&self, next_token: Option<String>) -> ProviderResult<VoicePage>;

    /// Synthesize speech and hand back the provider's audio source.
    async fn synthesize_speech(&self, request: SpeechRequest) -> ProviderResult<AudioStream>;

    /// Short provider name used in logs.
    fn name(&self) -> &'static str;
}

/// Run a provider call under a deadline, mapping expiry to [`ProviderError::Timeout`].
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> ProviderResult<T>
where
    F: Future<Output = ProviderResult<T>>,
{
    tokio::time::timeout(deadline, call)
        .await
        .map_err(|_| ProviderError::Timeout(deadline))?
}
