//! Amazon Polly provider implementation.
//!
//! Implements [`SpeechProvider`] on top of the AWS SDK for Rust.
//!
//! # API Reference
//!
//! - Service: Amazon Polly
//! - Operations: DescribeVoices (paginated by `NextToken`), SynthesizeSpeech
//! - Output formats: mp3, ogg_vorbis, pcm
//! - Markup errors: `InvalidSsmlException`, surfaced as [`ProviderError::InvalidMarkup`]
//!
//! The SDK handles request signing, credential resolution and connection
//! pooling. A single client is built at startup and shared by all requests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_polly::Client as PollyClient;
use aws_sdk_polly::config::Builder as PollyConfigBuilder;
use aws_sdk_polly::error::DisplayErrorContext;
use aws_sdk_polly::operation::synthesize_speech::SynthesizeSpeechError;
use aws_sdk_polly::types::{
    Engine, OutputFormat, TextType as PollyTextType, Voice as PollyVoice, VoiceId,
};
use tracing::{debug, error, info};

use super::config::{AwsPollyConfig, PollyOutputFormat, TextType};
use crate::core::tts::provider::{
    AudioStream, ProviderError, ProviderResult, SpeechProvider, SpeechRequest, Voice, VoicePage,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert PollyOutputFormat to AWS SDK OutputFormat type
pub(super) fn output_format_to_sdk(format: PollyOutputFormat) -> OutputFormat {
    match format {
        PollyOutputFormat::Mp3 => OutputFormat::Mp3,
        PollyOutputFormat::OggVorbis => OutputFormat::OggVorbis,
        PollyOutputFormat::Pcm => OutputFormat::Pcm,
    }
}

/// Convert TextType to AWS SDK TextType
pub(super) fn text_type_to_sdk(text_type: TextType) -> PollyTextType {
    match text_type {
        TextType::Text => PollyTextType::Text,
        TextType::Ssml => PollyTextType::Ssml,
    }
}

/// Project an SDK voice record onto the gateway's voice shape.
pub(super) fn voice_from_sdk(voice: PollyVoice) -> Voice {
    Voice {
        gender: voice
            .gender
            .map(|gender| gender.as_str().to_string())
            .unwrap_or_default(),
        id: voice
            .id
            .map(|id| id.as_str().to_string())
            .unwrap_or_default(),
        language_code: voice
            .language_code
            .map(|code| code.as_str().to_string())
            .unwrap_or_default(),
        language_name: voice.language_name.unwrap_or_default(),
        name: voice.name.unwrap_or_default(),
        additional_language_codes: voice
            .additional_language_codes
            .unwrap_or_default()
            .iter()
            .map(|code| code.as_str().to_string())
            .collect(),
        supported_engines: voice
            .supported_engines
            .unwrap_or_default()
            .iter()
            .map(|engine| engine.as_str().to_string())
            .collect(),
    }
}

/// Map a SynthesizeSpeech service error, keeping markup rejections distinguishable.
pub(super) fn classify_synthesis_error(
    error: &SynthesizeSpeechError,
    message: String,
) -> ProviderError {
    if error.is_invalid_ssml_exception() {
        ProviderError::InvalidMarkup(message)
    } else {
        ProviderError::Service(message)
    }
}

// =============================================================================
// Amazon Polly Provider
// =============================================================================

/// Amazon Polly provider backed by the AWS SDK.
pub struct AwsPollyProvider {
    /// Shared SDK client (cheap to clone, safe for concurrent use)
    client: PollyClient,
    /// Region the client was built for, kept for logging
    region: String,
    /// Request counter for logging (atomic for lock-free access)
    request_counter: AtomicU64,
}

impl AwsPollyProvider {
    /// Build a provider, resolving credentials as described on [`AwsPollyConfig`].
    pub async fn connect(config: &AwsPollyConfig) -> Self {
        let region = Region::new(config.region.clone());

        info!(region = %config.region, "Connecting to Amazon Polly");

        let client = match (&config.access_key_id, &config.secret_access_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials = Credentials::new(
                    access_key,
                    secret_key,
                    config.session_token.clone(),
                    None,
                    "polly-gateway",
                );

                let polly_config = PollyConfigBuilder::new()
                    .behavior_version(BehaviorVersion::latest())
                    .region(region)
                    .credentials_provider(credentials)
                    .build();

                PollyClient::from_conf(polly_config)
            }
            _ => {
                // Use default credential chain (environment, profile, IAM roles, etc.)
                let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);
                if let Some(profile) = &config.profile {
                    loader = loader.profile_name(profile);
                }
                PollyClient::new(&loader.load().await)
            }
        };

        Self::from_client(client, config.region.clone())
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: PollyClient, region: String) -> Self {
        Self {
            client,
            region,
            request_counter: AtomicU64::new(0),
        }
    }

    /// Region the client talks to.
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl SpeechProvider for AwsPollyProvider {
    async fn describe_voices(&self, next_token: Option<String>) -> ProviderResult<VoicePage> {
        debug!(has_token = next_token.is_some(), "Describing Polly voices");

        let output = self
            .client
            .describe_voices()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(error = %message, "Polly DescribeVoices failed");
                ProviderError::Service(message)
            })?;

        let voices = output
            .voices
            .unwrap_or_default()
            .into_iter()
            .map(voice_from_sdk)
            .collect();

        Ok(VoicePage {
            voices,
            next_token: output.next_token,
        })
    }

    async fn synthesize_speech(&self, request: SpeechRequest) -> ProviderResult<AudioStream> {
        // Increment request counter (lock-free atomic operation)
        let request_id = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;

        debug!(
            request_id = request_id,
            text_len = request.text.len(),
            text_type = %request.text_type,
            voice = %request.voice_id,
            engine = %request.engine,
            format = %request.output_format,
            "Synthesizing text with Amazon Polly"
        );

        let response = self
            .client
            .synthesize_speech()
            .text(request.text)
            .text_type(text_type_to_sdk(request.text_type))
            .voice_id(VoiceId::from(request.voice_id.as_str()))
            .output_format(output_format_to_sdk(request.output_format))
            .engine(Engine::from(request.engine.as_str()))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                match e.as_service_error() {
                    Some(service_error) => classify_synthesis_error(service_error, message),
                    None => ProviderError::Service(message),
                }
            })?;

        debug!(
            request_id = request_id,
            characters = response.request_characters,
            "Polly accepted synthesis request"
        );

        Ok(Box::pin(response.audio_stream.into_async_read()))
    }

    fn name(&self) -> &'static str {
        "aws-polly"
    }
}
