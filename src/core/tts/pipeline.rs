//! Synthesis pipeline: validation, SSML wrapping, the markup fallback and
//! chunked streaming of the resulting audio.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::aws_polly::{DEFAULT_ENGINE, FALLBACK_ENGINE, PollyOutputFormat, TextType};
use super::prosody::{DEFAULT_SPEED, build_ssml, resolve_rate};
use super::provider::{AudioStream, ProviderResult, SpeechProvider, SpeechRequest, with_deadline};
use super::stream::AudioChunkStream;
use crate::errors::app_error::{AppError, AppResult};

/// A `/read` request after query extraction, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    /// Wire name of the output format, checked during validation
    pub output_format: String,
    pub speed: String,
    pub engine: String,
}

impl SynthesisRequest {
    /// Build a request with the default speed and engine.
    pub fn new(
        text: impl Into<String>,
        voice_id: impl Into<String>,
        output_format: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
            output_format: output_format.into(),
            speed: DEFAULT_SPEED.to_string(),
            engine: DEFAULT_ENGINE.to_string(),
        }
    }

    pub fn with_speed(mut self, speed: impl Into<String>) -> Self {
        self.speed = speed.into();
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Check the request locally. Returns the parsed output format.
    pub fn validate(&self) -> AppResult<PollyOutputFormat> {
        if self.text.is_empty() || self.voice_id.is_empty() {
            return Err(AppError::InvalidRequest);
        }
        PollyOutputFormat::parse(&self.output_format).ok_or(AppError::InvalidRequest)
    }
}

/// Audio ready to be written to the response body.
pub struct SynthesizedSpeech {
    pub content_type: &'static str,
    pub chunks: AudioChunkStream,
    /// Whether the plain-text fallback produced this audio
    pub used_fallback: bool,
}

#[derive(Clone)]
pub struct SpeechSynthesisPipeline {
    provider: Arc<dyn SpeechProvider>,
    timeout: Duration,
    escape_ssml: bool,
}

impl SpeechSynthesisPipeline {
    pub fn new(provider: Arc<dyn SpeechProvider>, timeout: Duration, escape_ssml: bool) -> Self {
        Self {
            provider,
            timeout,
            escape_ssml,
        }
    }

    /// Synthesize `request`, retrying once as plain text if the provider
    /// rejects the SSML payload.
    pub async fn synthesize(&self, request: SynthesisRequest) -> AppResult<SynthesizedSpeech> {
        let output_format = request.validate()?;
        let rate = resolve_rate(&request.speed);
        let ssml = build_ssml(&request.text, rate, self.escape_ssml);

        debug!(
            voice_id = %request.voice_id,
            output_format = %output_format,
            engine = %request.engine,
            rate = %rate,
            "Synthesizing speech"
        );

        let primary = SpeechRequest {
            text: ssml,
            text_type: TextType::Ssml,
            voice_id: request.voice_id.clone(),
            output_format,
            engine: request.engine.clone(),
        };

        let (source, used_fallback) = match self.call(primary).await {
            Ok(source) => (source, false),
            Err(e) if e.is_invalid_markup() => {
                warn!(
                    provider = self.provider.name(),
                    voice_id = %request.voice_id,
                    error = %e,
                    "SSML rejected, retrying as plain text"
                );
                let fallback = SpeechRequest {
                    text: request.text,
                    text_type: TextType::Text,
                    voice_id: request.voice_id,
                    output_format,
                    engine: FALLBACK_ENGINE.to_string(),
                };
                let source = self.call(fallback).await.map_err(|e| {
                    error!(provider = self.provider.name(), error = %e, "Fallback synthesis failed");
                    AppError::from(e)
                })?;
                (source, true)
            }
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "Synthesis failed");
                return Err(e.into());
            }
        };

        info!(
            output_format = %output_format,
            fallback = used_fallback,
            "Streaming synthesized audio"
        );

        Ok(SynthesizedSpeech {
            content_type: output_format.content_type(),
            chunks: AudioChunkStream::new(source),
            used_fallback,
        })
    }

    async fn call(&self, request: SpeechRequest) -> ProviderResult<AudioStream> {
        with_deadline(self.timeout, self.provider.synthesize_speech(request)).await
    }
}
