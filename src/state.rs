use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::core::tts::{
    AwsPollyConfig, AwsPollyProvider, SpeechProvider, SpeechSynthesisPipeline, VoiceCatalog,
};

/// Application state shared across all handlers
///
/// Holds one provider client for the process lifetime. Both services share
/// it, and nothing in here is mutated per request.
pub struct AppState {
    pub config: ServerConfig,
    pub voices: VoiceCatalog,
    pub speech: SpeechSynthesisPipeline,
}

impl AppState {
    /// Build state backed by Amazon Polly.
    pub async fn new(config: ServerConfig) -> Arc<Self> {
        let polly_config = AwsPollyConfig::from_server_config(&config);
        let provider = AwsPollyProvider::connect(&polly_config).await;
        info!(
            region = %provider.region(),
            explicit_credentials = polly_config.has_explicit_credentials(),
            "Amazon Polly client ready"
        );

        Self::with_provider(config, Arc::new(provider))
    }

    /// Build state around an arbitrary provider.
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn SpeechProvider>) -> Arc<Self> {
        let timeout = config.provider_timeout();
        let voices = VoiceCatalog::new(provider.clone(), config.max_voice_pages, timeout);
        let speech = SpeechSynthesisPipeline::new(provider, timeout, config.escape_ssml);

        Arc::new(Self {
            config,
            voices,
            speech,
        })
    }
}
