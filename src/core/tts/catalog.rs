//! Voice catalog: walks the provider's paginated voice listing.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::provider::{ProviderError, SpeechProvider, Voice, with_deadline};
use crate::errors::app_error::{AppError, AppResult};

/// Upper bound on `DescribeVoices` calls for a single listing.
pub const DEFAULT_MAX_VOICE_PAGES: usize = 100;

/// Lists every voice the provider offers, page by page.
#[derive(Clone)]
pub struct VoiceCatalog {
    provider: Arc<dyn SpeechProvider>,
    max_pages: usize,
    timeout: Duration,
}

impl VoiceCatalog {
    pub fn new(provider: Arc<dyn SpeechProvider>, max_pages: usize, timeout: Duration) -> Self {
        Self {
            provider,
            max_pages: max_pages.max(1),
            timeout,
        }
    }

    /// Fetch all pages and concatenate them in provider order.
    ///
    /// Fails with [`AppError::PaginationLimitExceeded`] if the provider still
    /// hands out a continuation token after `max_pages` calls.
    pub async fn list_voices(&self) -> AppResult<Vec<Voice>> {
        let mut voices = Vec::new();
        let mut next_token: Option<String> = None;

        for page_number in 1..=self.max_pages {
            let page = with_deadline(self.timeout, self.provider.describe_voices(next_token))
                .await
                .map_err(|e: ProviderError| {
                    warn!(
                        provider = self.provider.name(),
                        page = page_number,
                        error = %e,
                        "Voice listing failed"
                    );
                    AppError::from(e)
                })?;

            debug!(
                page = page_number,
                voices = page.voices.len(),
                has_more = page.next_token.is_some(),
                "Fetched voice page"
            );
            voices.extend(page.voices);

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => {
                    info!(pages = page_number, voices = voices.len(), "Listed voices");
                    return Ok(voices);
                }
            }
        }

        warn!(
            provider = self.provider.name(),
            pages = self.max_pages,
            "Voice listing did not terminate within the page limit"
        );
        Err(AppError::PaginationLimitExceeded {
            pages: self.max_pages,
        })
    }
}
