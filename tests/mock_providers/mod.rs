//! Mock Speech Provider
//!
//! Scripted stand-in for Amazon Polly used by the HTTP integration tests:
//! - Voice pages are served in order, one per `describe_voices` call
//! - Synthesis outcomes are consumed in order, one per `synthesize_speech` call
//! - Every call is recorded so tests can assert on what reached the provider
//! - Optional latency to exercise provider deadlines

// Allow dead code in test infrastructure - not every test uses every helper
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, ReadBuf};

use polly_gateway::core::tts::{
    AudioStream, ProviderError, ProviderResult, SpeechProvider, SpeechRequest, Voice, VoicePage,
};

/// What the next synthesis call should do
#[derive(Clone, Debug)]
pub enum MockSynthesis {
    /// Return this audio
    Audio(Vec<u8>),
    /// Reject the SSML payload
    InvalidSsml(String),
    /// Fail with any other provider error
    Failure(String),
    /// Never answer
    Hang,
}

/// Statistics collector for the mock provider
#[derive(Debug, Default)]
pub struct MockStats {
    pub describe_calls: AtomicU64,
    pub synthesize_calls: AtomicU64,
    pub bytes_read: Arc<AtomicUsize>,
}

impl MockStats {
    pub fn describe_calls(&self) -> u64 {
        self.describe_calls.load(Ordering::SeqCst)
    }

    pub fn synthesize_calls(&self) -> u64 {
        self.synthesize_calls.load(Ordering::SeqCst)
    }

    pub fn summary(&self) -> String {
        format!(
            "DescribeVoices: {}, SynthesizeSpeech: {}, BytesRead: {}",
            self.describe_calls(),
            self.synthesize_calls(),
            self.bytes_read.load(Ordering::SeqCst)
        )
    }
}

#[derive(Default)]
pub struct MockPollyProvider {
    pages: Mutex<VecDeque<ProviderResult<VoicePage>>>,
    outcomes: Mutex<VecDeque<MockSynthesis>>,
    latency: Option<Duration>,
    pub tokens: Mutex<Vec<Option<String>>>,
    pub requests: Mutex<Vec<SpeechRequest>>,
    pub stats: MockStats,
}

impl MockPollyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, voices: Vec<Voice>, next_token: Option<&str>) -> Self {
        self.pages.lock().unwrap().push_back(Ok(VoicePage {
            voices,
            next_token: next_token.map(str::to_string),
        }));
        self
    }

    pub fn with_page_error(self, message: &str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(Err(ProviderError::Service(message.to_string())));
        self
    }

    pub fn with_synthesis(self, outcome: MockSynthesis) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl SpeechProvider for MockPollyProvider {
    async fn describe_voices(&self, next_token: Option<String>) -> ProviderResult<VoicePage> {
        self.stats.describe_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(next_token);
        self.simulate_latency().await;

        let page = self.pages.lock().unwrap().pop_front();
        page.unwrap_or_else(|| Ok(VoicePage::default()))
    }

    async fn synthesize_speech(&self, request: SpeechRequest) -> ProviderResult<AudioStream> {
        self.stats.synthesize_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.simulate_latency().await;

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockSynthesis::Audio(data)) => Ok(Box::pin(CountingReader {
                data,
                position: 0,
                bytes_read: self.stats.bytes_read.clone(),
            })),
            Some(MockSynthesis::InvalidSsml(message)) => Err(ProviderError::InvalidMarkup(message)),
            Some(MockSynthesis::Failure(message)) => Err(ProviderError::Service(message)),
            Some(MockSynthesis::Hang) => std::future::pending().await,
            None => Err(ProviderError::Service("no scripted outcome".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "mock-polly"
    }
}

/// Audio source that records how many bytes the gateway actually pulled.
struct CountingReader {
    data: Vec<u8>,
    position: usize,
    bytes_read: Arc<AtomicUsize>,
}

impl AsyncRead for CountingReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let n = (self.data.len() - self.position).min(buf.remaining());
        let start = self.position;
        buf.put_slice(&self.data[start..start + n]);
        self.position += n;
        self.bytes_read.fetch_add(n, Ordering::SeqCst);
        Poll::Ready(Ok(()))
    }
}

/// A voice record shaped like Polly's.
pub fn voice(id: &str, language_code: &str, language_name: &str, gender: &str) -> Voice {
    Voice {
        gender: gender.to_string(),
        id: id.to_string(),
        language_code: language_code.to_string(),
        language_name: language_name.to_string(),
        name: id.to_string(),
        supported_engines: vec!["neural".to_string(), "standard".to_string()],
        ..Default::default()
    }
}

/// Deterministic fake audio of the given length.
pub fn audio_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}
