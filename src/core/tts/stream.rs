//! Chunked streaming of provider audio.
//!
//! [`AudioChunkStream`] turns the provider's readable audio source into a
//! pull-based [`Stream`] of [`Bytes`] chunks suitable for an HTTP body. Each
//! poll performs at most one read of at most `chunk_size` bytes; nothing is
//! read ahead. The source is released as soon as it reports exhaustion or an
//! error, or when the stream is dropped (for example on client disconnect).

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use tokio::io::ReadBuf;
use tracing::debug;

use super::provider::AudioStream;

/// Size of each chunk forwarded to the client.
pub const CHUNK_SIZE: usize = 1024;

/// Why the audio source was let go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Release {
    Exhausted,
    ReadError,
    Cancelled,
}

/// Forward-only, single-use chunk stream over an [`AudioStream`].
pub struct AudioChunkStream {
    source: Option<AudioStream>,
    buffer: Box<[u8]>,
    bytes_sent: u64,
    chunks_sent: u64,
}

impl AudioChunkStream {
    /// Stream `source` in chunks of [`CHUNK_SIZE`] bytes.
    pub fn new(source: AudioStream) -> Self {
        Self::with_chunk_size(source, CHUNK_SIZE)
    }

    /// Stream `source` in chunks of at most `chunk_size` bytes.
    pub fn with_chunk_size(source: AudioStream, chunk_size: usize) -> Self {
        Self {
            source: Some(source),
            buffer: vec![0u8; chunk_size.max(1)].into_boxed_slice(),
            bytes_sent: 0,
            chunks_sent: 0,
        }
    }

    /// Total bytes yielded so far.
    pub fn bytes_sent(&self) -> u64 {
        self.bytes_sent
    }

    /// Whether the source is still held.
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    fn release(&mut self, reason: Release) {
        if self.source.take().is_some() {
            debug!(
                reason = ?reason,
                bytes = self.bytes_sent,
                chunks = self.chunks_sent,
                "Released audio source"
            );
        }
    }
}

impl Stream for AudioChunkStream {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(source) = this.source.as_mut() else {
            return Poll::Ready(None);
        };

        let mut read_buf = ReadBuf::new(&mut this.buffer);
        match source.as_mut().poll_read(cx, &mut read_buf) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(())) => {
                let filled = read_buf.filled();
                if filled.is_empty() {
                    this.release(Release::Exhausted);
                    return Poll::Ready(None);
                }
                let chunk = Bytes::copy_from_slice(filled);
                this.bytes_sent += chunk.len() as u64;
                this.chunks_sent += 1;
                Poll::Ready(Some(Ok(chunk)))
            }
            Poll::Ready(Err(e)) => {
                this.release(Release::ReadError);
                Poll::Ready(Some(Err(e)))
            }
        }
    }
}

impl Drop for AudioChunkStream {
    fn drop(&mut self) {
        self.release(Release::Cancelled);
    }
}
