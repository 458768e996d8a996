//! HTTP request handlers
//!
//! - `api` - Landing page and health check
//! - `read` - Speech synthesis with streamed audio
//! - `voices` - Voice listing endpoint

pub mod api;
pub mod read;
pub mod voices;
