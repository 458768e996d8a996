//! Error types shared by the HTTP layer
//!
//! - `app_error` - API errors and their HTTP mapping

pub mod app_error;
