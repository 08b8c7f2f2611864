//! LLM error types
//!
//! Every variant here is fatal to the conversation loop: there is no retry
//! and no rate-limit backoff. A failed inference call aborts the run.

use thiserror::Error;

/// Errors that can occur during an inference call
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API key not set: export {0}")]
    MissingApiKey(String),
}
