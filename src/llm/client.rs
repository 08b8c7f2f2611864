//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Client for a hosted model API
///
/// One call per conversation turn. The conversation itself is owned by the
/// caller and sent in full with every request; the client holds only
/// connection details (model, credentials, endpoint).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one completion request and block until the full response arrives
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
