//! Tool trait definition

use async_trait::async_trait;
use serde_json::Value;

/// A tool that can be called by the model
///
/// Implementations decode the raw JSON input into their own typed record,
/// validate it, and perform exactly one file-system or subprocess side
/// effect. Failures are returned as error results, never panics - a tool
/// error is local to one call and the conversation continues.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches the tool_use name the model sends)
    fn name(&self) -> &'static str;

    /// Human-readable description sent to the model
    ///
    /// Borrowed rather than `'static` so tools can embed configured values
    /// (the append length limit, for one).
    fn description(&self) -> &str;

    /// JSON Schema for input parameters
    ///
    /// Flattened, non-referential, mirroring the tool's input record, with
    /// additional properties disallowed.
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value) -> ToolResult;
}

/// Result of a tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Decode a tool's raw JSON input into its typed input record
///
/// Malformed or incomplete input maps to `ToolError::InvalidInput`, which
/// is reported back to the model as an error result.
pub fn decode_input<T: serde::de::DeserializeOwned>(input: Value) -> Result<T, super::ToolError> {
    serde_json::from_value(input).map_err(|e| super::ToolError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("Created directory tmp/demo");
        assert!(!result.is_error);
        assert_eq!(result.content, "Created directory tmp/demo");
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("tool not found");
        assert!(result.is_error);
        assert_eq!(result.content, "tool not found");
    }

    #[derive(Debug, Deserialize)]
    struct DemoInput {
        path: String,
    }

    #[test]
    fn test_decode_input_ok() {
        let input: DemoInput = decode_input(serde_json::json!({"path": "a.txt"})).unwrap();
        assert_eq!(input.path, "a.txt");
    }

    #[test]
    fn test_decode_input_missing_field() {
        let err = decode_input::<DemoInput>(serde_json::json!({})).unwrap_err();
        assert!(err.to_string().contains("path"));
    }
}
