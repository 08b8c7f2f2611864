//! Tool error types
//!
//! All of these are local failures: they become error-flagged tool results
//! in the conversation and never abort the run.

use thiserror::Error;

/// Errors that can occur during tool execution
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("old_str not found in file")]
    OldStrNotFound,

    #[error("content exceeds {limit} byte limit (got {actual})")]
    ContentTooLarge { limit: usize, actual: usize },

    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed ({status}):\n{output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("duplicate tool name: {name}")]
    DuplicateTool { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_too_large_message() {
        let err = ToolError::ContentTooLarge {
            limit: 4000,
            actual: 5000,
        };

        let msg = err.to_string();
        assert!(msg.contains("4000"));
        assert!(msg.contains("5000"));
    }

    #[test]
    fn test_read_failed_names_path() {
        let err = ToolError::ReadFailed {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_command_failed_carries_output() {
        let err = ToolError::CommandFailed {
            command: "git clone".to_string(),
            status: "exit status: 128".to_string(),
            output: "fatal: repository not found".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("git clone"));
        assert!(msg.contains("repository not found"));
    }
}
