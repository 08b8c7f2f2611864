//! read_file tool - read file contents

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// Read a file's full contents as text
pub struct ReadFileTool;

#[derive(Debug, Deserialize)]
struct ReadFileInput {
    path: String,
}

impl ReadFileTool {
    async fn run(&self, input: ReadFileInput) -> Result<String, ToolError> {
        if input.path.is_empty() {
            return Err(ToolError::InvalidInput("path must not be empty".to_string()));
        }

        tokio::fs::read_to_string(&input.path)
            .await
            .map_err(|source| ToolError::ReadFailed {
                path: input.path,
                source,
            })
    }
}

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &'static str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read the contents of a given relative file path. Use this when you want to see what's inside a file. Do not use this with directory names."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Relative path of a file."
                }
            },
            "required": ["path"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: ReadFileInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input).await {
            Ok(content) => ToolResult::success(content),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
