//! create_dir tool - make a directory and its parents

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// Create a directory, including any missing parents
pub struct CreateDirTool;

#[derive(Debug, Deserialize)]
struct CreateDirInput {
    path: String,
}

impl CreateDirTool {
    async fn run(&self, input: CreateDirInput) -> Result<String, ToolError> {
        if input.path.is_empty() {
            return Err(ToolError::InvalidInput("path must not be empty".to_string()));
        }

        tokio::fs::create_dir_all(&input.path).await?;
        Ok(format!("Successfully created directory {}", input.path))
    }
}

#[async_trait]
impl Tool for CreateDirTool {
    fn name(&self) -> &'static str {
        "create_dir"
    }

    fn description(&self) -> &str {
        "Create a directory (including any necessary parents) at the specified path."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The directory path to create (can be nested)."
                }
            },
            "required": ["path"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: CreateDirInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input).await {
            Ok(msg) => ToolResult::success(msg),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
