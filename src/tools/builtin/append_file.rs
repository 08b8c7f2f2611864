//! append_file tool - bounded append to a text file

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// Append content to a file, creating it and its parents if needed
///
/// Content length is capped so a single call cannot dump unbounded output
/// into a file. Rejected calls leave the file untouched.
pub struct AppendFileTool {
    max_bytes: usize,
    description: String,
}

#[derive(Debug, Deserialize)]
struct AppendFileInput {
    path: String,
    content: String,
}

impl AppendFileTool {
    pub fn new(max_bytes: usize) -> Self {
        let description = format!(
            "Append content to a text file at the specified path. Content must not exceed {} characters and cannot be empty string. If the file or its parent directories do not exist, they will be created. Example: {{\"path\": \"tmp/example.txt\", \"content\": \"This is example content.\"}}",
            max_bytes
        );
        Self { max_bytes, description }
    }

    async fn run(&self, input: AppendFileInput) -> Result<String, ToolError> {
        if input.path.is_empty() {
            return Err(ToolError::InvalidInput("path must not be empty".to_string()));
        }
        if input.content.is_empty() {
            return Err(ToolError::InvalidInput(
                "content must not be empty".to_string(),
            ));
        }
        if input.content.len() > self.max_bytes {
            return Err(ToolError::ContentTooLarge {
                limit: self.max_bytes,
                actual: input.content.len(),
            });
        }

        if let Some(parent) = Path::new(&input.path).parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&input.path)
            .await?;
        file.write_all(input.content.as_bytes()).await?;
        // tokio files buffer writes; flush before reporting success so the
        // content is visible to the next open of the same path
        file.flush().await?;

        Ok(format!("Successfully appended to {}", input.path))
    }
}

#[async_trait]
impl Tool for AppendFileTool {
    fn name(&self) -> &'static str {
        "append_file"
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The file path to append to. Mandatory field"
                },
                "content": {
                    "type": "string",
                    "description": "The content to append. Mandatory field. Cannot be empty string"
                }
            },
            "required": ["path", "content"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: AppendFileInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input).await {
            Ok(msg) => ToolResult::success(msg),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
