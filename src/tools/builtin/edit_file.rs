//! edit_file tool - replace strings in a file, or create it

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// Replace every occurrence of a string in a file
///
/// With an empty `old_str` and a path that does not exist yet, the file is
/// created (parents included) holding `new_str`. That doubles as the write
/// path, so there is no separate create-file tool.
pub struct EditFileTool;

#[derive(Debug, Deserialize)]
struct EditFileInput {
    path: String,
    old_str: String,
    new_str: String,
}

impl EditFileTool {
    async fn run(&self, input: EditFileInput) -> Result<String, ToolError> {
        if input.path.is_empty() {
            return Err(ToolError::InvalidInput("path must not be empty".to_string()));
        }
        if input.old_str == input.new_str {
            return Err(ToolError::InvalidInput(
                "old_str and new_str must differ".to_string(),
            ));
        }

        let content = match tokio::fs::read_to_string(&input.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && input.old_str.is_empty() => {
                return create_new_file(&input.path, &input.new_str).await;
            }
            Err(e) => {
                return Err(ToolError::ReadFailed { path: input.path, source: e });
            }
        };

        let updated = content.replace(&input.old_str, &input.new_str);
        if updated == content && !input.old_str.is_empty() {
            return Err(ToolError::OldStrNotFound);
        }

        tokio::fs::write(&input.path, updated).await?;
        Ok("OK".to_string())
    }
}

async fn create_new_file(path: &str, content: &str) -> Result<String, ToolError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;
    Ok(format!("Created {}", path))
}

#[async_trait]
impl Tool for EditFileTool {
    fn name(&self) -> &'static str {
        "edit_file"
    }

    fn description(&self) -> &str {
        "Make edits to a text file.\n\nReplaces 'old_str' with 'new_str' in the given file. 'old_str' and 'new_str' MUST be different from each other.\n\nIf the file specified with path doesn't exist, it will be created.\n"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The path to the file"
                },
                "old_str": {
                    "type": "string",
                    "description": "Text to search for - must match exactly"
                },
                "new_str": {
                    "type": "string",
                    "description": "Text to replace old_str with"
                }
            },
            "required": ["path", "old_str", "new_str"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: EditFileInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input).await {
            Ok(msg) => ToolResult::success(msg),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
