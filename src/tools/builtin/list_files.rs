//! list_files tool - recursive directory listing

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use walkdir::WalkDir;

use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// List files and directories under a path, recursively
///
/// Output is a JSON array of paths relative to the walked root. Directories
/// carry a trailing `/`; the root itself is excluded. Entries are walked in
/// name-sorted order so the output is deterministic.
pub struct ListFilesTool;

#[derive(Debug, Deserialize)]
struct ListFilesInput {
    #[serde(default)]
    path: Option<String>,
}

impl ListFilesTool {
    fn run(&self, input: ListFilesInput) -> Result<String, ToolError> {
        let root = input
            .path
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string());

        let mut files = Vec::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry?;
            if entry.depth() == 0 {
                continue;
            }

            let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let mut name = rel.to_string_lossy().into_owned();
            if entry.file_type().is_dir() {
                name.push('/');
            }
            files.push(name);
        }

        Ok(serde_json::to_string(&files)?)
    }
}

#[async_trait]
impl Tool for ListFilesTool {
    fn name(&self) -> &'static str {
        "list_files"
    }

    fn description(&self) -> &str {
        "List files and directories at a given path. If no path is provided, lists files in the current directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Optional path to list files from."
                }
            },
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: ListFilesInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input) {
            Ok(listing) => ToolResult::success(listing),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
