//! git_patch tool - apply a unified diff to a repository

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;

use super::combined_output;
use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// Apply a unified diff to a git repository via `git apply`
///
/// The patch text is piped over stdin rather than written to a temp file,
/// and the command runs as an argument vector, never through a shell.
pub struct GitPatchTool {
    git_bin: String,
}

#[derive(Debug, Deserialize)]
struct GitPatchInput {
    repo_path: String,
    patch: String,
}

impl GitPatchTool {
    pub fn new(git_bin: impl Into<String>) -> Self {
        Self { git_bin: git_bin.into() }
    }

    async fn run(&self, input: GitPatchInput) -> Result<String, ToolError> {
        if input.repo_path.is_empty() {
            return Err(ToolError::InvalidInput(
                "repo_path must be provided".to_string(),
            ));
        }
        if input.patch.is_empty() {
            return Err(ToolError::InvalidInput(
                "patch content must be provided".to_string(),
            ));
        }

        let mut child = tokio::process::Command::new(&self.git_bin)
            .args(["-C", &input.repo_path, "apply", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.patch.as_bytes()).await?;
            // Dropping stdin closes the pipe so git sees end-of-patch.
        }

        let output = child.wait_with_output().await?;

        let combined = combined_output(&output);
        if !output.status.success() {
            return Err(ToolError::CommandFailed {
                command: "git apply".to_string(),
                status: output.status.to_string(),
                output: combined,
            });
        }

        Ok(combined)
    }
}

#[async_trait]
impl Tool for GitPatchTool {
    fn name(&self) -> &'static str {
        "git_patch"
    }

    fn description(&self) -> &str {
        "Apply a unified diff patch to a Git repository. Provide `repo_path` and `patch` (the diff text)."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "repo_path": {
                    "type": "string",
                    "description": "Local path of the Git repository to which the patch will be applied."
                },
                "patch": {
                    "type": "string",
                    "description": "Unified diff text to apply via git apply."
                }
            },
            "required": ["repo_path", "patch"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: GitPatchInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input).await {
            Ok(out) => ToolResult::success(out),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}
