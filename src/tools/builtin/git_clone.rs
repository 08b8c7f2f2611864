//! git_clone tool - clone a repository

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::combined_output;
use crate::tools::{Tool, ToolError, ToolResult, decode_input};

/// Clone a git repository into a local directory
///
/// The clone runs as an argument vector, never through a shell, so URLs and
/// paths are passed to git verbatim.
pub struct GitCloneTool {
    git_bin: String,
}

#[derive(Debug, Deserialize)]
struct GitCloneInput {
    repo_url: String,
    dest_path: String,
}

impl GitCloneTool {
    pub fn new(git_bin: impl Into<String>) -> Self {
        Self { git_bin: git_bin.into() }
    }

    async fn run(&self, input: GitCloneInput) -> Result<String, ToolError> {
        if input.repo_url.is_empty() || input.dest_path.is_empty() {
            return Err(ToolError::InvalidInput(
                "both repo_url and dest_path must be provided".to_string(),
            ));
        }

        let output = tokio::process::Command::new(&self.git_bin)
            .args(["clone", &input.repo_url, &input.dest_path])
            .output()
            .await?;

        let combined = combined_output(&output);
        if !output.status.success() {
            return Err(ToolError::CommandFailed {
                command: "git clone".to_string(),
                status: output.status.to_string(),
                output: combined,
            });
        }

        Ok(combined)
    }
}

#[async_trait]
impl Tool for GitCloneTool {
    fn name(&self) -> &'static str {
        "git_clone"
    }

    fn description(&self) -> &str {
        "Clone a public Git repository. Provide `repo_url` and `dest_path`."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "repo_url": {
                    "type": "string",
                    "description": "URL of the public Git repository to clone."
                },
                "dest_path": {
                    "type": "string",
                    "description": "Local directory path where the repo will be cloned."
                }
            },
            "required": ["repo_url", "dest_path"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, input: Value) -> ToolResult {
        let input: GitCloneInput = match decode_input(input) {
            Ok(i) => i,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        match self.run(input).await {
            Ok(out) => ToolResult::success(out),
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn git_available() -> bool {
        std::process::Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn test_git_clone_local_repository() {
        if !git_available() {
            eprintln!("git not installed, skipping");
            return;
        }

        let temp = tempdir().unwrap();
        let source = temp.path().join("source");
        let status = std::process::Command::new("git")
            .args(["init", source.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(status.status.success());

        let dest = temp.path().join("dest");
        let tool = GitCloneTool::new("git");
        let result = tool
            .execute(serde_json::json!({
                "repo_url": source.to_str().unwrap(),
                "dest_path": dest.to_str().unwrap()
            }))
            .await;

        assert!(!result.is_error, "clone failed: {}", result.content);
        assert!(dest.join(".git").is_dir());
    }

    #[tokio::test]
    async fn test_git_clone_nonexistent_source() {
        if !git_available() {
            eprintln!("git not installed, skipping");
            return;
        }

        let temp = tempdir().unwrap();
        let tool = GitCloneTool::new("git");
        let result = tool
            .execute(serde_json::json!({
                "repo_url": temp.path().join("no-such-repo").to_str().unwrap(),
                "dest_path": temp.path().join("dest").to_str().unwrap()
            }))
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("git clone failed"));
    }

    #[tokio::test]
    async fn test_git_clone_missing_binary() {
        let temp = tempdir().unwrap();
        let tool = GitCloneTool::new("/nonexistent/git-binary");
        let result = tool
            .execute(serde_json::json!({
                "repo_url": "https://example.com/repo.git",
                "dest_path": temp.path().join("dest").to_str().unwrap()
            }))
            .await;

        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_git_clone_requires_both_fields() {
        let tool = GitCloneTool::new("git");
        let result = tool
            .execute(serde_json::json!({"repo_url": "", "dest_path": "somewhere"}))
            .await;

        assert!(result.is_error);
        assert!(result.content.contains("repo_url and dest_path"));
    }
}
