//! Built-in tools: file access, directory handling, git

mod append_file;
mod create_dir;
mod edit_file;
mod git_clone;
mod git_patch;
mod list_files;
mod read_file;

pub use append_file::AppendFileTool;
pub use create_dir::CreateDirTool;
pub use edit_file::EditFileTool;
pub use git_clone::GitCloneTool;
pub use git_patch::GitPatchTool;
pub use list_files::ListFilesTool;
pub use read_file::ReadFileTool;

/// Stdout followed by stderr, lossily decoded
///
/// Git writes progress and errors to stderr; callers report both streams
/// as one block of output.
fn combined_output(output: &std::process::Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
