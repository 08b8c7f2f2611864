//! Tool system
//!
//! Tools are the model's only access to the local machine: file reads and
//! edits, directory creation and listing, and git clone/apply. Each tool
//! validates its own typed input and performs exactly one side effect;
//! failures stay local to the call that caused them.

mod error;
mod registry;
mod traits;

pub mod builtin;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolResult, decode_input};
