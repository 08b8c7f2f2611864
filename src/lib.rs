//! Tinker - terminal chat agent for Claude
//!
//! Tinker relays what you type to the Anthropic Messages API and lets the
//! model act on your machine through a small set of tools: reading and
//! editing files, creating directories, walking directory trees, cloning
//! git repositories and applying patches. When a reply requests tool calls
//! the loop executes them and re-infers with the results, without asking
//! for more input; the prompt comes back only when a reply contains none.
//!
//! # Modules
//!
//! - [`llm`] - LLM client trait and Anthropic implementation
//! - [`tools`] - The tool trait, registry, and built-in tools
//! - [`agent`] - The interactive session and tool-invocation loop
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod agent;
pub mod cli;
pub mod config;
pub mod llm;
pub mod tools;

// Re-export commonly used types
pub use agent::ChatSession;
pub use config::{Config, LlmConfig, ToolsConfig};
pub use llm::{
    AnthropicClient, CompletionRequest, CompletionResponse, ContentBlock, LlmClient, LlmError, Message, StopReason,
    ToolCall, ToolDefinition,
};
pub use tools::{Tool, ToolError, ToolRegistry, ToolResult};
