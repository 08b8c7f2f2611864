//! ToolRegistry - tool lookup and dispatch
//!
//! The registry is an explicit value constructed at startup and passed into
//! the conversation loop - no globals. Tools keep their registration order
//! (that order is what the model sees) and are indexed by name for lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ToolsConfig;
use crate::llm::{ToolCall, ToolDefinition};

use super::builtin::{
    AppendFileTool, CreateDirTool, EditFileTool, GitCloneTool, GitPatchTool, ListFilesTool, ReadFileTool,
};
use super::{Tool, ToolError, ToolResult};

/// Fixed registry of tools the model may call
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create a registry with the standard tool set
    pub fn standard(config: &ToolsConfig) -> Self {
        let mut registry = Self::new();

        let tools: Vec<Box<dyn Tool>> = vec![
            Box::new(ReadFileTool),
            Box::new(ListFilesTool),
            Box::new(EditFileTool),
            Box::new(CreateDirTool),
            Box::new(AppendFileTool::new(config.append_max_bytes)),
            Box::new(GitCloneTool::new(&config.git_bin)),
            Box::new(GitPatchTool::new(&config.git_bin)),
        ];

        for tool in tools {
            // Builtin names are distinct by construction
            registry.register(tool).expect("builtin tool names are unique");
        }

        registry
    }

    /// Add a tool to the registry
    ///
    /// A duplicate name is a configuration defect and is rejected rather
    /// than silently shadowing the earlier registration.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), ToolError> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(ToolError::DuplicateTool { name });
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Tool definitions for an inference request, in registration order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|t| ToolDefinition::new(t.name(), t.description(), t.input_schema()))
            .collect()
    }

    /// Execute one requested tool call
    ///
    /// An unknown name is a local failure reported to the model, never an
    /// abort: the result carries the fixed "tool not found" payload.
    pub async fn dispatch(&self, call: &ToolCall) -> ToolResult {
        debug!(id = %call.id, name = %call.name, "dispatch: called");
        match self.index.get(&call.name) {
            Some(&i) => self.tools[i].execute(call.input.clone()).await,
            None => ToolResult::error("tool not found"),
        }
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard(&ToolsConfig::default())
    }
}
