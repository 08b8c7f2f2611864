//! Interactive chat agent
//!
//! Wires the LLM client, the tool registry, and the terminal prompt into
//! one conversation loop.

mod session;

pub use session::ChatSession;

use eyre::Result;

use crate::config::Config;
use crate::tools::ToolRegistry;

/// Run an interactive chat session
///
/// This is the main entry point for `tinker chat`.
pub async fn run_chat(config: &Config, initial_message: Option<String>) -> Result<()> {
    // Fail fast on a missing credential
    config.validate()?;

    let llm = crate::llm::create_client(&config.llm)?;
    let tools = ToolRegistry::standard(&config.tools);

    let mut session = ChatSession::new(llm, tools, config.llm.max_tokens);
    session.run(initial_message).await
}
