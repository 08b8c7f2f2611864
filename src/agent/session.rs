//! Interactive chat session and the tool-invocation loop

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::llm::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmClient, Message, MessageContent, Role, StopReason,
    ToolCall,
};
use crate::tools::ToolRegistry;

/// One interactive conversation with the model
///
/// Owns the conversation transcript for the lifetime of the process. Each
/// user line starts a turn: the full transcript goes to the model, and as
/// long as the reply requests tool calls the loop executes them and
/// re-infers without asking for more input. Control returns to the prompt
/// only when a reply contains no tool calls.
pub struct ChatSession {
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    conversation: Vec<Message>,
    max_tokens: u32,
}

impl ChatSession {
    /// Create a new session
    pub fn new(llm: Arc<dyn LlmClient>, tools: ToolRegistry, max_tokens: u32) -> Self {
        Self {
            llm,
            tools,
            conversation: Vec::new(),
            max_tokens,
        }
    }

    /// Run the interactive prompt loop until end-of-input
    pub async fn run(&mut self, initial_message: Option<String>) -> Result<()> {
        self.print_welcome();

        if let Some(message) = initial_message {
            println!("{}: {}", "You".bright_blue(), message);
            self.process_input(&message).await?;
        }

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{}: ", "You".bright_blue()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match self.handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        self.process_input(input).await?;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C clears the line; it is not end-of-input
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Process one user input through the tool-invocation loop
    ///
    /// Appends the input as a user message, then alternates inference and
    /// tool dispatch until a reply requests no tools. Inference failures are
    /// fatal and propagate; tool failures are reported back to the model as
    /// error results and the turn continues.
    pub async fn process_input(&mut self, input: &str) -> Result<()> {
        debug!(chars = input.len(), "process_input: starting turn");
        self.conversation.push(Message::user(input));

        loop {
            let response = self.complete().await?;
            self.conversation.push(Message::assistant_blocks(response.blocks.clone()));

            let mut results: Vec<ContentBlock> = Vec::new();
            for block in &response.blocks {
                match block {
                    ContentBlock::Text { text } => {
                        println!("{}: {}", "Claude".bright_yellow(), text);
                    }
                    ContentBlock::ToolUse { id, name, input } => {
                        results.push(self.run_tool(id, name, input).await);
                    }
                    // The assistant never sends tool_result blocks
                    ContentBlock::ToolResult { .. } => {}
                }
            }

            if response.stop_reason == StopReason::MaxTokens {
                println!("{}", "[response truncated: max_tokens reached]".yellow());
            }

            if results.is_empty() {
                break;
            }

            // One synthetic user message carrying every result, request order
            self.conversation.push(Message::user_blocks(results));
        }

        println!();
        Ok(())
    }

    /// Execute one requested tool call and wrap it as a result block
    async fn run_tool(&self, id: &str, name: &str, input: &serde_json::Value) -> ContentBlock {
        if self.tools.has_tool(name) {
            println!("{}: {}({})", "tool".bright_green(), name, input);
        }

        let call = ToolCall {
            id: id.to_string(),
            name: name.to_string(),
            input: input.clone(),
        };
        let result = self.tools.dispatch(&call).await;

        if result.is_error {
            println!("{}: {}", "error".red(), result.content);
        }

        ContentBlock::tool_result(id, &result.content, result.is_error)
    }

    /// Send the conversation and tool definitions for one inference call
    async fn complete(&self) -> Result<CompletionResponse> {
        let request = CompletionRequest {
            messages: self.conversation.clone(),
            tools: self.tools.definitions(),
            max_tokens: self.max_tokens,
        };

        let response = self.llm.complete(request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            blocks = response.blocks.len(),
            "complete: response received"
        );
        Ok(response)
    }

    /// The conversation transcript so far, oldest first
    pub fn conversation(&self) -> &[Message] {
        &self.conversation
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Chat with Claude".bright_cyan().bold());
        println!(
            "Type {} for commands, {} to quit",
            "/help".yellow(),
            "ctrl-d".yellow()
        );
        println!();
    }

    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let cmd = input.split_whitespace().next().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/clear" => {
                self.conversation.clear();
                println!("{}", "Conversation cleared.".dimmed());
                SlashResult::Continue
            }
            "/history" => {
                self.print_history();
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:12} Show this help", "/help".yellow());
        println!("  {:12} Exit the chat", "/quit".yellow());
        println!("  {:12} Clear conversation history", "/clear".yellow());
        println!("  {:12} Show conversation history", "/history".yellow());
        println!();
        println!("{}", "Available Tools:".bright_cyan());
        for def in self.tools.definitions() {
            let summary = def.description.lines().next().unwrap_or("");
            println!("  {:12} {}", def.name.yellow(), summary);
        }
        println!();
    }

    fn print_history(&self) {
        if self.conversation.is_empty() {
            println!("{}", "No conversation history.".dimmed());
            return;
        }

        println!();
        println!("{}", "Conversation History:".bright_cyan());
        for (i, msg) in self.conversation.iter().enumerate() {
            let role = match msg.role {
                Role::User => "User".bright_blue(),
                Role::Assistant => "Claude".bright_yellow(),
            };
            let preview = match &msg.content {
                MessageContent::Text(text) => {
                    let head: String = text.chars().take(50).collect();
                    if text.chars().count() > 50 { format!("{}...", head) } else { head }
                }
                MessageContent::Blocks(blocks) => format!("[{} blocks]", blocks.len()),
            };
            println!("  {}. {}: {}", i + 1, role, preview);
        }
        println!();
    }
}

/// Result of handling a slash command
enum SlashResult {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolsConfig;
    use crate::llm::client::mock::MockLlmClient;
    use std::fs;
    use tempfile::tempdir;

    fn session_with(responses: Vec<CompletionResponse>) -> (ChatSession, Arc<MockLlmClient>) {
        let llm = Arc::new(MockLlmClient::new(responses));
        let tools = ToolRegistry::standard(&ToolsConfig::default());
        let session = ChatSession::new(llm.clone(), tools, 1024);
        (session, llm)
    }

    fn result_blocks(msg: &Message) -> Vec<(&str, &str, bool)> {
        msg.content
            .as_blocks()
            .unwrap()
            .iter()
            .map(|b| match b {
                ContentBlock::ToolResult {
                    tool_use_id,
                    content,
                    is_error,
                } => (tool_use_id.as_str(), content.as_str(), *is_error),
                other => panic!("expected tool_result block, got {:?}", other),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_plain_reply_ends_turn() {
        let (mut session, llm) = session_with(vec![MockLlmClient::response(
            vec![ContentBlock::text("Hello!")],
            StopReason::EndTurn,
        )]);

        session.process_input("hi").await.unwrap();

        assert_eq!(llm.call_count(), 1);
        let conv = session.conversation();
        assert_eq!(conv.len(), 2);
        assert_eq!(conv[0].role, Role::User);
        assert_eq!(conv[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_tool_call_triggers_reinference_without_user_input() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();

        let (mut session, llm) = session_with(vec![
            MockLlmClient::response(
                vec![
                    ContentBlock::text("Let me check."),
                    ContentBlock::tool_use(
                        "toolu_1",
                        "list_files",
                        serde_json::json!({"path": temp.path().to_str().unwrap()}),
                    ),
                ],
                StopReason::ToolUse,
            ),
            MockLlmClient::response(
                vec![ContentBlock::text("The directory holds a.txt.")],
                StopReason::EndTurn,
            ),
        ]);

        session.process_input("list files").await.unwrap();

        // Two inference calls, the second without any new user input
        assert_eq!(llm.call_count(), 2);

        // user, assistant(tool_use), user(tool_result), assistant(text)
        let conv = session.conversation();
        assert_eq!(conv.len(), 4);
        assert_eq!(conv[2].role, Role::User);

        let results = result_blocks(&conv[2]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "toolu_1");
        assert!(results[0].1.contains("a.txt"));
        assert!(!results[0].2);

        // The second request carried the tool result as its last message
        let second = &llm.requests()[1];
        let last = second.messages.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert!(last.content.as_blocks().is_some());
    }

    #[tokio::test]
    async fn test_multiple_tool_calls_keep_request_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("data.txt"), "payload").unwrap();
        let path = temp.path().join("data.txt");

        let (mut session, llm) = session_with(vec![
            MockLlmClient::response(
                vec![
                    ContentBlock::tool_use(
                        "toolu_a",
                        "read_file",
                        serde_json::json!({"path": path.to_str().unwrap()}),
                    ),
                    ContentBlock::tool_use("toolu_b", "frobnicate", serde_json::json!({})),
                    ContentBlock::tool_use(
                        "toolu_c",
                        "list_files",
                        serde_json::json!({"path": temp.path().to_str().unwrap()}),
                    ),
                ],
                StopReason::ToolUse,
            ),
            MockLlmClient::response(vec![ContentBlock::text("Done.")], StopReason::EndTurn),
        ]);

        session.process_input("do three things").await.unwrap();

        let conv = session.conversation();
        let results = result_blocks(&conv[2]);
        assert_eq!(results.len(), 3);

        // Same order as the requests, one result each
        assert_eq!(results[0].0, "toolu_a");
        assert_eq!(results[0].1, "payload");
        assert!(!results[0].2);

        assert_eq!(results[1].0, "toolu_b");
        assert_eq!(results[1].1, "tool not found");
        assert!(results[1].2);

        assert_eq!(results[2].0, "toolu_c");
        assert!(results[2].1.contains("data.txt"));

        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unknown_tool_does_not_touch_filesystem() {
        let temp = tempdir().unwrap();

        let (mut session, _llm) = session_with(vec![
            MockLlmClient::response(
                vec![ContentBlock::tool_use(
                    "toolu_x",
                    "frobnicate",
                    serde_json::json!({"path": temp.path().join("ghost.txt").to_str().unwrap()}),
                )],
                StopReason::ToolUse,
            ),
            MockLlmClient::response(vec![ContentBlock::text("Sorry.")], StopReason::EndTurn),
        ]);

        session.process_input("frobnicate something").await.unwrap();

        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_edit_through_loop_touches_real_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("greeting.txt");
        fs::write(&file, "hello world").unwrap();

        let (mut session, _llm) = session_with(vec![
            MockLlmClient::response(
                vec![ContentBlock::tool_use(
                    "toolu_e",
                    "edit_file",
                    serde_json::json!({
                        "path": file.to_str().unwrap(),
                        "old_str": "world",
                        "new_str": "tinker"
                    }),
                )],
                StopReason::ToolUse,
            ),
            MockLlmClient::response(vec![ContentBlock::text("Edited.")], StopReason::EndTurn),
        ]);

        session.process_input("rename world").await.unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "hello tinker");

        let results = result_blocks(&session.conversation()[2]);
        assert_eq!(results[0].1, "OK");
    }

    #[tokio::test]
    async fn test_inference_failure_is_fatal() {
        // No scripted responses: the first call fails
        let (mut session, _llm) = session_with(vec![]);

        let err = session.process_input("hello").await.unwrap_err();
        assert!(err.to_string().contains("No more mock responses"));

        // The user message stays; no assistant message was appended
        assert_eq!(session.conversation().len(), 1);
    }

    #[tokio::test]
    async fn test_max_tokens_reply_without_tools_ends_turn() {
        let (mut session, llm) = session_with(vec![MockLlmClient::response(
            vec![ContentBlock::text("Truncat")],
            StopReason::MaxTokens,
        )]);

        session.process_input("write an essay").await.unwrap();

        assert_eq!(llm.call_count(), 1);
        assert_eq!(session.conversation().len(), 2);
    }

    #[tokio::test]
    async fn test_requests_carry_tool_definitions() {
        let (mut session, llm) = session_with(vec![MockLlmClient::response(
            vec![ContentBlock::text("Hi.")],
            StopReason::EndTurn,
        )]);

        session.process_input("hi").await.unwrap();

        let request = &llm.requests()[0];
        assert_eq!(request.tools.len(), 7);
        assert_eq!(request.tools[0].name, "read_file");
        assert_eq!(request.max_tokens, 1024);
    }
}
