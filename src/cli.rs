//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tinker - terminal chat agent for Claude
#[derive(Parser)]
#[command(
    name = "tinker",
    about = "Chat with Claude in the terminal, with file and git tools",
    version,
    after_help = "Logs are written to: ~/.local/share/tinker/logs/tinker.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive chat (the default)
    Chat {
        /// Optional opening message, sent before the prompt appears
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,
    },

    /// List the tools the model can call
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["tinker"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_chat() {
        let cli = Cli::parse_from(["tinker", "chat"]);
        assert!(matches!(cli.command, Some(Command::Chat { message: None })));
    }

    #[test]
    fn test_cli_parse_chat_with_message() {
        let cli = Cli::parse_from(["tinker", "chat", "list the files here"]);
        if let Some(Command::Chat { message }) = cli.command {
            assert_eq!(message.as_deref(), Some("list the files here"));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_tools() {
        let cli = Cli::parse_from(["tinker", "tools"]);
        assert!(matches!(cli.command, Some(Command::Tools)));
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["tinker", "-c", "/path/to/tinker.yml", "tools"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/tinker.yml")));
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let cli = Cli::parse_from(["tinker", "chat", "--verbose"]);
        assert!(cli.verbose);
    }
}
