//! CLI module for skillbridge.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and help display
//! - The non-interactive `--summary` command
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use skillbridge::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&args.command, gateway.as_ref()).await {
//!     // CLI command was executed, exit with result
//!     std::process::exit(if result.is_ok() { 0 } else { 1 });
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod summary;
pub mod version;

pub use args::{parse_args, usage, CliArgs, CliCommand};
pub use summary::{handle_summary_command, render_summary};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::gateway::LearningGateway;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub async fn run_cli_command(
    command: &CliCommand,
    gateway: &dyn LearningGateway,
) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            // This function never returns (calls exit)
            handle_version_command();
        }
        CliCommand::Help => {
            print!("{}", usage());
            Some(Ok(()))
        }
        CliCommand::Summary => Some(handle_summary_command(gateway).await),
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockGateway;

    #[tokio::test]
    async fn test_run_tui_returns_none() {
        let gateway = MockGateway::new();
        assert!(run_cli_command(&CliCommand::RunTui, &gateway).await.is_none());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_summary_fetches_once() {
        let gateway = MockGateway::new();
        let result = run_cli_command(&CliCommand::Summary, &gateway).await;
        assert!(matches!(result, Some(Ok(()))));
        assert_eq!(gateway.list_count(), 1);
    }
}
