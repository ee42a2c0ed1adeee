//! Command-line argument parsing for the skillbridge CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print dashboard statistics once and exit
    Summary,
    /// Run the TUI application (default)
    RunTui,
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--api-base <url>` override
    pub api_base: Option<String>,
}

/// Parse command-line arguments.
///
/// The first recognised command flag wins; unknown flags are ignored.
/// `--api-base` accepts both `--api-base <url>` and `--api-base=<url>`.
///
/// # Examples
///
/// ```
/// use skillbridge::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["skillbridge".to_string(), "--summary".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Summary);
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut command = None;
    let mut api_base = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        let found = match arg.as_str() {
            "--version" | "-V" => Some(CliCommand::Version),
            "--help" | "-h" => Some(CliCommand::Help),
            "--summary" => Some(CliCommand::Summary),
            "--api-base" => {
                api_base = args.next().filter(|value| !value.starts_with("--"));
                None
            }
            other => {
                if let Some(value) = other.strip_prefix("--api-base=") {
                    api_base = Some(value.to_string()).filter(|v| !v.is_empty());
                }
                None
            }
        };
        if command.is_none() {
            command = found;
        }
    }

    CliArgs {
        command: command.unwrap_or(CliCommand::RunTui),
        api_base,
    }
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "skillbridge {}\n\
         Track learnings and the skills you applied from them.\n\n\
         USAGE:\n    skillbridge [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --summary           Print dashboard statistics and exit\n\
         \x20   --api-base <URL>    Store base URL (env: SKILLBRIDGE_API_BASE)\n\
         \x20   -V, --version       Print version\n\
         \x20   -h, --help          Print this help\n",
        super::VERSION
    )
}
