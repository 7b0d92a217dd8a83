//! CLI module for Groundline.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - The interactive prompt reader
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle the
//! informational flags before any configuration is loaded:
//!
//! ```ignore
//! use groundline::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(options) = run_cli_command(command) {
//!     // start the client with `options`
//! }
//! ```

pub mod args;
pub mod prompt;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions, USAGE};
pub use prompt::{PromptInput, PromptReader, PROMPT_MARKER};
pub use version::{handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If an informational command (`--version`, `--help`) was handled
/// * `Some(options)` - If the client should run with `options`
pub fn run_cli_command(command: CliCommand) -> Option<CliOptions> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            None
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}
