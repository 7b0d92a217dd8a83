//! Version command for the Groundline CLI.

/// The current version of Groundline, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed by `--version`.
pub fn version_line() -> String {
    format!("groundline {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() {
    println!("{}", version_line());
}
