//! Command-line argument parsing for Groundline.

use crate::config::Config;
use crate::error::ConfigError;

/// Flags that adjust the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub no_thoughts: bool,
    pub no_search: bool,
    /// Send this prompt once and exit instead of reading prompts
    pub prompt: Option<String>,
}

impl CliOptions {
    /// Apply flag overrides on top of an environment-derived config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if self.no_thoughts {
            config = config.with_include_thoughts(false);
        }
        if self.no_search {
            config = config.with_google_search(false);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the client (default)
    Run(CliOptions),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: groundline [OPTIONS]

Options:
  --model <name>      Model to query (env GROUNDLINE_MODEL)
  --base-url <url>    API base URL (env GROUNDLINE_BASE_URL)
  --no-thoughts       Do not request the thinking trace
  --no-search         Do not enable web search grounding
  --prompt <text>     Send one prompt and exit
  -V, --version       Print version
  -h, --help          Print this help

The API key is read from GEMINI_API_KEY.";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use groundline::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["groundline".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--model" => options.model = Some(value_for(&arg, args.next())?),
            "--base-url" => options.base_url = Some(value_for(&arg, args.next())?),
            "--prompt" => options.prompt = Some(value_for(&arg, args.next())?),
            "--no-thoughts" => options.no_thoughts = true,
            "--no-search" => options.no_search = true,
            _ => {
                return Err(ConfigError::InvalidValue {
                    name: "argument".to_string(),
                    value: arg,
                })
            }
        }
    }

    Ok(CliCommand::Run(options))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.starts_with("--") => Ok(value),
        _ => Err(ConfigError::MissingValue {
            flag: flag.to_string(),
        }),
    }
}
