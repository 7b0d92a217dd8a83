use groundline::cli::{parse_args, run_cli_command, CliOptions, PromptReader};
use groundline::client::GeminiClient;
use groundline::config::Config;
use groundline::error::{GroundlineError, GroundlineResult};
use groundline::input_history::InputHistory;
use groundline::session::{failure_message, run_interactive, run_prompt};

use color_eyre::Result;
use std::io;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Default log filter when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "groundline=warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr so they never interleave with the streamed response
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Environment config with flag overrides applied, wrapped in a client.
fn build_client(options: &CliOptions) -> GroundlineResult<GeminiClient> {
    let config = options.apply(Config::from_env()?);
    tracing::debug!("Starting with {:?}", config);
    Ok(GeminiClient::new(config)?)
}

/// Answer a single prompt on stdout.
fn ask_once(runtime: &Runtime, client: &GeminiClient, prompt: &str) -> GroundlineResult<()> {
    let summary = runtime.block_on(run_prompt(client, prompt, io::stdout()))?;
    tracing::debug!("One-shot answer: {} chars", summary.answer_chars);
    Ok(())
}

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(2);
        }
    };

    // Handle --version and --help before any initialization
    let options = match run_cli_command(command) {
        Some(options) => options,
        None => return Ok(()),
    };

    color_eyre::install()?;
    init_tracing();

    let client = match build_client(&options) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("[{}] {}", e.error_code(), e);
            eprintln!("Error: {}", e.user_message());
            std::process::exit(2);
        }
    };

    let runtime = Runtime::new()?;

    // One-shot mode: answer a single prompt and exit
    if let Some(prompt) = options.prompt.as_deref() {
        if let Err(e) = ask_once(&runtime, &client, prompt) {
            tracing::error!("[{}] {}", e.error_code(), e);
            match &e {
                GroundlineError::Stream(err) => eprintln!("{}", failure_message(err)),
                GroundlineError::Config(_) => eprintln!("Error: {}", e.user_message()),
            }
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut history = InputHistory::load();
    let mut reader = PromptReader::new(io::stdin().lock(), io::stdout());
    let mut out = io::stdout();

    let result = runtime.block_on(run_interactive(&client, &mut reader, &mut history, &mut out));

    // Keep what was typed even if reading input failed
    history.save();

    let sent = result?;
    tracing::info!("Session ended after {} prompts", sent);
    Ok(())
}
