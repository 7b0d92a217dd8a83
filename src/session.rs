//! Prompt/response cycles.

use std::io::{BufRead, Write};

use crate::cli::{PromptInput, PromptReader};
use crate::error::StreamError;
use crate::input_history::InputHistory;
use crate::stream::{process_events, StreamSummary};
use crate::traits::ResponseTransport;

/// Send a prompt and print the streamed response to `out`.
///
/// Each call gets its own accumulated state; nothing carries over between
/// prompts. Requests are expected to be serialized by the caller.
pub async fn run_prompt<T, W>(
    transport: &T,
    prompt: &str,
    out: W,
) -> Result<StreamSummary, StreamError>
where
    T: ResponseTransport + ?Sized,
    W: Write,
{
    tracing::info!("Sending prompt ({} chars)", prompt.chars().count());

    let events = transport.open(prompt).await?;
    let summary = process_events(events, out).await?;

    tracing::info!(
        "Stream processing complete. Final thoughts: {} chars, answer: {} chars, citations: {}",
        summary.reasoning_chars,
        summary.answer_chars,
        summary.citations
    );
    if summary.malformed_events > 0 {
        tracing::warn!(
            "{} of {} events could not be decoded",
            summary.malformed_events,
            summary.events
        );
    }

    Ok(summary)
}

/// Shown after a failure that may go away on a second attempt.
pub const RETRY_HINT: &str = "Send the prompt again to retry.";

/// Message printed when a request fails.
pub fn failure_message(err: &StreamError) -> String {
    if err.is_retryable() {
        format!("Error: {} {}", err.user_message(), RETRY_HINT)
    } else {
        format!("Error: {}", err.user_message())
    }
}

/// Read prompts until `/quit`, `/exit` or end of input, answering each in turn.
///
/// A failed request is reported on stderr and the loop moves on to the next
/// prompt. Returns the number of prompts sent.
pub async fn run_interactive<T, R, P, W>(
    transport: &T,
    reader: &mut PromptReader<R, P>,
    history: &mut InputHistory,
    out: &mut W,
) -> std::io::Result<usize>
where
    T: ResponseTransport + ?Sized,
    R: BufRead,
    P: Write,
    W: Write,
{
    let mut sent = 0;

    loop {
        match reader.next_input()? {
            PromptInput::Quit => break,
            PromptInput::ShowHistory => {
                for (i, entry) in history.entries().iter().enumerate() {
                    writeln!(out, "{:>3}  {}", i + 1, entry)?;
                }
                out.flush()?;
            }
            PromptInput::Prompt(prompt) => {
                history.add(prompt.clone());
                sent += 1;
                if let Err(e) = run_prompt(transport, &prompt, &mut *out).await {
                    tracing::error!("[{}] {}", e.error_code(), e);
                    eprintln!("{}", failure_message(&e));
                }
            }
        }
    }

    Ok(sent)
}
