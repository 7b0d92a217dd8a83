//! Interactive prompt input.

use std::io::{self, BufRead, Write};

/// Shown before each prompt.
pub const PROMPT_MARKER: &str = "Enter prompt> ";

/// What the user typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// Text to send.
    Prompt(String),
    /// `/history`
    ShowHistory,
    /// `/quit`, `/exit`, or end of input.
    Quit,
}

/// Reads one prompt per call from a line-oriented input.
pub struct PromptReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the marker and read until a non-blank line or end of input.
    pub fn next_input(&mut self) -> io::Result<PromptInput> {
        loop {
            write!(self.output, "{}", PROMPT_MARKER)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(PromptInput::Quit);
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            return Ok(match line {
                "/quit" | "/exit" => PromptInput::Quit,
                "/history" => PromptInput::ShowHistory,
                _ => PromptInput::Prompt(line.to_string()),
            });
        }
    }
}
