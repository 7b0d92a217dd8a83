//! Streaming-related error types.
//!
//! Errors raised while turning a response body into printed text. Only
//! `StreamError` ends a request; a `DecodeError` is logged and the line that
//! caused it is skipped.

use thiserror::Error;

use super::network::NetworkError;

/// A single `data:` payload could not be decoded.
///
/// Never fatal: the processor logs it and continues with the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not a JSON document.
    #[error("invalid JSON payload: {message}")]
    InvalidJson { message: String },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::InvalidJson {
            message: err.to_string(),
        }
    }
}

/// Errors that end processing of the current response.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The transport reported a failure; citations are not rendered.
    #[error("transport failed: {0}")]
    Transport(#[from] NetworkError),

    /// Writing to the output sink failed.
    #[error("failed to write output: {message}")]
    Output { message: String },
}

impl StreamError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::Transport(err) => err.user_message(),
            StreamError::Output { .. } => "Could not write the answer to the terminal.".to_string(),
        }
    }

    /// Whether sending the same prompt again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StreamError::Transport(err) => err.is_retryable(),
            StreamError::Output { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::Transport(err) => err.error_code(),
            StreamError::Output { .. } => "E_STREAM_OUTPUT",
        }
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Output {
            message: err.to_string(),
        }
    }
}
