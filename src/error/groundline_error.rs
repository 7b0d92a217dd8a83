//! Unified error type for Groundline.
//!
//! `GroundlineError` consolidates the domain-specific error types so the
//! binary can report any failure the same way.

use std::fmt;

use super::config::ConfigError;
use super::stream::StreamError;

/// Unified error type for Groundline.
#[derive(Debug)]
pub enum GroundlineError {
    /// Flag or environment problems.
    Config(ConfigError),

    /// A request failed, before or during streaming.
    Stream(StreamError),
}

impl GroundlineError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            GroundlineError::Config(err) => err.user_message(),
            GroundlineError::Stream(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GroundlineError::Config(err) => err.error_code(),
            GroundlineError::Stream(err) => err.error_code(),
        }
    }
}

impl fmt::Display for GroundlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroundlineError::Config(err) => write!(f, "{}", err),
            GroundlineError::Stream(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GroundlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GroundlineError::Config(err) => Some(err),
            GroundlineError::Stream(err) => Some(err),
        }
    }
}

impl From<ConfigError> for GroundlineError {
    fn from(err: ConfigError) -> Self {
        GroundlineError::Config(err)
    }
}

impl From<StreamError> for GroundlineError {
    fn from(err: StreamError) -> Self {
        GroundlineError::Stream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use std::error::Error;

    #[test]
    fn test_stream_error_passthrough() {
        let err: GroundlineError = StreamError::Transport(NetworkError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        })
        .into();
        assert_eq!(err.error_code(), "E_NET_HTTP");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_passthrough() {
        let err: GroundlineError = ConfigError::MissingApiKey {
            var: "GEMINI_API_KEY",
        }
        .into();
        assert_eq!(err.error_code(), "E_CFG_KEY");
        assert!(err.user_message().contains("GEMINI_API_KEY"));
    }
}
