//! Configuration error types.

use thiserror::Error;

/// Problems with flags or environment found before the prompt loop starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No API key in the environment.
    #[error("missing API key: set {var}")]
    MissingApiKey { var: &'static str },

    /// A flag that takes a value was given none.
    #[error("flag '{flag}' requires a value")]
    MissingValue { flag: String },

    /// A flag or environment value could not be interpreted.
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::MissingApiKey { var } => {
                format!("No API key configured. Export {} and start again.", var)
            }
            ConfigError::MissingValue { flag } => {
                format!("The {} flag needs a value. Run with --help for usage.", flag)
            }
            ConfigError::InvalidValue { name, value } => {
                format!("'{}' is not a valid value for {}.", value, name)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey { .. } => "E_CFG_KEY",
            ConfigError::MissingValue { .. } => "E_CFG_FLAG",
            ConfigError::InvalidValue { .. } => "E_CFG_VALUE",
        }
    }
}
