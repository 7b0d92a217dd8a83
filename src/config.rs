//! Client configuration.
//!
//! Values come from the environment first and can be overridden by
//! command-line flags (see [`crate::cli::CliOptions::apply`]).

use crate::error::ConfigError;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GROUNDLINE_MODEL";
pub const BASE_URL_VAR: &str = "GROUNDLINE_BASE_URL";
pub const THOUGHTS_VAR: &str = "GROUNDLINE_THOUGHTS";
pub const SEARCH_VAR: &str = "GROUNDLINE_SEARCH";

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the generation client.
///
/// # Example
///
/// ```
/// use groundline::config::Config;
///
/// let config = Config::default()
///     .with_api_key("test-key")
///     .with_model("gemini-2.5-pro")
///     .with_google_search(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Model name used in the request path
    pub model: String,
    /// Scheme and host of the API (no trailing slash)
    pub base_url: String,
    /// Ask the model to stream its thinking trace
    pub include_thoughts: bool,
    /// Enable the google_search tool (source of citations)
    pub google_search: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            include_thoughts: true,
            google_search: true,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("include_thoughts", &self.include_thoughts)
            .field("google_search", &self.google_search)
            .finish()
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_include_thoughts(mut self, include_thoughts: bool) -> Self {
        self.include_thoughts = include_thoughts;
        self
    }

    pub fn with_google_search(mut self, google_search: bool) -> Self {
        self.google_search = google_search;
        self
    }

    /// Build a config from environment variables.
    ///
    /// Unset variables keep their defaults. Empty values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = env_value(API_KEY_VAR) {
            config = config.with_api_key(key);
        }
        if let Some(model) = env_value(MODEL_VAR) {
            config = config.with_model(model);
        }
        if let Some(base_url) = env_value(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Some(value) = env_value(THOUGHTS_VAR) {
            config.include_thoughts = parse_flag(THOUGHTS_VAR, &value)?;
        }
        if let Some(value) = env_value(SEARCH_VAR) {
            config.google_search = parse_flag(SEARCH_VAR, &value)?;
        }

        Ok(config)
    }

    /// Check that a request can be sent with this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingApiKey { var: API_KEY_VAR }),
        }
    }

    /// Streaming endpoint URL without the key parameter.
    pub fn stream_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent",
            self.base_url, self.model
        )
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Parse an on/off environment value.
pub fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
