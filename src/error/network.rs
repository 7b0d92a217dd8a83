//! Network-related error types.
//!
//! This module defines errors raised by the HTTP transport that delivers the
//! streamed response body: connection setup, status checks, and failures
//! in the middle of a chunked body.

use std::fmt;

/// Network-specific error variants.
///
/// Any of these is fatal to the current request only. Text that was already
/// streamed stays on screen; the prompt loop moves on to the next prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        endpoint: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        operation: String,
    },

    /// TLS/SSL error.
    TlsError {
        message: String,
    },

    /// HTTP status error (non-2xx response).
    HttpStatus {
        status: u16,
        message: String,
    },

    /// Rate limited by server.
    RateLimited {
        retry_after_secs: Option<u64>,
    },

    /// The response body broke off after streaming had started.
    StreamInterrupted {
        message: String,
    },

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Check if this error is likely transient.
    ///
    /// The client never retries on its own; the prompt loop uses this to
    /// suggest resending the prompt.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::TlsError { .. } => false,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::RateLimited { .. } => true,
            NetworkError::StreamInterrupted { .. } => true,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { operation } => {
                format!("The {} timed out. The server may be slow or unreachable.", operation)
            }
            NetworkError::TlsError { .. } => {
                "A secure connection could not be established.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was rejected as invalid.".to_string(),
                401 | 403 => "The API key was rejected. Check GEMINI_API_KEY.".to_string(),
                404 => "The requested model was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "The server is experiencing issues. Please try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => format!(
                    "Too many requests. Please wait {} seconds before trying again.",
                    secs
                ),
                None => "Too many requests. Please wait a moment and try again.".to_string(),
            },
            NetworkError::StreamInterrupted { .. } => {
                "The response stream was interrupted. The answer above may be incomplete.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::TlsError { .. } => "E_NET_TLS",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited { .. } => "E_NET_RATE",
            NetworkError::StreamInterrupted { .. } => "E_NET_STREAM",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { endpoint, message } => {
                write!(f, "Connection failed to '{}': {}", endpoint, message)
            }
            NetworkError::Timeout { operation } => write!(f, "{} timed out", operation),
            NetworkError::TlsError { message } => write!(f, "TLS error: {}", message),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited { retry_after_secs } => match retry_after_secs {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            NetworkError::StreamInterrupted { message } => {
                write!(f, "Response stream interrupted: {}", message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a reqwest error into a NetworkError.
///
/// The request URL carries the API key as a query parameter, so the URL is
/// stripped from the error before its message is kept. `endpoint` should be
/// a key-free description of the target.
pub fn classify_reqwest_error(err: reqwest::Error, endpoint: &str) -> NetworkError {
    let err = err.without_url();

    if err.is_connect() {
        NetworkError::ConnectionFailed {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    } else if err.is_timeout() {
        NetworkError::Timeout {
            operation: "request".to_string(),
        }
    } else if let Some(status) = err.status() {
        let status = status.as_u16();
        if status == 429 {
            NetworkError::RateLimited {
                retry_after_secs: None,
            }
        } else {
            NetworkError::HttpStatus {
                status,
                message: err.to_string(),
            }
        }
    } else if err.is_body() || err.is_decode() {
        NetworkError::StreamInterrupted {
            message: err.to_string(),
        }
    } else {
        let err_str = err.to_string().to_lowercase();
        if err_str.contains("tls") || err_str.contains("certificate") {
            NetworkError::TlsError {
                message: err.to_string(),
            }
        } else {
            NetworkError::Other {
                message: err.to_string(),
            }
        }
    }
}

/// Build an `HttpStatus` (or `RateLimited`) error from a non-2xx response.
pub fn status_error(status: u16, body: String, retry_after_secs: Option<u64>) -> NetworkError {
    if status == 429 {
        NetworkError::RateLimited { retry_after_secs }
    } else {
        NetworkError::HttpStatus {
            status,
            message: body,
        }
    }
}
