//! Error handling for Groundline.
//!
//! - **Domain errors**: `NetworkError` (transport), `StreamError` and
//!   `DecodeError` (response processing), `ConfigError` (flags and env)
//! - **Unified error**: `GroundlineError` with `user_message()` and
//!   `error_code()` for the binary
//!
//! # Failure policy
//!
//! | Error | Effect |
//! |-------|--------|
//! | `DecodeError` | logged, line skipped, stream continues |
//! | `StreamError::Transport` | current request ends, no citations |
//! | `StreamError::Output` | current request ends |
//! | `ConfigError` | reported before the prompt loop starts |
//!
//! Nothing here terminates the process on its own.

mod config;
mod groundline_error;
mod network;
mod result;
mod stream;

pub use config::ConfigError;
pub use groundline_error::GroundlineError;
pub use network::{classify_reqwest_error, status_error, NetworkError};
pub use result::GroundlineResult;
pub use stream::{DecodeError, StreamError};
