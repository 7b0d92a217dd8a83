//! Groundline - a streaming client for search-grounded model responses
//!
//! This library exposes modules for use in integration tests.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input_history;
pub mod models;
pub mod session;
pub mod sse;
pub mod stream;
pub mod traits;
