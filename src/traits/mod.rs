//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ResponseTransport`] - opens a streamed response for a prompt

pub mod transport;

pub use transport::{ResponseTransport, TransportStream};
