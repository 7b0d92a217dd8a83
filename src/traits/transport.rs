//! Response transport trait abstraction.
//!
//! The pipeline only needs "send this prompt, then hand me body chunks and a
//! completion or failure signal". Putting that behind a trait lets the prompt
//! loop run against canned chunk sequences in tests.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::NetworkError;
use crate::stream::TransportEvent;

/// Stream of transport events for one request.
///
/// Yields `Data` chunks in arrival order, then exactly one `Completed` or
/// `Failed`. Consumers stop at the first terminal event.
pub type TransportStream = Pin<Box<dyn Stream<Item = TransportEvent> + Send>>;

/// Trait for opening a streamed response.
///
/// # Example
///
/// ```ignore
/// use groundline::traits::ResponseTransport;
///
/// async fn ask<T: ResponseTransport>(transport: &T) {
///     let mut events = transport.open("Why is the sky blue?").await?;
///     while let Some(event) = events.next().await {
///         // Data / Completed / Failed
///     }
/// }
/// ```
#[async_trait]
pub trait ResponseTransport: Send + Sync {
    /// Send `prompt` and return the response as a stream of events.
    ///
    /// Errors returned here happen before any body byte arrived (connection
    /// failure, non-2xx status). Failures after that arrive as
    /// `TransportEvent::Failed`.
    async fn open(&self, prompt: &str) -> Result<TransportStream, NetworkError>;
}
