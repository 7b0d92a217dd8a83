//! Response pipeline: bytes → lines → payloads → fragments → output.

use std::io::Write;

use bytes::Bytes;

use super::accumulator::Accumulator;
use super::citations::write_citation_block;
use super::decoder::decode_payload;
use crate::error::{NetworkError, StreamError};
use crate::sse::{classify_line, LineBuffer, SseLine};

/// What the HTTP transport reports for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A body chunk with arbitrary boundaries.
    Data(Bytes),
    /// The body ended normally.
    Completed,
    /// The request failed; nothing more will arrive.
    Failed(NetworkError),
}

/// Counters reported once a response has been processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub reasoning_chars: usize,
    pub answer_chars: usize,
    /// Payload lines seen, malformed ones included.
    pub events: usize,
    pub malformed_events: usize,
    pub citations: usize,
    /// Last `finishReason` the server sent.
    pub finish_reason: Option<String>,
    /// Whether the `[DONE]` sentinel was seen.
    pub saw_done: bool,
}

/// Line-level handling, kept apart from the [`LineBuffer`] so lines can be
/// processed while the buffer's iterator is still borrowed.
#[derive(Debug)]
struct LineHandler<W: Write> {
    accumulator: Accumulator<W>,
    summary: StreamSummary,
}

impl<W: Write> LineHandler<W> {
    fn handle_line(&mut self, line: &str) -> Result<(), StreamError> {
        let payload = match classify_line(line) {
            SseLine::Payload(payload) => payload,
            SseLine::Done => {
                tracing::debug!("Received end-of-stream sentinel");
                self.summary.saw_done = true;
                return Ok(());
            }
            SseLine::Skip => return Ok(()),
        };

        self.summary.events += 1;
        match decode_payload(&payload) {
            Ok(fragment) => {
                if fragment.is_empty() && fragment.finish_reason.is_none() {
                    tracing::trace!("Event carried no text or metadata");
                }
                if let Some(reason) = &fragment.finish_reason {
                    tracing::debug!("Candidate finished: {}", reason);
                    self.summary.finish_reason = Some(reason.clone());
                }
                self.accumulator.apply(fragment)
            }
            Err(e) => {
                self.summary.malformed_events += 1;
                tracing::warn!("Skipping malformed event ({}): {}", e, payload);
                Ok(())
            }
        }
    }
}

/// Processes one response body, printing text as it arrives.
///
/// Created per request. `finish` and `abort` consume the processor, so no
/// event can be applied after the response has been finalized.
///
/// # Example
///
/// ```
/// use groundline::stream::StreamProcessor;
///
/// let mut out = Vec::new();
/// let mut processor = StreamProcessor::new(&mut out);
/// processor
///     .feed(b"data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hi\"}]}}]}\n")
///     .unwrap();
/// let summary = processor.finish().unwrap();
/// assert_eq!(summary.answer_chars, 2);
/// assert!(String::from_utf8(out).unwrap().starts_with("Answer:\nHi"));
/// ```
#[derive(Debug)]
pub struct StreamProcessor<W: Write> {
    lines: LineBuffer,
    handler: LineHandler<W>,
}

impl<W: Write> StreamProcessor<W> {
    pub fn new(out: W) -> Self {
        Self {
            lines: LineBuffer::with_capacity(1024),
            handler: LineHandler {
                accumulator: Accumulator::new(out),
                summary: StreamSummary::default(),
            },
        }
    }

    /// Feed one body chunk, handling every line it completes in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), StreamError> {
        for line in self.lines.feed(chunk) {
            self.handler.handle_line(&line)?;
        }
        Ok(())
    }

    /// End of body: handle the residual line, then print citations.
    pub fn finish(mut self) -> Result<StreamSummary, StreamError> {
        self.drain()?;

        let metadata = self.handler.accumulator.state().latest_metadata().cloned();
        let citations = write_citation_block(self.handler.accumulator.writer_mut(), metadata.as_ref())?;

        let mut summary = self.summary();
        summary.citations = citations;
        Ok(summary)
    }

    /// Transport failure: handle the residual line so text already received
    /// is still shown, but skip citations.
    pub fn abort(mut self) -> Result<StreamSummary, StreamError> {
        self.drain()?;
        if self.handler.accumulator.has_output() {
            writeln!(self.handler.accumulator.writer_mut())?;
        }
        Ok(self.summary())
    }

    fn drain(&mut self) -> Result<(), StreamError> {
        let residue = self.lines.pending_len();
        if residue > 0 {
            tracing::debug!("Handling {} byte unterminated final line", residue);
        }
        if let Some(line) = self.lines.flush() {
            self.handler.handle_line(&line)?;
        }
        Ok(())
    }

    fn summary(&self) -> StreamSummary {
        let state = self.handler.accumulator.state();
        StreamSummary {
            reasoning_chars: state.reasoning_text().chars().count(),
            answer_chars: state.answer_text().chars().count(),
            ..self.handler.summary.clone()
        }
    }
}

/// Drive a processor with transport events until the response ends.
///
/// `Completed` (or the events running out) finalizes with citations;
/// `Failed` aborts and is returned as `StreamError::Transport`.
pub async fn process_events<S, W>(events: S, out: W) -> Result<StreamSummary, StreamError>
where
    S: futures::Stream<Item = TransportEvent>,
    W: Write,
{
    use futures::StreamExt;

    let mut processor = StreamProcessor::new(out);
    futures::pin_mut!(events);

    while let Some(event) = events.next().await {
        match event {
            TransportEvent::Data(chunk) => {
                tracing::trace!("Received {} byte chunk", chunk.len());
                processor.feed(&chunk)?;
            }
            TransportEvent::Completed => return processor.finish(),
            TransportEvent::Failed(err) => {
                let partial = processor.abort()?;
                tracing::error!(
                    "Response failed after {} events ({} answer chars): {}",
                    partial.events,
                    partial.answer_chars,
                    err
                );
                return Err(StreamError::Transport(err));
            }
        }
    }

    tracing::debug!("Transport ended without a completion event");
    processor.finish()
}
