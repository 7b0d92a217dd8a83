//! SSE (Server-Sent Events) line handling
//!
//! The response body is newline-delimited SSE text delivered in chunks:
//! - `data: <json>` - one event payload per line
//! - `data: [DONE]` - end-of-stream sentinel
//! - anything else (comments, keepalives, blank lines) - ignored
//!
//! # Module structure
//! - `line_buffer` - chunk-to-line reassembly (LineBuffer)
//! - `filter` - data-line recognition (classify_line)
//! - `events` - line classification type (SseLine)

mod events;
mod filter;
mod line_buffer;

pub use events::SseLine;
pub use filter::{classify_line, DATA_PREFIX, DONE_SENTINEL};
pub use line_buffer::{LineBuffer, Lines};
