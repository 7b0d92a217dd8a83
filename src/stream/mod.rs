//! Response decoding and accumulation.
//!
//! Turns the `data:` payloads of a streamed response into printed text:
//! reasoning under a `Thoughts:` header, the answer under `Answer:`, and a
//! citation list built from the last grounding metadata snapshot.
//!
//! # Module structure
//! - `fragment` - decoded event types (Fragment, MetadataSnapshot)
//! - `decoder` - payload JSON to Fragment (decode_payload)
//! - `accumulator` - per-request buffers and incremental output
//! - `citations` - citation list from the final snapshot
//! - `processor` - the full pipeline per request (StreamProcessor)

mod accumulator;
mod citations;
mod decoder;
mod fragment;
mod processor;

pub use accumulator::{AccumulatedState, Accumulator};
pub use citations::{
    render_citations, write_citation_block, Citation, MAX_TITLE_CHARS, NO_METADATA_MESSAGE,
};
pub use decoder::decode_payload;
pub use fragment::{
    Fragment, GroundingChunk, GroundingSupport, MetadataSnapshot, TextFragment, TextKind,
};
pub use processor::{process_events, StreamProcessor, StreamSummary, TransportEvent};
