//! Shared helpers for integration tests.

#![allow(dead_code)]

use groundline::stream::{StreamProcessor, StreamSummary};
use serde_json::{json, Value};

/// A `data:` line carrying one text part.
pub fn text_line(text: &str, thought: bool) -> String {
    let mut part = json!({ "text": text });
    if thought {
        part["thought"] = json!(true);
    }
    data_line(json!({ "candidates": [{ "content": { "parts": [part] } }] }))
}

/// A `data:` line carrying only grounding metadata.
///
/// `supports` lists the chunk indices of each support; `chunks` is
/// `(uri, title)` per chunk.
pub fn metadata_line(supports: &[&[i64]], chunks: &[(&str, &str)]) -> String {
    let supports: Vec<Value> = supports
        .iter()
        .map(|indices| json!({ "groundingChunkIndices": indices }))
        .collect();
    let chunks: Vec<Value> = chunks
        .iter()
        .map(|(uri, title)| json!({ "web": { "uri": uri, "title": title } }))
        .collect();
    data_line(json!({
        "candidates": [{
            "groundingMetadata": {
                "groundingSupports": supports,
                "groundingChunks": chunks
            }
        }]
    }))
}

pub fn data_line(payload: Value) -> String {
    format!("data: {}\n", payload)
}

/// Run a whole body through a processor in the given chunks.
pub fn run_chunks<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> (String, StreamSummary) {
    let mut out = Vec::new();
    let mut processor = StreamProcessor::new(&mut out);
    for chunk in chunks {
        processor.feed(chunk).unwrap();
    }
    let summary = processor.finish().unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

/// Run a whole body through a processor as a single chunk.
pub fn run_body(body: &str) -> (String, StreamSummary) {
    run_chunks([body.as_bytes()])
}
