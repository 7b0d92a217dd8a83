//! Event payload decoding.
//!
//! Payloads follow the `streamGenerateContent` shape:
//!
//! ```text
//! { candidates: [ { content: { parts: [ { text, thought? } ] },
//!                   groundingMetadata?: { groundingSupports: [ { groundingChunkIndices } ],
//!                                         groundingChunks: [ { web: { uri, title? } } ] },
//!                   finishReason? } ] }
//! ```
//!
//! Only invalid JSON is an error. Missing fields or fields of the wrong type
//! just mean the event contributed nothing for that field, so the document is
//! walked as a `serde_json::Value` instead of being deserialized into strict
//! structs.

use serde_json::Value;

use super::fragment::{
    Fragment, GroundingChunk, GroundingSupport, MetadataSnapshot, TextFragment, TextKind,
};
use crate::error::DecodeError;

/// Decode one event payload into a fragment.
///
/// Only the first candidate and its first part are considered; streaming
/// responses carry a single candidate.
pub fn decode_payload(payload: &str) -> Result<Fragment, DecodeError> {
    let document: Value = serde_json::from_str(payload)?;

    let Some(candidate) = document
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
    else {
        return Ok(Fragment::default());
    };

    Ok(Fragment {
        text: decode_text(candidate),
        metadata: decode_metadata(candidate),
        finish_reason: candidate
            .get("finishReason")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn decode_text(candidate: &Value) -> Option<TextFragment> {
    let part = candidate
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?;

    let text = part.get("text")?.as_str()?;
    let kind = match part.get("thought").and_then(Value::as_bool) {
        Some(true) => TextKind::Reasoning,
        _ => TextKind::Answer,
    };

    Some(TextFragment {
        kind,
        text: text.to_string(),
    })
}

fn decode_metadata(candidate: &Value) -> Option<MetadataSnapshot> {
    let metadata = candidate.get("groundingMetadata")?;
    if !metadata.is_object() {
        return None;
    }

    let supports = metadata
        .get("groundingSupports")
        .and_then(Value::as_array)
        .map(|supports| supports.iter().map(decode_support).collect())
        .unwrap_or_default();

    let chunks = metadata
        .get("groundingChunks")
        .and_then(Value::as_array)
        .map(|chunks| chunks.iter().map(decode_chunk).collect())
        .unwrap_or_default();

    Some(MetadataSnapshot { supports, chunks })
}

fn decode_support(support: &Value) -> GroundingSupport {
    let chunk_indices = support
        .get("groundingChunkIndices")
        .and_then(Value::as_array)
        .map(|indices| indices.iter().filter_map(Value::as_i64).collect())
        .unwrap_or_default();

    GroundingSupport { chunk_indices }
}

fn decode_chunk(chunk: &Value) -> GroundingChunk {
    let web = chunk.get("web");
    let field = |name: &str| {
        web.and_then(|web| web.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    GroundingChunk {
        uri: field("uri"),
        title: field("title"),
    }
}
