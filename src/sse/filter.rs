//! Data-line recognition.

use super::events::SseLine;

/// Literal prefix of a payload-bearing line.
pub const DATA_PREFIX: &str = "data: ";

/// Payload that marks the end of the event stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Classify one body line.
///
/// Only lines starting with exactly `data: ` are relevant. The prefix is
/// stripped and surrounding whitespace trimmed (which also drops a `\r` left
/// by CRLF framing).
pub fn classify_line(line: &str) -> SseLine {
    let Some(rest) = line.strip_prefix(DATA_PREFIX) else {
        return SseLine::Skip;
    };

    let payload = rest.trim();
    if payload == DONE_SENTINEL {
        SseLine::Done
    } else {
        SseLine::Payload(payload.to_string())
    }
}
