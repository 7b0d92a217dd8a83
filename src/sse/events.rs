//! SSE line classification types.

/// What a single body line means to the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// JSON payload of a `data: ` line, whitespace-trimmed.
    Payload(String),
    /// The `data: [DONE]` sentinel. Carries no payload and is not an error.
    Done,
    /// Anything else: comments, keepalives, `event:` and blank lines.
    Skip,
}
