//! Decoded event types.

/// Which text stream a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// The model's thinking trace (`thought: true`).
    Reasoning,
    /// The final answer.
    Answer,
}

impl TextKind {
    /// Header printed before the first text of this kind.
    pub fn header(self) -> &'static str {
        match self {
            TextKind::Reasoning => "Thoughts:\n",
            TextKind::Answer => "Answer:\n",
        }
    }
}

/// A piece of streamed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub kind: TextKind,
    pub text: String,
}

/// One `groundingSupports` entry: the chunks backing a span of the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingSupport {
    /// Positions in the snapshot's `chunks`. May be out of range.
    pub chunk_indices: Vec<i64>,
}

/// One `groundingChunks` entry. Kept even when unusable so that positions
/// stay aligned with the indices in `supports`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundingChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// A complete citation snapshot from a single event.
///
/// Indices in `supports` only mean something against `chunks` of the same
/// snapshot, so snapshots are replaced wholesale and never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSnapshot {
    pub supports: Vec<GroundingSupport>,
    pub chunks: Vec<GroundingChunk>,
}

/// Everything one event payload contributed.
///
/// An event may carry text, a metadata snapshot, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub text: Option<TextFragment>,
    pub metadata: Option<MetadataSnapshot>,
    /// `finishReason` of the candidate, e.g. `STOP`. Informational only.
    pub finish_reason: Option<String>,
}

impl Fragment {
    /// A text-only fragment.
    pub fn text(kind: TextKind, text: impl Into<String>) -> Self {
        Self {
            text: Some(TextFragment {
                kind,
                text: text.into(),
            }),
            ..Self::default()
        }
    }

    /// A metadata-only fragment.
    pub fn metadata(snapshot: MetadataSnapshot) -> Self {
        Self {
            metadata: Some(snapshot),
            ..Self::default()
        }
    }

    /// True when the event contributed nothing to the output.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.metadata.is_none()
    }
}
