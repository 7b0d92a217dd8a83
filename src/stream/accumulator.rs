//! Per-request text accumulation and incremental output.

use std::io::Write;

use super::fragment::{Fragment, MetadataSnapshot, TextFragment, TextKind};
use crate::error::StreamError;

/// Everything accumulated for one in-flight request.
///
/// Created fresh per request and dropped when it completes; never shared
/// between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatedState {
    reasoning: String,
    answer: String,
    latest_metadata: Option<MetadataSnapshot>,
}

impl AccumulatedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reasoning text received so far.
    pub fn reasoning_text(&self) -> &str {
        &self.reasoning
    }

    /// All answer text received so far.
    pub fn answer_text(&self) -> &str {
        &self.answer
    }

    /// The most recent metadata snapshot, if any event carried one.
    pub fn latest_metadata(&self) -> Option<&MetadataSnapshot> {
        self.latest_metadata.as_ref()
    }

    fn buffer_mut(&mut self, kind: TextKind) -> &mut String {
        match kind {
            TextKind::Reasoning => &mut self.reasoning,
            TextKind::Answer => &mut self.answer,
        }
    }
}

/// Applies fragments to an [`AccumulatedState`] and writes text as it arrives.
///
/// Each buffer gets its header exactly once, right before its first
/// non-empty text.
#[derive(Debug)]
pub struct Accumulator<W: Write> {
    state: AccumulatedState,
    out: W,
}

impl<W: Write> Accumulator<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: AccumulatedState::new(),
            out,
        }
    }

    /// Apply one decoded fragment.
    pub fn apply(&mut self, fragment: Fragment) -> Result<(), StreamError> {
        if let Some(text) = fragment.text {
            self.append_text(text)?;
        }
        if let Some(snapshot) = fragment.metadata {
            // Last snapshot wins; the previous one is dropped, not merged.
            self.state.latest_metadata = Some(snapshot);
        }
        Ok(())
    }

    fn append_text(&mut self, fragment: TextFragment) -> Result<(), StreamError> {
        if fragment.text.is_empty() {
            return Ok(());
        }

        let buffer = self.state.buffer_mut(fragment.kind);
        if buffer.is_empty() {
            self.out.write_all(fragment.kind.header().as_bytes())?;
        }
        self.out.write_all(fragment.text.as_bytes())?;
        self.out.flush()?;
        buffer.push_str(&fragment.text);
        Ok(())
    }

    pub fn state(&self) -> &AccumulatedState {
        &self.state
    }

    /// Whether any text has been written to the sink.
    pub fn has_output(&self) -> bool {
        !self.state.reasoning.is_empty() || !self.state.answer.is_empty()
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_parts(self) -> (AccumulatedState, W) {
        (self.state, self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::fragment::{GroundingChunk, GroundingSupport};

    fn snapshot(uri: &str) -> MetadataSnapshot {
        MetadataSnapshot {
            supports: vec![GroundingSupport {
                chunk_indices: vec![0],
            }],
            chunks: vec![GroundingChunk {
                uri: Some(uri.to_string()),
                title: None,
            }],
        }
    }

    fn output(accumulator: Accumulator<Vec<u8>>) -> String {
        let (_, out) = accumulator.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_headers_printed_once_per_kind() {
        let mut acc = Accumulator::new(Vec::new());
        acc.apply(Fragment::text(TextKind::Reasoning, "Let me ")).unwrap();
        acc.apply(Fragment::text(TextKind::Reasoning, "think.")).unwrap();
        acc.apply(Fragment::text(TextKind::Answer, "Yes")).unwrap();
        acc.apply(Fragment::text(TextKind::Answer, ", it is.")).unwrap();

        assert_eq!(acc.state().reasoning_text(), "Let me think.");
        assert_eq!(acc.state().answer_text(), "Yes, it is.");
        assert_eq!(output(acc), "Thoughts:\nLet me think.Answer:\nYes, it is.");
    }

    #[test]
    fn test_empty_text_does_not_trigger_header() {
        let mut acc = Accumulator::new(Vec::new());
        acc.apply(Fragment::text(TextKind::Answer, "")).unwrap();
        assert!(!acc.has_output());
        acc.apply(Fragment::text(TextKind::Answer, "late")).unwrap();
        assert_eq!(output(acc), "Answer:\nlate");
    }

    #[test]
    fn test_interleaved_kinds_keep_single_headers() {
        let mut acc = Accumulator::new(Vec::new());
        acc.apply(Fragment::text(TextKind::Answer, "a1")).unwrap();
        acc.apply(Fragment::text(TextKind::Reasoning, "r1")).unwrap();
        acc.apply(Fragment::text(TextKind::Answer, "a2")).unwrap();
        acc.apply(Fragment::text(TextKind::Reasoning, "r2")).unwrap();
        assert_eq!(output(acc), "Answer:\na1Thoughts:\nr1a2r2");
    }

    #[test]
    fn test_metadata_is_replaced_not_merged() {
        let mut acc = Accumulator::new(Vec::new());
        acc.apply(Fragment::metadata(snapshot("https://first.example"))).unwrap();
        acc.apply(Fragment::metadata(snapshot("https://second.example"))).unwrap();

        let latest = acc.state().latest_metadata().unwrap();
        assert_eq!(latest.chunks.len(), 1);
        assert_eq!(latest.chunks[0].uri.as_deref(), Some("https://second.example"));
    }

    #[test]
    fn test_fragment_without_metadata_keeps_previous_snapshot() {
        let mut acc = Accumulator::new(Vec::new());
        acc.apply(Fragment::metadata(snapshot("https://kept.example"))).unwrap();
        acc.apply(Fragment::text(TextKind::Answer, "more")).unwrap();
        assert!(acc.state().latest_metadata().is_some());
    }

    #[test]
    fn test_text_and_metadata_in_one_fragment() {
        let mut acc = Accumulator::new(Vec::new());
        let mut fragment = Fragment::text(TextKind::Answer, "cited");
        fragment.metadata = Some(snapshot("https://both.example"));
        acc.apply(fragment).unwrap();
        assert_eq!(acc.state().answer_text(), "cited");
        assert!(acc.state().latest_metadata().is_some());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let mut acc = Accumulator::new(FailingWriter);
        let result = acc.apply(Fragment::text(TextKind::Answer, "x"));
        assert!(matches!(result, Err(StreamError::Output { .. })));
    }
}
