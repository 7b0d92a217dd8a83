//! Citation list rendering from the final metadata snapshot.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};

use super::fragment::MetadataSnapshot;

/// Titles longer than this many characters are cut.
pub const MAX_TITLE_CHARS: usize = 255;

/// Printed when no event carried grounding metadata.
pub const NO_METADATA_MESSAGE: &str = "no grounding metadata available";

/// One rendered source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// 1-based: chunk index + 1.
    pub display_index: usize,
    pub uri: String,
    /// Empty when the chunk had no title.
    pub title: String,
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "[{}] {}", self.display_index, self.uri)
        } else {
            write!(f, "[{}] {}: {}", self.display_index, self.title, self.uri)
        }
    }
}

/// Compute the citation list for a snapshot.
///
/// Every chunk index referenced by any support is collected once, indices
/// outside the chunk list are dropped, and the result is ordered by index.
/// Support order and repetition have no influence on the output.
pub fn render_citations(metadata: Option<&MetadataSnapshot>) -> Vec<Citation> {
    let Some(metadata) = metadata else {
        return Vec::new();
    };

    let used: BTreeSet<usize> = metadata
        .supports
        .iter()
        .flat_map(|support| support.chunk_indices.iter())
        .filter_map(|&index| usize::try_from(index).ok())
        .filter(|&index| index < metadata.chunks.len())
        .collect();

    used.into_iter()
        .filter_map(|index| {
            let chunk = &metadata.chunks[index];
            let uri = chunk.uri.as_deref().filter(|uri| !uri.is_empty())?;
            Some(Citation {
                display_index: index + 1,
                uri: uri.to_string(),
                title: truncate_title(chunk.title.as_deref().unwrap_or_default()),
            })
        })
        .collect()
}

fn truncate_title(title: &str) -> String {
    title.chars().take(MAX_TITLE_CHARS).collect()
}

/// Write the end-of-response block and return the number of citations.
///
/// Without metadata this is the "no grounding metadata" line. With metadata
/// it is a blank line, `Citations:` and one line per citation, or nothing
/// when no referenced chunk survived.
pub fn write_citation_block<W: Write>(
    out: &mut W,
    metadata: Option<&MetadataSnapshot>,
) -> io::Result<usize> {
    writeln!(out)?;

    if metadata.is_none() {
        writeln!(out, "{}", NO_METADATA_MESSAGE)?;
        out.flush()?;
        return Ok(0);
    }

    let citations = render_citations(metadata);
    if !citations.is_empty() {
        write!(out, "\nCitations:\n")?;
        for citation in &citations {
            writeln!(out, "{}", citation)?;
        }
    }
    out.flush()?;
    Ok(citations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::fragment::{GroundingChunk, GroundingSupport};

    fn chunk(uri: &str, title: Option<&str>) -> GroundingChunk {
        GroundingChunk {
            uri: Some(uri.to_string()),
            title: title.map(str::to_string),
        }
    }

    fn supports(lists: &[&[i64]]) -> Vec<GroundingSupport> {
        lists
            .iter()
            .map(|indices| GroundingSupport {
                chunk_indices: indices.to_vec(),
            })
            .collect()
    }

    fn three_chunks() -> Vec<GroundingChunk> {
        vec![
            chunk("https://zero.example", Some("Zero")),
            chunk("https://one.example", None),
            chunk("https://two.example", Some("Two")),
        ]
    }

    #[test]
    fn test_no_metadata_renders_nothing() {
        assert!(render_citations(None).is_empty());
    }

    #[test]
    fn test_dedup_and_ascending_order() {
        let metadata = MetadataSnapshot {
            supports: supports(&[&[2, 0], &[2], &[1]]),
            chunks: three_chunks(),
        };
        let indices: Vec<usize> = render_citations(Some(&metadata))
            .iter()
            .map(|c| c.display_index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_and_negative_indices_dropped() {
        let metadata = MetadataSnapshot {
            supports: supports(&[&[5, -1, 1, 3]]),
            chunks: three_chunks(),
        };
        let citations = render_citations(Some(&metadata));
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].display_index, 2);
    }

    #[test]
    fn test_chunk_without_uri_dropped() {
        let metadata = MetadataSnapshot {
            supports: supports(&[&[0, 1, 2]]),
            chunks: vec![
                GroundingChunk::default(),
                chunk("", Some("Empty")),
                chunk("https://two.example", None),
            ],
        };
        let citations = render_citations(Some(&metadata));
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].to_string(), "[3] https://two.example");
    }

    #[test]
    fn test_unreferenced_chunks_not_listed() {
        let metadata = MetadataSnapshot {
            supports: supports(&[&[2]]),
            chunks: three_chunks(),
        };
        let citations = render_citations(Some(&metadata));
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].to_string(), "[3] Two: https://two.example");
    }

    #[test]
    fn test_title_truncated_by_characters() {
        let long = "é".repeat(300);
        let metadata = MetadataSnapshot {
            supports: supports(&[&[0]]),
            chunks: vec![chunk("https://long.example", Some(&long))],
        };
        let citations = render_citations(Some(&metadata));
        assert_eq!(citations[0].title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_block_without_metadata() {
        let mut out = Vec::new();
        let count = write_citation_block(&mut out, None).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nno grounding metadata available\n"
        );
    }

    #[test]
    fn test_block_with_citations() {
        let metadata = MetadataSnapshot {
            supports: supports(&[&[1, 0]]),
            chunks: three_chunks(),
        };
        let mut out = Vec::new();
        let count = write_citation_block(&mut out, Some(&metadata)).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n\nCitations:\n[1] Zero: https://zero.example\n[2] https://one.example\n"
        );
    }

    #[test]
    fn test_block_with_metadata_but_no_citations() {
        let metadata = MetadataSnapshot {
            supports: Vec::new(),
            chunks: three_chunks(),
        };
        let mut out = Vec::new();
        assert_eq!(write_citation_block(&mut out, Some(&metadata)).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }
}
