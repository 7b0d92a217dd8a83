//! Chunk-to-line reassembly.
//!
//! The transport hands over body chunks with arbitrary boundaries: a chunk
//! may end in the middle of a line, a JSON token, or a multi-byte UTF-8
//! sequence. `LineBuffer` keeps the unresolved tail between calls and only
//! decodes a line once its terminating `\n` has arrived.

use bytes::{Buf, BytesMut};

/// Buffers raw body bytes and yields complete newline-terminated lines.
///
/// Bytes are never lost or duplicated: every byte fed in ends up in exactly
/// one line returned by [`LineBuffer::feed`] or [`LineBuffer::flush`].
#[derive(Debug, Default)]
pub struct LineBuffer {
    /// Bytes received but not yet resolved into a complete line.
    pending: BytesMut,
    /// Prefix length of `pending` already known to contain no newline.
    scanned: usize,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: BytesMut::with_capacity(capacity),
            scanned: 0,
        }
    }

    /// Append a chunk and iterate over the lines it completes.
    ///
    /// The returned iterator is lazy. Lines it does not get to stay buffered
    /// and come out of the next `feed` or `flush`.
    pub fn feed(&mut self, chunk: &[u8]) -> Lines<'_> {
        self.pending.extend_from_slice(chunk);
        Lines { buffer: self }
    }

    /// Drain the residue left after the final chunk as one last line.
    ///
    /// Call once the transport signals end of stream. Returns `None` when
    /// nothing is buffered, so a body ending in `\n` yields no extra line.
    pub fn flush(&mut self) -> Option<String> {
        self.scanned = 0;
        if self.pending.is_empty() {
            return None;
        }
        let rest = self.pending.split();
        Some(decode_line(&rest))
    }

    /// Number of buffered bytes not yet part of a complete line.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Extract the next complete line, removing it and its `\n`.
    fn next_line(&mut self) -> Option<String> {
        let offset = self.pending[self.scanned..]
            .iter()
            .position(|&b| b == b'\n');

        match offset {
            Some(offset) => {
                let end = self.scanned + offset;
                let line = self.pending.split_to(end);
                self.pending.advance(1);
                self.scanned = 0;
                Some(decode_line(&line))
            }
            None => {
                self.scanned = self.pending.len();
                None
            }
        }
    }
}

/// Lazy iterator over the lines completed by one [`LineBuffer::feed`] call.
#[derive(Debug)]
pub struct Lines<'a> {
    buffer: &'a mut LineBuffer,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.buffer.next_line()
    }
}

/// Decode a complete line. `\n` never occurs inside a multi-byte UTF-8
/// sequence, so a complete line holds whole characters unless the server
/// sent invalid UTF-8, which is replaced rather than rejected.
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
