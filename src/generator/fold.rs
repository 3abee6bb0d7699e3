//! Content line folding.

use crate::{CONTINUATION_PREFIX, LINE_TERMINATOR};
use std::io::{self, Write};

/// Maximum length of a physical line in octets, continuation prefix included
/// and line terminator excluded.
pub const MAX_LINE_OCTETS: usize = 72;

/// Where a long line may be split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldBoundary {
    /// Any byte offset. Multi-octet characters may end up split across lines.
    #[default]
    Byte,
    /// Never inside a UTF-8 sequence.
    Char,
}

#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Split a logical line into the chunks of its physical lines.
///
/// The first chunk holds at most [`MAX_LINE_OCTETS`] octets, every following
/// chunk one less to leave room for the continuation prefix.
pub fn fold_line(line: &[u8], boundary: FoldBoundary) -> Vec<&[u8]> {
    let continuation_limit = MAX_LINE_OCTETS - CONTINUATION_PREFIX.len();
    let mut chunks = Vec::with_capacity(line.len() / continuation_limit + 1);
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let mut split = limit;
        if boundary == FoldBoundary::Char {
            while split > 0 && is_utf8_continuation(rest[split]) {
                split -= 1;
            }
            // Not UTF-8 after all
            if split == 0 {
                split = limit;
            }
        }
        let (chunk, tail) = rest.split_at(split);
        chunks.push(chunk);
        rest = tail;
        limit = continuation_limit;
    }
    chunks.push(rest);
    chunks
}

/// Write a logical line as CRLF-terminated physical lines.
pub fn write_folded<W: Write + ?Sized>(
    writer: &mut W,
    line: &[u8],
    boundary: FoldBoundary,
) -> io::Result<()> {
    for (i, chunk) in fold_line(line, boundary).into_iter().enumerate() {
        if i > 0 {
            writer.write_all(CONTINUATION_PREFIX)?;
        }
        writer.write_all(chunk)?;
        writer.write_all(LINE_TERMINATOR)?;
    }
    Ok(())
}
