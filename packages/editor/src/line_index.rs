//! # Line Index
//!
//! Line anchor table and the coordinate conversions built on it.
//!
//! ```text
//! |line1|line2|line3| ... |lineN|   N lines
//! a0    a1    a2    a3 ... aN-1  aN   N+1 anchors, a0 = 0, aN = len
//! ```
//!
//! `\n` and `\r\n` both terminate a line. The anchor recorded for a
//! terminator is the offset right after it, so a `\r\n` pair never splits
//! across two lines.
//!
//! Offsets count chars. The index keeps the byte position of every anchor
//! alongside it so slicing the source only walks the one line involved.

use crate::coords::{Position, Range, Span};

/// Ordered table of line start offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    anchors: Vec<usize>,
    byte_anchors: Vec<usize>,
}

impl LineIndex {
    /// Scan `source` once, recording the offset after every terminator
    pub fn new(source: &str) -> Self {
        let mut anchors = vec![0];
        let mut byte_anchors = vec![0];
        let mut chars = 0;

        for (byte, ch) in source.char_indices() {
            chars += 1;
            if ch == '\n' {
                anchors.push(chars);
                byte_anchors.push(byte + 1);
            }
        }

        if anchors.last() != Some(&chars) {
            anchors.push(chars);
            byte_anchors.push(source.len());
        }

        tracing::trace!("LineIndex built: {} anchors over {} chars", anchors.len(), chars);
        Self {
            anchors,
            byte_anchors,
        }
    }

    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }

    pub fn line_count(&self) -> usize {
        self.anchors.len() - 1
    }

    /// Length of the indexed text in chars
    pub fn len(&self) -> usize {
        self.anchors.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start offset of a 1-based line
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line < 1 || line > self.line_count() {
            return None;
        }
        Some(self.anchors[line - 1])
    }
}

/// Bytes of line terminator at the end of `source[start..end]`
fn terminator_len(source: &str, start: usize, end: usize) -> usize {
    let bytes = source.as_bytes();
    if end <= start || bytes[end - 1] != b'\n' {
        0
    } else if end - 1 > start && bytes[end - 2] == b'\r' {
        2
    } else {
        1
    }
}

/// Converts between offsets, positions, ranges and spans of one text
///
/// Every conversion clamps out-of-domain input to the nearest valid value.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateConverter<'a> {
    source: &'a str,
    index: &'a LineIndex,
}

impl<'a> CoordinateConverter<'a> {
    pub fn new(source: &'a str, index: &'a LineIndex) -> Self {
        Self { source, index }
    }

    /// Byte index in the source of a char offset, clamped to `[0, len]`
    pub fn byte_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.index.len());
        // last anchor at or before offset
        let line = self
            .index
            .anchors
            .partition_point(|&a| a <= offset)
            .saturating_sub(1);
        let start = self.index.byte_anchors[line];
        let skip = offset - self.index.anchors[line];

        self.source[start..]
            .char_indices()
            .nth(skip)
            .map_or(self.source.len(), |(i, _)| start + i)
    }

    /// Byte span of `range`, for slicing the source
    pub fn byte_range(&self, range: Range) -> std::ops::Range<usize> {
        self.byte_offset(range.start)..self.byte_offset(range.end)
    }

    /// Offsets of a 1-based line, terminator stripped unless requested
    pub fn line_range(&self, line: usize, include_terminator: bool) -> Option<Range> {
        let start = self.index.line_start(line)?;
        let mut end = self.index.anchors[line];
        if !include_terminator {
            // terminators are ASCII, so their byte and char lengths agree
            end -= terminator_len(
                self.source,
                self.index.byte_anchors[line - 1],
                self.index.byte_anchors[line],
            );
        }
        Some(Range::new(start, end))
    }

    /// Position right after the last character of the document
    pub fn eof(&self) -> Position {
        let line_count = self.index.line_count();
        if line_count == 0 {
            return Position::new(1, 1);
        }
        if self.source.ends_with('\n') {
            return Position::new(line_count + 1, 1);
        }
        match self.line_range(line_count, false) {
            Some(range) => Position::new(line_count, range.len() + 1),
            None => Position::new(1, 1),
        }
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        if offset == 0 {
            return Position::new(1, 1);
        }
        if offset >= self.index.len() {
            return self.eof();
        }

        let line = match self.index.anchors.binary_search(&offset) {
            Ok(i) => return Position::new(i + 1, 1),
            // first anchor greater than offset; line `ip` starts at anchors[ip - 1]
            Err(ip) => ip,
        };

        let Some(range) = self.line_range(line, false) else {
            return self.eof();
        };
        // offsets inside the terminator land on end-of-line + 1
        Position::new(line, offset.min(range.end) - range.start + 1)
    }

    pub fn position_to_offset(&self, pos: Position) -> usize {
        if pos.line < 1 {
            return 0;
        }
        if pos.line >= self.index.line_count() + 1 {
            return self.index.len();
        }
        let Some(range) = self.line_range(pos.line, false) else {
            return self.index.len();
        };

        range.start + pos.col.saturating_sub(1).min(range.len())
    }

    /// Offset just past the character at `pos`, or the position's own
    /// offset when it sits at or beyond the end of its line
    fn position_to_char_end(&self, pos: Position) -> usize {
        let offset = self.position_to_offset(pos);
        match self.line_range(pos.line, false) {
            Some(range) if offset < range.end => offset + 1,
            _ => offset,
        }
    }

    pub fn range_to_span(&self, range: Range) -> Span {
        let first = self.offset_to_position(range.start);
        let last = self.offset_to_position(range.end);
        let (first, last) = Span::new(first, last).ordered();
        Span::new(first, last)
    }

    /// The `last` endpoint is inclusive of the character it names
    pub fn span_to_range(&self, span: Span) -> Range {
        let (first, last) = span.ordered();
        let start = self.position_to_offset(first);
        let end = self.position_to_char_end(last);
        Range::new(start, end)
    }
}
