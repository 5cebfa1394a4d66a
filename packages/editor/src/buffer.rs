//! # Text Buffer
//!
//! Immutable source text plus its line index.
//!
//! A buffer never changes after construction. Edits go through an
//! [`EditTransaction`](crate::EditTransaction) and produce a brand-new
//! buffer; coordinates taken from the old one are stale afterwards.
//!
//! ## Lifecycle
//!
//! ```text
//! text / loader → TextBuffer → EditTransaction → apply → new TextBuffer
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::path::Path;

use textcore_common::{FsLoader, LoadResult, TextLoader};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coords::{Position, Range, Span};
use crate::line_index::{CoordinateConverter, LineIndex};

/// Line terminator style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Read-only view of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub index: usize,
    /// Offsets of the line content, terminator excluded
    pub range: Range,
    pub text: &'a str,
}

impl Line<'_> {
    /// Column just past the last character
    pub fn end_column(&self) -> usize {
        self.text.chars().count() + 1
    }
}

/// Immutable text with a line index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    source: String,
    index: LineIndex,
}

impl TextBuffer {
    /// Create buffer from in-memory text
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let index = LineIndex::new(&source);
        Self { source, index }
    }

    /// Create buffer from content supplied by an external loader
    pub fn load<L: TextLoader>(loader: &L, locator: impl AsRef<Path>) -> LoadResult<Self> {
        let source = loader.load(locator.as_ref())?;
        Ok(Self::new(source))
    }

    /// Create buffer from a file on disk
    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        Self::load(&FsLoader, path)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    pub fn line_anchors(&self) -> &[usize] {
        self.index.anchors()
    }

    pub fn converter(&self) -> CoordinateConverter<'_> {
        CoordinateConverter::new(&self.source, &self.index)
    }

    pub fn eof(&self) -> Position {
        self.converter().eof()
    }

    pub fn full_range(&self) -> Range {
        Range::new(0, self.len())
    }

    pub fn full_span(&self) -> Span {
        self.range_to_span(self.full_range())
    }

    /// Terminator style of the first line break, `\n` if there is none
    pub fn line_ending(&self) -> LineEnding {
        match self.source.find('\n') {
            Some(i) if i > 0 && self.source.as_bytes()[i - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn line_range(&self, line: usize, include_terminator: bool) -> Option<Range> {
        self.converter().line_range(line, include_terminator)
    }

    pub fn line_string(&self, line: usize) -> Option<&str> {
        let range = self.line_range(line, false)?;
        Some(self.text(range))
    }

    pub fn line_at(&self, line: usize) -> Option<Line<'_>> {
        let range = self.line_range(line, false)?;
        Some(Line {
            index: line,
            range,
            text: self.text(range),
        })
    }

    /// Fresh traversal over every line, first to last
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            buffer: self,
            next: 1,
        }
    }

    /// Source split at every terminator, including a trailing empty piece
    /// when the text ends with one
    pub fn raw_lines(&self) -> Vec<&str> {
        let mut pieces: Vec<&str> = self.source.split('\n').collect();
        let last = pieces.len() - 1;
        for piece in &mut pieces[..last] {
            let text: &str = *piece;
            *piece = text.strip_suffix('\r').unwrap_or(text);
        }
        pieces
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        self.converter().offset_to_position(offset)
    }

    pub fn position_to_offset(&self, pos: Position) -> usize {
        self.converter().position_to_offset(pos)
    }

    pub fn range_to_span(&self, range: Range) -> Span {
        self.converter().range_to_span(range)
    }

    pub fn span_to_range(&self, span: Span) -> Range {
        self.converter().span_to_range(span)
    }

    fn text(&self, range: Range) -> &str {
        &self.source[self.converter().byte_range(range)]
    }

    /// Clip `range` to the document
    pub fn clamp_range(&self, range: Range) -> Range {
        range.intersect(&self.full_range())
    }

    pub fn slice_range(&self, range: Range) -> &str {
        self.text(self.clamp_range(range))
    }

    pub fn slice_span(&self, span: Span) -> &str {
        self.slice_range(self.span_to_range(span))
    }

    /// Whole lines `start_line..start_line + count`, terminators included,
    /// clamped to the lines that exist
    pub fn slice_lines(&self, start_line: usize, count: usize) -> &str {
        let line_count = self.line_count();
        if count == 0 || line_count == 0 {
            return "";
        }
        let start = start_line.clamp(1, line_count);
        let end = start.saturating_add(count - 1).min(line_count);
        let anchors = self.index.anchors();
        self.text(Range::new(anchors[start - 1], anchors[end]))
    }
}

impl From<String> for TextBuffer {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&str> for TextBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Iterator over the lines of a buffer
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    buffer: &'a TextBuffer,
    next: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.buffer.line_at(self.next)?;
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.buffer.line_count() + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl FusedIterator for Lines<'_> {}
