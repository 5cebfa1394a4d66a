//! # Edits
//!
//! Normalized edit records and the argument shapes accepted when
//! requesting one.
//!
//! Requests arrive either as offsets or as positions. The shape is fixed
//! by the variant at the call site and resolved once, when the request is
//! normalized against a buffer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::TextBuffer;
use crate::coords::{Position, Range, Span};

/// Absolute offset range plus its replacement text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edit {
    pub range: Range,
    pub replacement: String,
}

impl Edit {
    pub fn new(range: Range, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// Insertion point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Offset(usize),
    Position(Position),
}

impl InsertAt {
    /// Offset in `buffer`, clamped to `[0, len]`
    pub fn resolve(self, buffer: &TextBuffer) -> usize {
        match self {
            InsertAt::Offset(offset) => offset.min(buffer.len()),
            InsertAt::Position(pos) => buffer.position_to_offset(pos),
        }
    }
}

impl From<usize> for InsertAt {
    fn from(offset: usize) -> Self {
        InsertAt::Offset(offset)
    }
}

impl From<Position> for InsertAt {
    fn from(pos: Position) -> Self {
        InsertAt::Position(pos)
    }
}

/// Region to remove or replace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Range(Range),
    Span(Span),
}

impl Region {
    /// Offset range in `buffer`; raw ranges are clipped to the document
    pub fn resolve(self, buffer: &TextBuffer) -> Range {
        match self {
            Region::Range(range) => buffer.clamp_range(range),
            Region::Span(span) => buffer.span_to_range(span),
        }
    }
}

impl From<Range> for Region {
    fn from(range: Range) -> Self {
        Region::Range(range)
    }
}

impl From<std::ops::Range<usize>> for Region {
    fn from(range: std::ops::Range<usize>) -> Self {
        Region::Range(range.into())
    }
}

impl From<Span> for Region {
    fn from(span: Span) -> Self {
        Region::Span(span)
    }
}
