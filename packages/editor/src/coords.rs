//! # Coordinates
//!
//! Value types for addressing text inside a buffer.
//!
//! - [`Position`]: 1-based `(line, col)`, human facing. Columns count chars.
//! - [`Range`]: half-open `[start, end)` char offsets into the source.
//! - [`Span`]: two positions delimiting a region, reordered on use.
//!
//! Coordinates are only meaningful against the buffer they were derived from.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 1-based line/column coordinate
///
/// Field order gives the derived `Ord` document order: line first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Both components are clamped to a minimum of 1
    pub fn new(line: usize, col: usize) -> Self {
        Self {
            line: line.max(1),
            col: col.max(1),
        }
    }

    /// Document-order comparison
    pub fn compare(a: &Position, b: &Position) -> Ordering {
        a.cmp(b)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, col): (usize, usize)) -> Self {
        Self::new(line, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Half-open char offset interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Endpoints are swapped if given out of order
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Zero-length range at `offset`
    pub fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Overlap with `other`, collapsed to an empty range at the nearest
    /// boundary when the two are disjoint
    pub fn intersect(&self, other: &Range) -> Range {
        let start = self.start.clamp(other.start, other.end);
        let end = self.end.clamp(other.start, other.end);
        Range::new(start, end)
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Range::new(r.start, r.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Region between two positions, both endpoints denoting characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub first: Position,
    pub last: Position,
}

impl Span {
    pub fn new(first: Position, last: Position) -> Self {
        Self { first, last }
    }

    /// Span from `(line, col)` pairs
    pub fn from_coords(first: (usize, usize), last: (usize, usize)) -> Self {
        Self::new(first.into(), last.into())
    }

    /// Endpoints in document order
    pub fn ordered(&self) -> (Position, Position) {
        if self.first <= self.last {
            (self.first, self.last)
        } else {
            (self.last, self.first)
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_clamps_to_one() {
        assert_eq!(Position::new(0, 0), Position { line: 1, col: 1 });
        assert_eq!(Position::new(3, 0), Position { line: 3, col: 1 });
    }

    #[test]
    fn test_position_document_order() {
        let a = Position::new(1, 10);
        let b = Position::new(2, 1);
        assert_eq!(Position::compare(&a, &b), Ordering::Less);
        assert_eq!(Position::compare(&b, &a), Ordering::Greater);
        assert_eq!(Position::compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_range_orders_endpoints() {
        let r = Range::new(8, 3);
        assert_eq!(r, Range { start: 3, end: 8 });
        assert_eq!(r.len(), 5);
        assert!(!r.is_empty());
        assert!(Range::empty(4).is_empty());
    }

    #[test]
    fn test_range_intersect() {
        let full = Range::new(0, 10);
        assert_eq!(Range::new(5, 20).intersect(&full), Range::new(5, 10));
        assert_eq!(Range::new(12, 20).intersect(&full), Range::empty(10));
        assert_eq!(Range::new(2, 4).intersect(&full), Range::new(2, 4));
    }

    #[test]
    fn test_span_ordered() {
        let span = Span::from_coords((2, 4), (1, 7));
        assert_eq!(span.ordered(), (Position::new(1, 7), Position::new(2, 4)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(Span::from_coords((1, 2), (3, 4))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first": { "line": 1, "col": 2 },
                "last": { "line": 3, "col": 4 }
            })
        );
    }
}
