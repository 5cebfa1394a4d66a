//! # Edit Application
//!
//! Validates an ordered edit list and splices it into a new buffer.
//!
//! ## Semantics
//!
//! - Edits must be sorted by start offset and pairwise non-overlapping;
//!   `edits[i].range.end <= edits[i + 1].range.start`.
//! - Any violation rejects the whole list before text is produced.
//! - One forward pass copies the untouched gaps and the replacements,
//!   then joins them once. Char offsets map to bytes through the
//!   buffer's line index.
//! - The input buffer is never modified.

use crate::buffer::TextBuffer;
use crate::edit::Edit;
use crate::errors::EditError;

/// Check that every edit lies in `buffer` and none overlap
pub fn validate_edits(buffer: &TextBuffer, edits: &[Edit]) -> Result<(), EditError> {
    let len = buffer.len();

    for edit in edits {
        let range = edit.range;
        if range.start > range.end || range.end > len {
            tracing::warn!("Rejected edit {}: outside document of {} chars", range, len);
            return Err(EditError::OutOfBounds { range, len });
        }
    }

    for pair in edits.windows(2) {
        let (previous, next) = (pair[0].range, pair[1].range);
        if previous.end > next.start {
            tracing::warn!("Rejected transaction: {} overlaps {}", next, previous);
            return Err(EditError::Conflict { previous, next });
        }
    }

    Ok(())
}

/// Apply a sorted, non-overlapping edit list, producing a new buffer
pub fn apply_edits(buffer: &TextBuffer, edits: &[Edit]) -> Result<TextBuffer, EditError> {
    validate_edits(buffer, edits)?;

    let source = buffer.source();
    let converter = buffer.converter();
    let mut fragments: Vec<&str> = Vec::with_capacity(edits.len() * 2 + 1);
    let mut previous_end = 0;

    for edit in edits {
        let bytes = converter.byte_range(edit.range);
        fragments.push(&source[previous_end..bytes.start]);
        if !edit.replacement.is_empty() {
            fragments.push(&edit.replacement);
        }
        previous_end = bytes.end;
    }
    fragments.push(&source[previous_end..]);

    let result = TextBuffer::new(fragments.concat());
    tracing::debug!(
        "Applied {} edits: {} -> {} chars",
        edits.len(),
        buffer.len(),
        result.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Range;

    #[test]
    fn test_apply_empty_list() {
        let buffer = TextBuffer::new("abc\ndef\n");
        let result = apply_edits(&buffer, &[]).unwrap();
        assert_eq!(result.source(), buffer.source());
    }

    #[test]
    fn test_apply_forward_splice() {
        let buffer = TextBuffer::new("hello world");
        let edits = vec![
            Edit::new(Range::new(0, 5), "goodbye"),
            Edit::new(Range::empty(5), ","),
            Edit::new(Range::new(6, 11), ""),
        ];

        let result = apply_edits(&buffer, &edits).unwrap();
        assert_eq!(result.source(), "goodbye, ");
    }

    #[test]
    fn test_adjacent_edits_do_not_conflict() {
        let buffer = TextBuffer::new("abcdef");
        let edits = vec![
            Edit::new(Range::new(0, 3), "X"),
            Edit::new(Range::new(3, 6), "Y"),
        ];
        assert_eq!(apply_edits(&buffer, &edits).unwrap().source(), "XY");
    }

    #[test]
    fn test_overlap_rejected() {
        let buffer = TextBuffer::new("abcdef");
        let edits = vec![
            Edit::new(Range::new(0, 3), "X"),
            Edit::new(Range::empty(1), "Y"),
        ];

        let err = apply_edits(&buffer, &edits).unwrap_err();
        assert_eq!(
            err,
            EditError::Conflict {
                previous: Range::new(0, 3),
                next: Range::empty(1),
            }
        );
        assert_eq!(buffer.source(), "abcdef");
    }

    #[test]
    fn test_unsorted_list_rejected() {
        let buffer = TextBuffer::new("abcdef");
        let edits = vec![
            Edit::new(Range::new(4, 5), "X"),
            Edit::new(Range::new(0, 1), "Y"),
        ];
        assert!(matches!(
            apply_edits(&buffer, &edits),
            Err(EditError::Conflict { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let buffer = TextBuffer::new("héllo");
        let past_end = vec![Edit::new(Range::new(2, 40), "")];
        assert_eq!(
            apply_edits(&buffer, &past_end).unwrap_err(),
            EditError::OutOfBounds {
                range: Range::new(2, 40),
                len: 5,
            }
        );

        let inverted = vec![Edit {
            range: Range { start: 4, end: 1 },
            replacement: String::new(),
        }];
        assert!(matches!(
            apply_edits(&buffer, &inverted),
            Err(EditError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_splice_multibyte_text() {
        let buffer = TextBuffer::new("héllo wörld");
        let edits = vec![
            Edit::new(Range::new(1, 2), "e"),
            Edit::new(Range::empty(6), "new "),
            Edit::new(Range::new(7, 8), "o"),
        ];
        assert_eq!(apply_edits(&buffer, &edits).unwrap().source(), "hello new world");
    }

    #[test]
    fn test_result_has_fresh_line_index() {
        let buffer = TextBuffer::new("a\nb\n");
        let edits = vec![Edit::new(Range::empty(2), "x\ny\n")];

        let result = apply_edits(&buffer, &edits).unwrap();
        assert_eq!(result.line_count(), 4);
        assert_eq!(result.line_anchors(), &[0, 2, 4, 6, 8]);
    }
}
