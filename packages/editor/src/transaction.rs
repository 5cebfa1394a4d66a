//! # Edit Transactions
//!
//! Builder that collects edits against one buffer snapshot and applies
//! them together.
//!
//! Every request is normalized on arrival into an absolute [`Edit`]:
//!
//! - offsets clamp to `[0, len]`, positions convert through the line index
//! - raw ranges are clipped to the document
//! - spans are reordered and converted, `last` inclusive
//!
//! The pending list stays sorted by start offset, ties in arrival order.
//! Overlaps are not resolved here; they fail the whole transaction when it
//! is applied.
//!
//! ## Example
//!
//! ```rust
//! use textcore_editor::{Position, Span, TextBuffer};
//!
//! let buffer = TextBuffer::new("abc\ndef\n");
//! let edited = buffer
//!     .edit(|tx| {
//!         tx.replace(Span::from_coords((1, 1), (1, 3)), "Y");
//!         tx.insert_at(Position::new(2, 4), "!");
//!     })
//!     .unwrap();
//!
//! assert_eq!(edited.source(), "Y\ndef!\n");
//! assert_eq!(buffer.source(), "abc\ndef\n");
//! ```

use crate::applier::apply_edits;
use crate::buffer::TextBuffer;
use crate::coords::{Position, Range};
use crate::edit::{Edit, InsertAt, Region};
use crate::errors::EditError;

/// Pending edits bound to one buffer snapshot
///
/// Consumed by [`commit`](EditTransaction::commit); it cannot be duplicated
/// and applied twice.
///
/// ```compile_fail
/// use textcore_editor::{EditTransaction, TextBuffer};
///
/// let buffer = TextBuffer::new("a");
/// let tx = buffer.transaction();
/// let copy: EditTransaction<'_> = tx.clone();
/// ```
#[derive(Debug)]
pub struct EditTransaction<'a> {
    buffer: &'a TextBuffer,
    edits: Vec<Edit>,
}

impl<'a> EditTransaction<'a> {
    pub fn new(buffer: &'a TextBuffer) -> Self {
        Self {
            buffer,
            edits: Vec::new(),
        }
    }

    /// Snapshot the edits are expressed against
    pub fn buffer(&self) -> &'a TextBuffer {
        self.buffer
    }

    /// Pending edits in application order
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    fn record(&mut self, edit: Edit) {
        let index = self
            .edits
            .partition_point(|e| e.range.start <= edit.range.start);
        tracing::debug!(
            "Recorded edit {} ({} bytes) at slot {}",
            edit.range,
            edit.replacement.len(),
            index
        );
        self.edits.insert(index, edit);
    }

    fn record_insert(&mut self, at: InsertAt, text: String) {
        let offset = at.resolve(self.buffer);
        self.record(Edit::new(Range::empty(offset), text));
    }

    /// Insert `text` at a char offset
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) -> &mut Self {
        self.record_insert(InsertAt::Offset(offset), text.into());
        self
    }

    /// Insert `text` at a line/column position
    pub fn insert_at(&mut self, pos: Position, text: impl Into<String>) -> &mut Self {
        self.record_insert(InsertAt::Position(pos), text.into());
        self
    }

    /// Several inserts in one call
    pub fn insert_many<I, T>(&mut self, inserts: I) -> &mut Self
    where
        I: IntoIterator<Item = (InsertAt, T)>,
        T: Into<String>,
    {
        for (at, text) in inserts {
            self.record_insert(at, text.into());
        }
        self
    }

    /// Insert `text` as a whole line in front of `line`
    ///
    /// Line 0 inserts at the top, lines past the end append. A terminator in
    /// the document's own style is added when `text` lacks one.
    pub fn insert_line(&mut self, line: usize, text: impl Into<String>) -> &mut Self {
        let buffer = self.buffer;
        let ending = buffer.line_ending();

        let mut text = text.into();
        if !text.ends_with('\n') {
            text.push_str(ending.as_str());
        }

        let offset = if line == 0 {
            0
        } else {
            match buffer.line_range(line, false) {
                Some(range) => range.start,
                None => {
                    let len = buffer.len();
                    // text ending up right before this append: earlier appends, else the source
                    let before = self
                        .edits
                        .last()
                        .filter(|e| e.range.start == len && !e.replacement.is_empty())
                        .map_or(buffer.source(), |e| e.replacement.as_str());
                    if !before.is_empty() && !before.ends_with('\n') {
                        text.insert_str(0, ending.as_str());
                    }
                    len
                }
            }
        };

        self.record(Edit::new(Range::empty(offset), text));
        self
    }

    /// Several line inserts in one call
    pub fn insert_lines<I, T>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = (usize, T)>,
        T: Into<String>,
    {
        for (line, text) in lines {
            self.insert_line(line, text);
        }
        self
    }

    /// Remove a whole line including its terminator; no-op if it does not exist
    pub fn remove_line(&mut self, line: usize) -> &mut Self {
        if let Some(range) = self.buffer.line_range(line, true) {
            self.record(Edit::new(range, String::new()));
        }
        self
    }

    pub fn remove(&mut self, region: impl Into<Region>) -> &mut Self {
        let range = region.into().resolve(self.buffer);
        self.record(Edit::new(range, String::new()));
        self
    }

    pub fn replace(&mut self, region: impl Into<Region>, text: impl Into<String>) -> &mut Self {
        let range = region.into().resolve(self.buffer);
        self.record(Edit::new(range, text));
        self
    }

    /// Validate and apply, producing a new buffer
    pub fn commit(self) -> Result<TextBuffer, EditError> {
        apply_edits(self.buffer, &self.edits)
    }
}

impl TextBuffer {
    /// Empty transaction bound to this buffer
    pub fn transaction(&self) -> EditTransaction<'_> {
        EditTransaction::new(self)
    }

    /// Build edits with `build`, then validate and apply them
    pub fn edit<F>(&self, build: F) -> Result<TextBuffer, EditError>
    where
        F: FnOnce(&mut EditTransaction<'_>),
    {
        let mut transaction = self.transaction();
        build(&mut transaction);
        transaction.commit()
    }

    /// Asynchronous form of [`TextBuffer::edit`]
    ///
    /// Nothing runs until the future is polled; it then completes in one
    /// step with the new buffer or the conflict that rejected the edits.
    pub async fn begin_edit<F>(&self, build: F) -> Result<TextBuffer, EditError>
    where
        F: FnOnce(&mut EditTransaction<'_>),
    {
        self.edit(build)
    }
}
