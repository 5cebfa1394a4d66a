//! # Textcore Editor
//!
//! Text buffer core for editor tooling.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ loader: locator → text (textcore-common)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ buffer: immutable text + line index         │
//! │  - Offset ↔ line/column conversion          │
//! │  - Line lookup, iteration, slicing          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ transaction: normalized, sorted edits       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ applier: validate + one forward splice      │
//! │  → brand-new buffer                         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Buffers are immutable**: every edit produces a new buffer
//! 2. **Clamp, don't fail**: navigation outside the document clamps to it
//! 3. **All or nothing**: overlapping edits reject the whole transaction
//! 4. **Terminators are preserved**: `\n` and `\r\n` are recognized, never rewritten
//!
//! ## Usage
//!
//! ```rust
//! use textcore_editor::{Range, TextBuffer};
//!
//! let buffer = TextBuffer::new("a\nb\nc\n");
//! assert_eq!(buffer.line_string(2), Some("b"));
//!
//! let edited = buffer
//!     .edit(|tx| {
//!         tx.remove_line(2);
//!         tx.replace(Range::new(0, 1), "A");
//!     })
//!     .unwrap();
//!
//! assert_eq!(edited.source(), "A\nc\n");
//! ```

mod applier;
mod buffer;
mod coords;
mod edit;
mod errors;
mod line_index;
mod transaction;

pub use applier::{apply_edits, validate_edits};
pub use buffer::{Line, LineEnding, Lines, TextBuffer};
pub use coords::{Position, Range, Span};
pub use edit::{Edit, InsertAt, Region};
pub use errors::{EditError, LoadError};
pub use line_index::{CoordinateConverter, LineIndex};
pub use transaction::EditTransaction;

// Re-export loader types for convenience
pub use textcore_common::{FsLoader, LoadResult, MemoryLoader, TextLoader};
