//! Error types for the editor

use thiserror::Error;

use crate::coords::Range;

pub use textcore_common::LoadError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Edit conflict: {next} overlaps {previous}")]
    Conflict { previous: Range, next: Range },

    #[error("Edit range {range} is outside the document ({len} chars)")]
    OutOfBounds { range: Range, len: usize },
}
