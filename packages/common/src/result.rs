use crate::error::LoadError;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
