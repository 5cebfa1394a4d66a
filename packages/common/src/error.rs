use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain text from an external content source
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No content at {}", .0.display())]
    NotFound(PathBuf),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Locator the failed load was addressed to
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. } => path,
            LoadError::NotFound(path) => path,
        }
    }
}
