use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{LoadError, LoadResult};

/// Content source abstraction so buffers never perform their own I/O
pub trait TextLoader {
    /// Read the full text stored at `locator`
    fn load(&self, locator: &Path) -> LoadResult<String>;
}

/// Real file system loader
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl TextLoader for FsLoader {
    fn load(&self, locator: &Path) -> LoadResult<String> {
        tracing::debug!("Loading text from {}", locator.display());
        std::fs::read_to_string(locator).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(locator.to_path_buf()),
            _ => LoadError::io(locator, e),
        })
    }
}

/// In-memory loader for testing
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    pub files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl TextLoader for MemoryLoader {
    fn load(&self, locator: &Path) -> LoadResult<String> {
        self.files
            .get(locator)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(locator.to_path_buf()))
    }
}

impl<L: TextLoader + ?Sized> TextLoader for &L {
    fn load(&self, locator: &Path) -> LoadResult<String> {
        (**self).load(locator)
    }
}
