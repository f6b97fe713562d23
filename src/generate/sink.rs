//! Where generated artifacts go.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{GenerateError, Result};

/// Destination for generated files. Shared by all workers.
pub trait ArtifactSink: Send + Sync {
    /// Store `contents` under the file name `name`.
    fn write(&self, name: &str, contents: &str) -> Result<()>;
}

/// Writes artifacts as files into one output directory.
#[derive(Debug, Clone)]
pub struct FsSink {
    dir: PathBuf,
}

impl FsSink {
    /// Create the sink, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| GenerateError::io(&dir, source))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for FsSink {
    fn write(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(name);
        std::fs::write(&path, contents).map_err(|source| GenerateError::io(path, source))
    }
}

/// Keeps artifacts in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files.lock().get(name).cloned()
    }

    /// File names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.files.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.files.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().is_empty()
    }

    pub fn into_files(self) -> BTreeMap<String, String> {
        self.files.into_inner()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&self, name: &str, contents: &str) -> Result<()> {
        self.files.lock().insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
