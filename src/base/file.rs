//! Source provenance for symbols.
//!
//! Stores where a symbol was declared so that the renderer can recover the
//! original declaration text, and so that the closure can tell legacy stub
//! files apart from ordinary sources.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

/// Identifier of a source file inside a symbol graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of file a symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Ordinary implementation source.
    Source,
    /// Hand-written legacy interface stub.
    LegacyStub,
    /// Interface stub bundled with the toolchain (built-in definitions).
    Bundled,
}

/// A source file with its text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: Arc<str>,
    pub kind: FileKind,
    pub text: Arc<str>,
}

impl SourceFile {
    pub fn new(path: impl Into<Arc<str>>, kind: FileKind, text: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            kind,
            text: text.into(),
        }
    }

    /// True for hand-written stubs that a dependent package must reference.
    pub fn is_legacy_stub(&self) -> bool {
        self.kind == FileKind::LegacyStub
    }

    /// Text covered by `range`, if the range lies inside the file.
    pub fn slice(&self, range: TextRange) -> Option<&str> {
        self.text.get(std::ops::Range::<usize>::from(range))
    }
}

/// A declaration location: a byte range inside one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Loc {
    pub file: FileId,
    pub range: TextRange,
}

impl Loc {
    pub fn new(file: FileId, range: TextRange) -> Self {
        Self { file, range }
    }

    /// Create a location from raw byte offsets.
    pub fn from_offsets(file: FileId, start: u32, end: u32) -> Self {
        Self {
            file,
            range: TextRange::new(TextSize::from(start), TextSize::from(end)),
        }
    }
}
