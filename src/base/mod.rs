//! Foundation types for stub generation.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`] - Symbol and file names
//! - [`FileId`], [`SourceFile`], [`FileKind`] - Source provenance
//! - [`Loc`] - Byte range of a declaration inside a source file
//! - Domain constants (reserved member names, output markers)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod file;
mod name;

pub use file::{FileId, FileKind, Loc, SourceFile};
pub use name::{Name, NamePath, name_path};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
