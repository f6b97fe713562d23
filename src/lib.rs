//! # package-stubgen
//!
//! Per-package interface stubs and dependency manifests from a fully resolved
//! symbol graph.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate  → per-package pipeline, artifact sinks, parallel driver
//!   ↓
//! render    → class/method/type printer, pattern recognizers
//!   ↓
//! closure   → package closure walk, dependency manifest
//!   ↓
//! package   → package database, namespaces, export roots
//!   ↓
//! graph     → symbol arena, resolved types, graph builder
//!   ↓
//! base      → primitives (Name, FileId, Loc, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → graph → package → closure → render → generate)
// ============================================================================

/// Foundation types: Name, FileId, Loc, constants
pub mod base;

/// Symbol graph: arena of symbols and resolved types
pub mod graph;

/// Packages: namespaces and export roots
pub mod package;

/// Closure Builder and Dependency Manifest Builder
pub mod closure;

/// Interface Renderer
pub mod render;

/// Per-package pipeline and Parallel Package Driver
pub mod generate;

/// Error type shared by every stage
pub mod error;

pub use closure::{Closure, DependencyManifest, Ownership};
pub use error::{GenerateError, Result};
pub use generate::{
    ArtifactSink, FsSink, GenerateOptions, MemorySink, PackageGenerator, PackageOutput,
    RunSummary, generate_all,
};
pub use graph::{GraphBuilder, SymbolGraph, SymbolId, Type};
pub use package::{Package, PackageDb};
pub use render::{RenderOptions, StubRenderer};
