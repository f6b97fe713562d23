//! Closure Builder: which symbols belong in a package's stub.
//!
//! Starting from the export roots, the walk follows superclasses, mixins and
//! every symbol referenced from a rendered type. A symbol is accepted only if
//! its owner chain reaches this package's namespace (or its test namespace).
//! Symbols owned by another package are never expanded; they become entries
//! of the dependency manifest instead.
//!
//! ```text
//! maybe_enqueue(sym)
//!     │ singleton? → attached class
//!     │ visited?   → done
//!     ▼
//! classify(sym) ── Own ─────────→ visited += sym, worklist.push(sym)
//!     ├────────── Foreign(root) → manifest.packages[root] = sym
//!     └────────── Unpackaged ───→ manifest.legacy_stubs += file (legacy stubs only)
//! ```

mod manifest;

pub use manifest::{DependencyManifest, ManifestBuilder};

use rustc_hash::FxHashSet;

use crate::graph::{SymbolGraph, SymbolId, Type};
use crate::package::{PackageNamespaces, PackageScope};

/// Where a symbol lives relative to the package being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Inside this package's namespace or test namespace.
    Own,
    /// Inside another known package; carries that package's namespace root.
    Foreign(SymbolId),
    /// Not inside any package namespace.
    Unpackaged,
}

/// Per-package reachability state. Created fresh for every package.
#[derive(Debug)]
pub struct Closure<'a> {
    graph: &'a SymbolGraph,
    scope: PackageScope,
    namespaces: &'a PackageNamespaces,
    visited: FxHashSet<SymbolId>,
    worklist: Vec<SymbolId>,
    manifest: ManifestBuilder,
}

impl<'a> Closure<'a> {
    pub fn new(
        graph: &'a SymbolGraph,
        scope: PackageScope,
        namespaces: &'a PackageNamespaces,
    ) -> Self {
        Self {
            graph,
            scope,
            namespaces,
            visited: FxHashSet::default(),
            worklist: Vec::new(),
            manifest: ManifestBuilder::default(),
        }
    }

    pub fn scope(&self) -> &PackageScope {
        &self.scope
    }

    /// Decide ownership by walking the owner chain. Pure; records nothing.
    pub fn classify(&self, symbol: SymbolId) -> Ownership {
        for current in self.graph.owner_chain(symbol) {
            if self.scope.is_root(current) {
                return Ownership::Own;
            }
            if self.graph.is_class(current) && self.namespaces.contains(current) {
                return Ownership::Foreign(current);
            }
        }
        Ownership::Unpackaged
    }

    pub fn owns(&self, symbol: SymbolId) -> bool {
        self.classify(symbol) == Ownership::Own
    }

    /// True if `symbol` is the namespace root of any known package.
    pub fn is_package_root(&self, symbol: SymbolId) -> bool {
        self.namespaces.contains(symbol)
    }

    /// Add `symbol` to the closure if this package owns it, otherwise record
    /// the dependency it represents. Returns true if it was newly enqueued.
    pub fn maybe_enqueue(&mut self, symbol: SymbolId) -> bool {
        let symbol = self.graph.attached_class(symbol).unwrap_or(symbol);
        if self.visited.contains(&symbol) {
            return false;
        }

        match self.classify(symbol) {
            Ownership::Own => {
                self.visited.insert(symbol);
                self.worklist.push(symbol);
                true
            }
            Ownership::Foreign(package_root) => {
                tracing::trace!(
                    symbol = %self.graph.full_name(symbol),
                    package = %self.graph.full_name(package_root),
                    "recording package dependency"
                );
                self.manifest.record_package(package_root, symbol);
                false
            }
            Ownership::Unpackaged => {
                if let Some(loc) = self.graph.symbol(symbol).loc {
                    if self
                        .graph
                        .file(loc.file)
                        .is_some_and(|file| file.is_legacy_stub())
                    {
                        self.manifest.record_legacy_stub(loc.file);
                    }
                }
                false
            }
        }
    }

    /// Feed every symbol embedded in `ty` to [`Self::maybe_enqueue`].
    pub fn enqueue_symbols_in_type(&mut self, ty: &Type) {
        ty.for_each_symbol(&mut |symbol| {
            self.maybe_enqueue(symbol);
        });
    }

    /// Next symbol to render (last in, first out).
    pub fn pop(&mut self) -> Option<SymbolId> {
        self.worklist.pop()
    }

    pub fn is_visited(&self, symbol: SymbolId) -> bool {
        self.visited.contains(&symbol)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn manifest(&self) -> &ManifestBuilder {
        &self.manifest
    }

    /// Snapshot of the dependencies recorded so far.
    pub fn dependency_manifest(&self) -> DependencyManifest {
        self.manifest.build(self.graph)
    }
}
