//! Dependency Manifest Builder.
//!
//! Accumulates the foreign packages and legacy stub files a package's stub
//! refers to. Both collections are insertion-ordered so the serialized
//! manifest depends only on the order of the closure walk.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::base::FileId;
use crate::graph::{SymbolGraph, SymbolId};

/// Accumulator owned by one package's closure.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    /// Foreign package namespace root → last symbol that referenced it.
    packages: IndexMap<SymbolId, SymbolId>,
    legacy_stubs: IndexSet<FileId>,
}

impl ManifestBuilder {
    /// Record a reference into another package. Last write wins for the blame.
    pub fn record_package(&mut self, package_root: SymbolId, blame: SymbolId) {
        self.packages.insert(package_root, blame);
    }

    pub fn record_legacy_stub(&mut self, file: FileId) {
        self.legacy_stubs.insert(file);
    }

    /// The symbol that caused a dependency on `package_root`, for debugging.
    pub fn blame(&self, package_root: SymbolId) -> Option<SymbolId> {
        self.packages.get(&package_root).copied()
    }

    pub fn package_roots(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.packages.keys().copied()
    }

    pub fn legacy_stubs(&self) -> impl Iterator<Item = FileId> + '_ {
        self.legacy_stubs.iter().copied()
    }

    pub fn build(&self, graph: &SymbolGraph) -> DependencyManifest {
        DependencyManifest {
            package_refs: self
                .package_roots()
                .map(|root| graph.full_name(root))
                .collect(),
            rbi_refs: self
                .legacy_stubs()
                .filter_map(|file| graph.file(file).map(|file| file.path.to_string()))
                .collect(),
        }
    }
}

/// Serializable dependency record written next to each stub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    /// Fully-qualified names of referenced packages.
    pub package_refs: Vec<String>,
    /// Paths of referenced legacy stub files.
    pub rbi_refs: Vec<String>,
}

impl DependencyManifest {
    /// Fixed-shape JSON text: `{"packageRefs":[...], "rbiRefs":[...]}`.
    pub fn to_json(&self) -> String {
        format!(
            "{{\"packageRefs\":[{}], \"rbiRefs\":[{}]}}",
            quote_all(&self.package_refs),
            quote_all(&self.rbi_refs)
        )
    }
}

fn quote_all(values: &[String]) -> String {
    values
        .iter()
        .map(|value| serde_json::Value::from(value.as_str()).to_string())
        .collect::<Vec<_>>()
        .join(",")
}
