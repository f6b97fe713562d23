use rustc_hash::FxHashSet;

use crate::error::{GenerateError, Result};
use crate::graph::{SymbolGraph, SymbolId};

use super::{Package, PackageDb};

/// The namespace roots one package owns. Either may be missing when the
/// package declares no symbols there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackageScope {
    pub namespace: Option<SymbolId>,
    pub test_namespace: Option<SymbolId>,
}

impl PackageScope {
    pub fn resolve(graph: &SymbolGraph, package: &Package, test_root: &str) -> Self {
        Self {
            namespace: graph.lookup_path(&package.name),
            test_namespace: graph.lookup_path(&package.test_name(test_root)),
        }
    }

    /// True if `symbol` is one of this package's own namespace roots.
    pub fn is_root(&self, symbol: SymbolId) -> bool {
        self.namespace == Some(symbol) || self.test_namespace == Some(symbol)
    }
}

/// Namespace roots of every known package, production and test.
///
/// Built once per run and shared read-only by all workers.
#[derive(Debug, Clone, Default)]
pub struct PackageNamespaces {
    roots: FxHashSet<SymbolId>,
}

impl PackageNamespaces {
    pub fn build(graph: &SymbolGraph, db: &PackageDb, test_root: &str) -> Result<Self> {
        if db.is_empty() {
            return Err(GenerateError::NoPackages);
        }

        let mut roots = FxHashSet::default();
        for package in db.packages() {
            let scope = PackageScope::resolve(graph, package, test_root);
            roots.extend(scope.namespace);
            roots.extend(scope.test_namespace);
        }
        Ok(Self { roots })
    }

    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.roots.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
