use crate::graph::{SymbolGraph, SymbolId};

use super::{Package, PackageNamespaces, PackageScope};

/// A package's declared exports resolved to symbols and split by namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRoots {
    pub production: Vec<SymbolId>,
    pub test: Vec<SymbolId>,
}

impl ExportRoots {
    /// Resolve every export path of `package`.
    ///
    /// Paths that do not resolve are skipped: a partial build may declare
    /// exports that have no definition yet. A plain export that lives in the
    /// package's test namespace is treated as a test export.
    pub fn resolve(
        graph: &SymbolGraph,
        package: &Package,
        scope: &PackageScope,
        namespaces: &PackageNamespaces,
    ) -> Self {
        let mut roots = Self::default();

        for path in &package.exports {
            let Some(symbol) = graph.lookup_path(path) else {
                tracing::trace!(package = %package.full_name(), export = ?path, "skipping unresolved export");
                continue;
            };
            if is_in_test_namespace(graph, symbol, scope, namespaces) {
                roots.test.push(symbol);
            } else {
                roots.production.push(symbol);
            }
        }

        for path in &package.test_exports {
            match graph.lookup_path(path) {
                Some(symbol) => roots.test.push(symbol),
                None => {
                    tracing::trace!(package = %package.full_name(), export = ?path, "skipping unresolved test export");
                }
            }
        }

        roots
    }

    pub fn is_empty(&self) -> bool {
        self.production.is_empty() && self.test.is_empty()
    }
}

/// Walk the owner chain until a namespace root decides the question.
fn is_in_test_namespace(
    graph: &SymbolGraph,
    symbol: SymbolId,
    scope: &PackageScope,
    namespaces: &PackageNamespaces,
) -> bool {
    for current in graph.owner_chain(symbol) {
        if scope.namespace == Some(current) {
            return false;
        }
        if scope.test_namespace == Some(current) {
            return true;
        }
        if namespaces.contains(current) {
            return false;
        }
    }
    false
}
