//! Per-package pipeline and the parallel driver around it.
//!
//! [`PackageGenerator::generate`] runs Export Root Resolver, Closure Builder,
//! renderer and manifest for one package. Production exports are rendered
//! first; the test exports are then rendered on the same state, so the test
//! stub only holds what the production stub did not already declare.

mod driver;
mod options;
mod sink;

pub use driver::{RunSummary, WorkQueue, generate_all};
pub use options::GenerateOptions;
pub use sink::{ArtifactSink, FsSink, MemorySink};

use crate::closure::Closure;
use crate::error::Result;
use crate::graph::{SymbolGraph, SymbolId};
use crate::package::{ExportRoots, Package, PackageNamespaces, PackageScope};
use crate::render::{KnownClasses, StubRenderer};

/// Artifacts of one package. `None` entries are not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageOutput {
    /// Mangled package name every file name starts with.
    pub base_name: String,
    pub stub: Option<String>,
    pub manifest: Option<String>,
    pub test_stub: Option<String>,
    pub test_manifest: Option<String>,
}

impl PackageOutput {
    /// `(file name, contents)` for every artifact present.
    pub fn artifacts<'o>(&'o self, options: &GenerateOptions) -> Vec<(String, &'o str)> {
        [
            (&options.stub_suffix, &self.stub),
            (&options.manifest_suffix, &self.manifest),
            (&options.test_stub_suffix, &self.test_stub),
            (&options.test_manifest_suffix, &self.test_manifest),
        ]
        .into_iter()
        .filter_map(|(suffix, contents)| {
            contents
                .as_deref()
                .map(|contents| (format!("{}{suffix}", self.base_name), contents))
        })
        .collect()
    }

    /// Write every artifact to `sink`; returns the number written.
    pub fn write_to(&self, sink: &dyn ArtifactSink, options: &GenerateOptions) -> Result<usize> {
        let artifacts = self.artifacts(options);
        for (name, contents) in &artifacts {
            sink.write(name, contents)?;
        }
        Ok(artifacts.len())
    }
}

/// Shared read-only context for generating any package of a run.
pub struct PackageGenerator<'a> {
    graph: &'a SymbolGraph,
    namespaces: &'a PackageNamespaces,
    options: &'a GenerateOptions,
    known: KnownClasses,
}

impl<'a> PackageGenerator<'a> {
    pub fn new(
        graph: &'a SymbolGraph,
        namespaces: &'a PackageNamespaces,
        options: &'a GenerateOptions,
    ) -> Self {
        Self {
            graph,
            namespaces,
            options,
            known: KnownClasses::resolve(graph, &options.render),
        }
    }

    /// Run the whole pipeline for one package. Writes nothing.
    pub fn generate(&self, package: &Package) -> Result<PackageOutput> {
        let graph = self.graph;
        let scope = PackageScope::resolve(graph, package, &self.options.test_namespace);
        let exports = ExportRoots::resolve(graph, package, &scope, self.namespaces);
        let closure = Closure::new(graph, scope, self.namespaces);
        let mut renderer = StubRenderer::new(
            graph,
            closure,
            &self.options.render,
            self.known,
            package.full_name(),
        );

        let mut output = PackageOutput {
            base_name: package.mangled_name(),
            ..PackageOutput::default()
        };

        if !exports.production.is_empty() {
            let body = Self::render_roots(&mut renderer, &exports.production)?;
            output.stub = Some(self.stub_text(&body));
            output.manifest = Some(renderer.manifest().to_json());
        }

        if !exports.test.is_empty() {
            let body = Self::render_roots(&mut renderer, &exports.test)?;
            if !body.is_empty() {
                output.test_stub = Some(self.stub_text(&body));
                output.test_manifest = Some(renderer.manifest().to_json());
            }
        }

        tracing::debug!(
            package = %package.full_name(),
            exports = exports.production.len(),
            test_exports = exports.test.len(),
            symbols = renderer.closure().visited_count(),
            "generated package"
        );
        Ok(output)
    }

    fn render_roots(renderer: &mut StubRenderer<'_>, roots: &[SymbolId]) -> Result<String> {
        for &root in roots {
            renderer.enqueue(root);
        }
        renderer.drain()?;
        Ok(renderer.take_output())
    }

    fn stub_text(&self, body: &str) -> String {
        format!("{}\n\n{body}", self.options.render.header)
    }
}

#[cfg(test)]
mod tests;
