//! Parallel Package Driver.
//!
//! All packages are queued up front. A fixed rayon pool runs one worker per
//! thread; each pops packages until the queue is empty and runs the whole
//! pipeline for each. `ThreadPool::scope` returns only after every worker has
//! finished. The first error raises an abort flag, remaining workers stop
//! taking packages, and that error is returned.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use rayon::ThreadPoolBuilder;

use crate::error::{GenerateError, Result};
use crate::graph::SymbolGraph;
use crate::package::{PackageDb, PackageNamespaces};

use super::{ArtifactSink, GenerateOptions, PackageGenerator};

/// Pop-only queue, filled before any worker starts.
#[derive(Debug)]
pub struct WorkQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> WorkQueue<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().collect()),
        }
    }

    /// Next item, or `None` once drained.
    pub fn try_pop(&self) -> Option<T> {
        self.items.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

/// Totals of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub packages: usize,
    pub artifacts: usize,
}

/// Generate and write the artifacts of every package in `db`.
pub fn generate_all(
    graph: &SymbolGraph,
    db: &PackageDb,
    options: &GenerateOptions,
    sink: &dyn ArtifactSink,
) -> Result<RunSummary> {
    let namespaces = PackageNamespaces::build(graph, db, &options.test_namespace)?;
    let generator = PackageGenerator::new(graph, &namespaces, options);
    let queue = WorkQueue::new(db.packages());

    let mut builder = ThreadPoolBuilder::new();
    if let Some(count) = options.worker_count {
        builder = builder.num_threads(count);
    }
    let pool = builder.build()?;
    let workers = pool.current_num_threads();

    tracing::info!(packages = db.len(), workers, "generating package stubs");

    let aborted = AtomicBool::new(false);
    let first_error: Mutex<Option<GenerateError>> = Mutex::new(None);
    let packages_done = AtomicUsize::new(0);
    let artifacts = AtomicUsize::new(0);

    pool.scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|_| {
                while !aborted.load(Ordering::Acquire) {
                    let Some(package) = queue.try_pop() else {
                        break;
                    };
                    let written = generator
                        .generate(package)
                        .and_then(|output| output.write_to(sink, options));
                    match written {
                        Ok(count) => {
                            packages_done.fetch_add(1, Ordering::Relaxed);
                            artifacts.fetch_add(count, Ordering::Relaxed);
                        }
                        Err(error) => {
                            aborted.store(true, Ordering::Release);
                            let mut slot = first_error.lock();
                            if slot.is_none() {
                                *slot = Some(error);
                            }
                            break;
                        }
                    }
                }
            });
        }
    });

    if let Some(error) = first_error.into_inner() {
        tracing::warn!(%error, "package stub generation aborted");
        return Err(error);
    }

    let summary = RunSummary {
        packages: packages_done.into_inner(),
        artifacts: artifacts.into_inner(),
    };
    tracing::info!(
        packages = summary.packages,
        artifacts = summary.artifacts,
        "package stubs generated"
    );
    Ok(summary)
}
