//! Error types for stub generation.
//!
//! Unresolvable exports are not errors (they are skipped). Everything here is
//! either an I/O failure or a broken invariant of the input graph, and aborts
//! the whole run.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A class outside the package closure reached the renderer.
    #[error("Refusing to render {symbol}: it is not owned by package {package}")]
    ForeignSymbol { symbol: String, package: String },

    /// A method without even its synthetic block parameter.
    #[error("Method {method} has no parameter list")]
    MissingParameters { method: String },

    /// A delegation declaration whose receiver could not be found.
    #[error("Invalid delegation on {method}: {declaration:?}")]
    InvalidDelegation { method: String, declaration: String },

    /// A mixed-in class methods list holding something other than class references.
    #[error("Invalid mixed-in class methods on {method}")]
    InvalidMixin { method: String },

    #[error("No packages found")]
    NoPackages,

    #[error("IO error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_parameters(method: impl Into<String>) -> Self {
        Self::MissingParameters {
            method: method.into(),
        }
    }

    pub fn invalid_delegation(method: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self::InvalidDelegation {
            method: method.into(),
            declaration: declaration.into(),
        }
    }
}
