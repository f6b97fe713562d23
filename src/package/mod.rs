//! Package database and export root resolution.
//!
//! A package is identified by its fully-qualified name path. It owns the
//! namespace found at that path, plus a test namespace found at the same path
//! under the configured test root (`Test::Foo::Bar` for package `Foo::Bar`).
//!
//! - [`PackageDb`] - all known packages, in declaration order
//! - [`PackageNamespaces`] - the namespace roots of every known package
//! - [`ExportRoots`] - a package's exports resolved to symbols

mod exports;
mod namespace;

pub use exports::ExportRoots;
pub use namespace::{PackageNamespaces, PackageScope};

use crate::base::{Name, NamePath, name_path};

/// A package declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: NamePath,
    /// Declared export name paths.
    pub exports: Vec<NamePath>,
    /// Declared test-only export name paths.
    pub test_exports: Vec<NamePath>,
}

impl Package {
    pub fn new(name: &str) -> Self {
        Self {
            name: name_path(name),
            exports: Vec::new(),
            test_exports: Vec::new(),
        }
    }

    pub fn with_export(mut self, path: &str) -> Self {
        self.exports.push(name_path(path));
        self
    }

    pub fn with_test_export(mut self, path: &str) -> Self {
        self.test_exports.push(name_path(path));
        self
    }

    /// `Foo::Bar`
    pub fn full_name(&self) -> String {
        join(&self.name, "::")
    }

    /// File-system safe identifier: `Foo_Bar_Package`.
    pub fn mangled_name(&self) -> String {
        let mut mangled = join(&self.name, "_");
        mangled.push_str("_Package");
        mangled
    }

    /// Name path of the test namespace under `test_root`.
    pub fn test_name(&self, test_root: &str) -> NamePath {
        let mut path = Vec::with_capacity(self.name.len() + 1);
        path.push(Name::new(test_root));
        path.extend(self.name.iter().cloned());
        path
    }
}

fn join(path: &[Name], separator: &str) -> String {
    path.iter()
        .map(Name::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// All packages known to the run.
#[derive(Debug, Clone, Default)]
pub struct PackageDb {
    packages: Vec<Package>,
}

impl PackageDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, package: Package) {
        self.packages.push(package);
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn get(&self, index: usize) -> Option<&Package> {
        self.packages.get(index)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<Package> for PackageDb {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
