//! Assertions over generated stub text.

use std::collections::HashSet;

use stubgen::DependencyManifest;

/// Assert no class or module is declared twice.
pub fn assert_no_duplicate_declarations(stub: &str) {
    let mut seen = HashSet::new();
    for line in stub.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("class ") || trimmed.starts_with("module ") {
            assert!(seen.insert(trimmed), "Duplicate declaration: {}\n{}", trimmed, stub);
        }
    }
}

/// Assert `stub` declares exactly one class or module named `name`.
pub fn assert_declared_once(stub: &str, name: &str) {
    let count = stub
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            [format!("class {name}"), format!("module {name}")]
                .iter()
                .any(|header| {
                    trimmed == header
                        || trimmed.starts_with(&format!("{header} "))
                })
        })
        .count();
    assert_eq!(count, 1, "Expected one declaration of '{}' in:\n{}", name, stub);
}

/// Assert every constant path in `stub` that lies inside one of `packages`
/// is either owned by one of `own` or belongs to a package in the manifest.
pub fn assert_references_resolved(
    stub: &str,
    own: &[&str],
    packages: &[&str],
    manifest: &DependencyManifest,
) {
    let inside = |path: &str, root: &str| path == root || path.starts_with(&format!("{root}::"));

    for token in stub.split(|c: char| !(c.is_alphanumeric() || c == ':' || c == '_')) {
        let path = token.trim_matches(':');
        if !path.contains("::") || !packages.iter().any(|root| inside(path, root)) {
            continue;
        }
        let owned = own.iter().any(|root| inside(path, root));
        let declared = manifest
            .package_refs
            .iter()
            .any(|root| inside(path, root));
        assert!(
            owned || declared,
            "Reference '{}' is neither owned nor a declared dependency\n{}",
            path,
            stub
        );
    }
}
