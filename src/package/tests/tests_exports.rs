#![allow(clippy::unwrap_used)]

use super::super::*;
use crate::graph::{GraphBuilder, SymbolGraph};

fn setup(package: Package) -> (SymbolGraph, ExportRoots) {
    let mut builder = GraphBuilder::new();
    let foo = builder.add_module_path("Foo");
    builder.add_class(foo, "Widget");
    let test_foo = builder.add_module_path("Test::Foo");
    builder.add_class(test_foo, "WidgetHelper");
    let graph = builder.finish();

    let db: PackageDb = [package.clone()].into_iter().collect();
    let namespaces = PackageNamespaces::build(&graph, &db, "Test").unwrap();
    let scope = PackageScope::resolve(&graph, &package, "Test");
    let roots = ExportRoots::resolve(&graph, &package, &scope, &namespaces);
    (graph, roots)
}

#[test]
fn test_production_export_resolves() {
    let (graph, roots) = setup(Package::new("Foo").with_export("Foo::Widget"));
    assert_eq!(roots.production, vec![graph.lookup("Foo::Widget").unwrap()]);
    assert!(roots.test.is_empty());
}

#[test]
fn test_unresolved_export_is_skipped() {
    let (graph, roots) = setup(
        Package::new("Foo")
            .with_export("Foo::DoesNotExist")
            .with_export("Foo::Widget"),
    );
    assert_eq!(roots.production, vec![graph.lookup("Foo::Widget").unwrap()]);
}

#[test]
fn test_export_in_test_namespace_moves_to_test_roots() {
    let (graph, roots) = setup(Package::new("Foo").with_export("Test::Foo::WidgetHelper"));
    assert!(roots.production.is_empty());
    assert_eq!(roots.test, vec![graph.lookup("Test::Foo::WidgetHelper").unwrap()]);
}

#[test]
fn test_declared_test_exports() {
    let (graph, roots) = setup(
        Package::new("Foo")
            .with_test_export("Test::Foo::WidgetHelper")
            .with_test_export("Test::Foo::Nope"),
    );
    assert_eq!(roots.test, vec![graph.lookup("Test::Foo::WidgetHelper").unwrap()]);
    assert!(!roots.is_empty());
}
