#![allow(clippy::unwrap_used)]

use stubgen::graph::SymbolGraph;
use stubgen::package::{PackageDb, PackageNamespaces};
use stubgen::{DependencyManifest, GenerateOptions, PackageGenerator, PackageOutput};

use crate::helpers::shop_fixture::{CART, CORE, LEGACY_STUB, shop};
use crate::helpers::stub_assertions::{
    assert_declared_once, assert_no_duplicate_declarations, assert_references_resolved,
};

fn generate(graph: &SymbolGraph, db: &PackageDb, name: &str) -> PackageOutput {
    let options = GenerateOptions::default();
    let namespaces = PackageNamespaces::build(graph, db, &options.test_namespace).unwrap();
    let package = db
        .packages()
        .iter()
        .find(|package| package.full_name() == name)
        .unwrap();
    PackageGenerator::new(graph, &namespaces, &options)
        .generate(package)
        .unwrap()
}

fn manifest(json: &Option<String>) -> DependencyManifest {
    serde_json::from_str(json.as_deref().unwrap()).unwrap()
}

#[test]
fn test_generation_is_idempotent() {
    let (graph, db) = shop();
    for name in [CORE, CART] {
        assert_eq!(generate(&graph, &db, name), generate(&graph, &db, name));
    }
}

#[test]
fn test_core_stub() {
    let (graph, db) = shop();
    let output = generate(&graph, &db, CORE);

    assert_eq!(output.base_name, "Shop_Core_Package");
    assert_eq!(
        output.stub.as_deref().unwrap(),
        "# typed: true

class Shop::Core::Color < T::Enum
  enums do
    Red = new
    Green = new
  end
end
class Shop::Core::Price < T::Struct
  const :amount, Integer
  prop :currency, T.nilable(String), default: T.let(T.unsafe(nil), T.nilable(String))
end
"
    );
    assert_eq!(
        output.manifest.as_deref(),
        Some(r#"{"packageRefs":[], "rbiRefs":[]}"#)
    );
    assert!(output.test_stub.is_none());
}

#[test]
fn test_cart_stub() {
    let (graph, db) = shop();
    let output = generate(&graph, &db, CART);

    assert_eq!(
        output.stub.as_deref().unwrap(),
        "# typed: true

class Shop::Cart::Bag
  def_delegator :@items, :size
  def_delegator :@items, :each
end
class Shop::Cart::Cart
  sig {returns(Shop::Core::Price)}
  def total; end
  sig {params(item: Shop::Cart::Item).void}
  def add(item); end
  sig {returns(Money)}
  def discount; end
  sig {returns(T.nilable(String))}
  def label; end
  sig do
    params(
      a: Integer,
      b: Integer,
      c: Integer,
      d: Integer,
      e: Integer
    )
    .void
  end
  def checkout(a, b, c, d, e); end
end
class Shop::Cart::Item
end
"
    );
}

#[test]
fn test_cart_manifest_lists_packages_and_legacy_stubs() {
    let (graph, db) = shop();
    let output = generate(&graph, &db, CART);

    assert_eq!(
        output.manifest.as_deref(),
        Some(r#"{"packageRefs":["Shop::Core"], "rbiRefs":["rbi/money.rbi"]}"#)
    );
    let parsed = manifest(&output.manifest);
    assert_eq!(parsed.package_refs, vec![CORE.to_string()]);
    assert_eq!(parsed.rbi_refs, vec![LEGACY_STUB.to_string()]);
}

#[test]
fn test_export_partition() {
    let (graph, db) = shop();
    let output = generate(&graph, &db, CART);

    let stub = output.stub.as_deref().unwrap();
    let test_stub = output.test_stub.as_deref().unwrap();
    assert!(!stub.contains("Test::"));
    assert_eq!(
        test_stub,
        "# typed: true

module Test::Shop::Cart::CartFactory
  sig {returns(Shop::Cart::Cart)}
  def self.build; end
end
"
    );
    assert_eq!(output.test_manifest, output.manifest);
}

#[test]
fn test_closure_soundness() {
    let (graph, db) = shop();
    let packages = [CORE, CART, "Test::Shop::Cart"];

    let cart = generate(&graph, &db, CART);
    let cart_manifest = manifest(&cart.manifest);
    assert_references_resolved(
        cart.stub.as_deref().unwrap(),
        &[CART, "Test::Shop::Cart"],
        &packages,
        &cart_manifest,
    );
    assert_references_resolved(
        cart.test_stub.as_deref().unwrap(),
        &[CART, "Test::Shop::Cart"],
        &packages,
        &manifest(&cart.test_manifest),
    );

    let core = generate(&graph, &db, CORE);
    assert_references_resolved(
        core.stub.as_deref().unwrap(),
        &[CORE],
        &packages,
        &manifest(&core.manifest),
    );
}

#[test]
fn test_completeness_and_no_duplicates() {
    let (graph, db) = shop();
    let output = generate(&graph, &db, CART);
    let stub = output.stub.as_deref().unwrap();

    assert_no_duplicate_declarations(stub);
    for name in ["Shop::Cart::Cart", "Shop::Cart::Bag", "Shop::Cart::Item"] {
        assert_declared_once(stub, name);
    }
    assert!(!stub.contains("class Shop::Core"));
}

#[test]
fn test_unreferenced_symbols_are_left_out() {
    let (graph, db) = shop();
    let output = generate(&graph, &db, CORE);
    let stub = output.stub.as_deref().unwrap();

    assert!(!stub.contains("Internal"));
    assert!(!stub.contains("class Shop::Core::Color::Red"));
}
