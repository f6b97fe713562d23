
use crate::graph::{GraphBuilder, MethodData, SymbolGraph, SymbolId, Type};
use crate::package::{Package, PackageDb};

/// Packages `App` and `Lib`. `App::Widget` returns a `Lib::Tool`; `App` also
/// has a test helper under `Test::App`.
fn two_packages() -> (SymbolGraph, PackageDb) {
    let mut builder = GraphBuilder::new();
    let lib = builder.add_module_path("Lib");
    let tool = builder.add_class(lib, "Tool");
    let app = builder.add_module_path("App");
    let widget = builder.add_class(app, "Widget");
    builder.add_method(widget, "tool", MethodData::new(vec![]).with_sig(Type::class(tool)));
    builder.add_module_path("Test::App::Helper");
    builder.add_class(SymbolId::ROOT, "Unused");

    let db = [
        Package::new("App")
            .with_export("App::Widget")
            .with_test_export("Test::App::Helper"),
        Package::new("Lib").with_export("Lib::Tool"),
    ]
    .into_iter()
    .collect();
    (builder.finish(), db)
}
