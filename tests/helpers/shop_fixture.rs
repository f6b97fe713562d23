//! A two-package shop used across the integration tests.
//!
//! - `Shop::Core` exports the struct `Price` and the enum `Color`.
//! - `Shop::Cart` exports `Cart` and `Bag`, depends on `Shop::Core` and on the
//!   legacy stub class `Money`, and has a test factory under `Test::Shop::Cart`.

use stubgen::base::FileKind;
use stubgen::graph::{
    FieldData, FieldKind, GraphBuilder, MethodData, Parameter, SymbolGraph, SymbolId, Type,
};
use stubgen::package::{Package, PackageDb};

pub const CORE: &str = "Shop::Core";
pub const CART: &str = "Shop::Cart";
pub const LEGACY_STUB: &str = "rbi/money.rbi";

pub fn shop() -> (SymbolGraph, PackageDb) {
    let mut builder = GraphBuilder::new();
    let payload = builder.add_file("<payload>/core.rbi", FileKind::Bundled);
    let legacy = builder.add_file(LEGACY_STUB, FileKind::LegacyStub);

    let string = builder.add_class(SymbolId::ROOT, "String");
    builder.declare_at(string, payload, "class String; end");
    let integer = builder.add_class(SymbolId::ROOT, "Integer");
    builder.declare_at(integer, payload, "class Integer; end");
    let nil = builder.add_class(SymbolId::ROOT, "NilClass");
    builder.declare_at(nil, payload, "class NilClass; end");
    let t = builder.add_module_path("T");
    let t_struct = builder.add_class(t, "Struct");
    let t_enum = builder.add_class(t, "Enum");
    let money = builder.add_class(SymbolId::ROOT, "Money");
    builder.declare_at(money, legacy, "class Money; end");

    // Shop::Core
    let core = builder.add_module_path(CORE);
    let price = builder.add_class(core, "Price");
    builder.set_superclass(price, t_struct);
    let nilable_string = Type::any(Type::class(string), Type::class(nil));
    builder.add_method(
        price,
        "initialize",
        MethodData::new(vec![
            Parameter::keyword("amount", Some(Type::class(integer)), false),
            Parameter::keyword("currency", Some(nilable_string.clone()), true),
        ]),
    );
    builder.add_method(price, "amount", MethodData::new(vec![]));
    builder.add_method(price, "currency", MethodData::new(vec![]));
    builder.add_method(
        price,
        "currency=",
        MethodData::new(vec![Parameter::positional("currency", None)]),
    );
    builder.add_field(
        price,
        "@amount",
        FieldData::new(FieldKind::Instance, Some(Type::class(integer))),
    );

    let color = builder.add_class(core, "Color");
    builder.set_superclass(color, t_enum);
    for value in ["Red", "Green"] {
        let class = builder.add_class(color, value);
        builder.set_superclass(class, color);
    }
    builder.add_module_path("Shop::Core::Internal::Secret");

    // Shop::Cart
    let cart_ns = builder.add_module_path(CART);
    let item = builder.add_class(cart_ns, "Item");
    let cart = builder.add_class(cart_ns, "Cart");
    builder.add_method(
        cart,
        "total",
        MethodData::new(vec![]).with_sig(Type::class(price)),
    );
    builder.add_method(
        cart,
        "add",
        MethodData::new(vec![Parameter::positional("item", Some(Type::class(item)))])
            .with_sig(Type::Void),
    );
    builder.add_method(
        cart,
        "discount",
        MethodData::new(vec![]).with_sig(Type::class(money)),
    );
    builder.add_method(
        cart,
        "label",
        MethodData::new(vec![]).with_sig(nilable_string),
    );
    builder.add_method(
        cart,
        "checkout",
        MethodData::new(
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .map(|name| Parameter::positional(name, Some(Type::class(integer))))
                .collect(),
        )
        .with_sig(Type::Void),
    );

    let bag = builder.add_class(cart_ns, "Bag");
    for name in ["size", "each"] {
        builder.add_method(
            bag,
            name,
            MethodData::new(vec![Parameter::positional(
                "def_delegators :@items, :size, :each",
                None,
            )]),
        );
    }

    let test_ns = builder.add_module_path("Test::Shop::Cart");
    let factory = builder.add_module(test_ns, "CartFactory");
    let factory_singleton = builder.singleton_of(factory);
    builder.add_method(
        factory_singleton,
        "build",
        MethodData::new(vec![]).with_sig(Type::class(cart)),
    );

    let db = [
        Package::new(CORE)
            .with_export("Shop::Core::Price")
            .with_export("Shop::Core::Color"),
        Package::new(CART)
            .with_export("Shop::Cart::Cart")
            .with_export("Shop::Cart::Bag")
            .with_export("Shop::Cart::NotYetWritten")
            .with_test_export("Test::Shop::Cart::CartFactory"),
    ]
    .into_iter()
    .collect();

    (builder.finish(), db)
}
