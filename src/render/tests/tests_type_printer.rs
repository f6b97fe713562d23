#![allow(clippy::unwrap_used)]

use super::super::*;
use crate::graph::{GraphBuilder, LiteralKind, SymbolId, TypeMemberData};

struct Fixture {
    graph: SymbolGraph,
    nil: SymbolId,
    string: SymbolId,
    integer: SymbolId,
    array: SymbolId,
}

fn fixture() -> Fixture {
    let mut builder = GraphBuilder::new();
    let nil = builder.add_class(SymbolId::ROOT, "NilClass");
    let string = builder.add_class(SymbolId::ROOT, "String");
    let integer = builder.add_class(SymbolId::ROOT, "Integer");
    let array = builder.add_class(SymbolId::ROOT, "Array");
    let app = builder.add_module_path("App");
    let boxed = builder.add_class(app, "Box");
    builder.add_type_member(boxed, "Elem", TypeMemberData::default());
    Fixture {
        graph: builder.finish(),
        nil,
        string,
        integer,
        array,
    }
}

fn show(fx: &Fixture, ty: &Type) -> String {
    TypePrinter::new(&fx.graph, Some(fx.nil)).show(ty)
}

#[test]
fn test_show_class_refs_use_full_names() {
    let fx = fixture();
    let boxed = fx.graph.lookup("App::Box").unwrap();
    assert_eq!(show(&fx, &Type::class(boxed)), "App::Box");
    assert_eq!(show(&fx, &Type::Untyped), "T.untyped");
    assert_eq!(show(&fx, &Type::SelfType), "T.self_type");
}

#[test]
fn test_show_nilable_union() {
    let fx = fixture();
    let ty = Type::any(Type::class(fx.string), Type::class(fx.nil));
    assert_eq!(show(&fx, &ty), "T.nilable(String)");
}

#[test]
fn test_show_nilable_multi_union() {
    let fx = fixture();
    let ty = Type::any(
        Type::class(fx.nil),
        Type::any(Type::class(fx.string), Type::class(fx.integer)),
    );
    assert_eq!(show(&fx, &ty), "T.nilable(T.any(String, Integer))");
}

#[test]
fn test_show_flattens_unions_and_intersections() {
    let fx = fixture();
    let union = Type::any(
        Type::any(Type::class(fx.string), Type::class(fx.integer)),
        Type::class(fx.array),
    );
    assert_eq!(show(&fx, &union), "T.any(String, Integer, Array)");

    let intersection = Type::all(Type::class(fx.string), Type::class(fx.integer));
    assert_eq!(show(&fx, &intersection), "T.all(String, Integer)");
}

#[test]
fn test_show_applied_and_tuple() {
    let fx = fixture();
    let applied = Type::applied(fx.array, vec![Type::class(fx.string)]);
    assert_eq!(show(&fx, &applied), "Array[String]");
    assert_eq!(show(&fx, &Type::applied(fx.array, vec![])), "Array");

    let tuple = Type::Tuple(vec![Type::class(fx.string), Type::class(fx.integer)]);
    assert_eq!(show(&fx, &tuple), "[String, Integer]");
}

#[test]
fn test_show_shape() {
    let fx = fixture();
    let shape = Type::Shape {
        keys: vec![
            Type::symbol_literal("name"),
            Type::literal(LiteralKind::String, "raw key"),
        ],
        values: vec![Type::class(fx.string), Type::class(fx.integer)],
    };
    assert_eq!(show(&fx, &shape), "{name: String, \"raw key\" => Integer}");
    let empty = Type::Shape {
        keys: vec![],
        values: vec![],
    };
    assert_eq!(show(&fx, &empty), "{}");
}

#[test]
fn test_show_literals() {
    let fx = fixture();
    let cases = [
        (Type::literal(LiteralKind::Integer, "1"), "Integer(1)"),
        (Type::literal(LiteralKind::Float, "1.5"), "Float(1.5)"),
        (Type::literal(LiteralKind::String, "x"), "String(\"x\")"),
        (Type::literal(LiteralKind::String, "a\"b\\c"), "String(\"a\\\"b\\\\c\")"),
        (Type::literal(LiteralKind::String, "tab\there"), "String(\"tab\there\")"),
        (Type::symbol_literal("x"), "Symbol(:x)"),
        (Type::literal(LiteralKind::True, "true"), "TrueClass"),
        (Type::literal(LiteralKind::False, "false"), "FalseClass"),
    ];
    for (ty, expected) in cases {
        assert_eq!(show(&fx, &ty), expected);
    }
}

#[test]
fn test_show_type_parameters() {
    let fx = fixture();
    let elem = fx.graph.lookup("App::Box::Elem").unwrap();
    assert_eq!(show(&fx, &Type::SelfTypeParam(elem)), "Elem");
    assert_eq!(
        show(&fx, &Type::TypeVariable(Name::new("U"))),
        "T.type_parameter(:U)"
    );
    let bounded = Type::BoundedParam {
        definition: elem,
        lower: Box::new(Type::Untyped),
        upper: Box::new(Type::class(fx.string)),
    };
    assert_eq!(show(&fx, &bounded), "Elem");
}

#[test]
fn test_show_meta_and_unresolved() {
    let fx = fixture();
    let meta = Type::Meta(Box::new(Type::class(fx.string)));
    assert_eq!(show(&fx, &meta), "<Type: String>");

    let app = fx.graph.lookup("App").unwrap();
    let unresolved = Type::UnresolvedClassRef {
        scope: app,
        names: vec![Name::new("Missing"), Name::new("Thing")],
    };
    assert_eq!(show(&fx, &unresolved), "App::Missing::Thing");

    let top = Type::UnresolvedClassRef {
        scope: SymbolId::ROOT,
        names: vec![Name::new("Gone")],
    };
    assert_eq!(show(&fx, &top), "Gone");
}
