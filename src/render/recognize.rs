//! Pattern recognizers for declarative forms the resolver lowered away.
//!
//! Each recognizer looks at one resolved symbol and, where needed, its
//! captured declaration text. Text matching is lexical (a leading keyword),
//! so a change in upstream declaration syntax can defeat it.

use crate::base::{Name, constants};
use crate::graph::{SymbolGraph, SymbolId, Type};

use super::decl_lexer::{DeclToken, tokenize, words};

/// A property recovered from a struct initializer's keyword parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct StructProp {
    pub name: Name,
    pub ty: Option<Type>,
    pub has_default: bool,
}

/// How a method was generated from a delegation declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delegation {
    /// `def_delegator`: re-emitted verbatim.
    Single,
    /// `def_delegators`: one directive per target.
    Plural,
}

/// Properties declared by a struct initializer, in parameter order.
pub fn struct_props(graph: &SymbolGraph, initializer: SymbolId) -> Vec<StructProp> {
    let Some(method) = graph.symbol(initializer).as_method() else {
        return Vec::new();
    };
    method
        .parameters
        .iter()
        .filter(|param| param.flags.is_keyword && !param.flags.is_synthetic_block)
        .map(|param| StructProp {
            name: param.name.clone(),
            ty: param.ty.clone(),
            has_default: param.flags.is_default,
        })
        .collect()
}

/// Remove the getter and setter of property `name` from `methods`.
///
/// Returns true if the property is read-only (no setter was found).
pub fn take_accessors(graph: &SymbolGraph, methods: &mut Vec<SymbolId>, name: &str) -> bool {
    let setter = format!("{name}=");
    let mut is_const = true;
    methods.retain(|&method| {
        let method_name = graph.name(method).as_str();
        if method_name == setter {
            is_const = false;
            false
        } else {
            method_name != name
        }
    });
    is_const
}

/// Remove the backing instance field `@name` from `fields`.
pub fn take_backing_field(graph: &SymbolGraph, fields: &mut Vec<SymbolId>, name: &str) {
    let field_name = format!("{}{name}", constants::INSTANCE_VARIABLE_PREFIX);
    fields.retain(|&field| graph.name(field).as_str() != field_name);
}

/// A getter generated by a `prop`/`const` declaration.
pub fn is_prop_method(graph: &SymbolGraph, method: SymbolId) -> bool {
    if graph.name(method).ends_with('=') {
        return false;
    }
    graph
        .declaration_text(method)
        .is_some_and(|text| starts_with_keyword(text, constants::PROP_KEYWORDS, &[]))
}

/// A method generated by a record field declaration.
pub fn is_record_field_method(graph: &SymbolGraph, method: SymbolId) -> bool {
    if graph.name(method).ends_with('=') {
        return false;
    }
    graph.declaration_text(method).is_some_and(|text| {
        starts_with_keyword(
            text,
            constants::RECORD_FIELD_KEYWORDS,
            constants::RECORD_FIELD_CALL_KEYWORDS,
        )
    })
}

/// True if `text` starts with one of `keywords` followed by whitespace, or one
/// of `call_keywords` followed by `(`.
fn starts_with_keyword(text: &str, keywords: &[&str], call_keywords: &[&str]) -> bool {
    let tokens = tokenize(text);
    match tokens.as_slice() {
        [first, second, ..] if first.kind == DeclToken::Word => match second.kind {
            DeclToken::Whitespace => keywords.contains(&first.text),
            DeclToken::LParen => call_keywords.contains(&first.text),
            _ => false,
        },
        _ => false,
    }
}

/// Classify a method by the internal name of its first parameter.
pub fn delegation(first_parameter: &str) -> Option<Delegation> {
    if first_parameter.starts_with(constants::DELEGATORS) {
        Some(Delegation::Plural)
    } else if first_parameter.starts_with(constants::DELEGATOR) {
        Some(Delegation::Single)
    } else {
        None
    }
}

/// Receiver expression of a plural delegation: the first word after the
/// keyword (`def_delegators :@items, :size` gives `:@items`).
pub fn delegation_receiver(declaration: &str) -> Option<&str> {
    let mut words = words(declaration);
    words.next().filter(|keyword| *keyword == constants::DELEGATORS)?;
    words.next()
}
