//! Canonical text for resolved types.
//!
//! The printer is pure: it only reads the graph. The renderer feeds every
//! printed type to the closure separately, through the same
//! [`Type::for_each_symbol`] traversal.

use crate::graph::{LiteralKind, SymbolGraph, SymbolId, Type};

pub struct TypePrinter<'a> {
    graph: &'a SymbolGraph,
    /// Members of a union equal to this class turn it into `T.nilable`.
    nil_class: Option<SymbolId>,
}

impl<'a> TypePrinter<'a> {
    pub fn new(graph: &'a SymbolGraph, nil_class: Option<SymbolId>) -> Self {
        Self { graph, nil_class }
    }

    pub fn show(&self, ty: &Type) -> String {
        match ty {
            Type::Untyped => "T.untyped".to_string(),
            Type::Void => "void".to_string(),
            Type::Alias(symbol) | Type::ClassRef(symbol) => self.graph.full_name(*symbol),
            Type::And(..) => {
                let mut parts = Vec::new();
                flatten_and(ty, &mut parts);
                format!("T.all({})", self.show_list(parts))
            }
            Type::Or(..) => self.show_union(ty),
            Type::Applied { class, targs } => self.show_applied(*class, targs),
            Type::Literal { kind, value } => show_literal(*kind, value),
            Type::Meta(wrapped) => format!("<Type: {}>", self.show(wrapped)),
            Type::SelfType => "T.self_type".to_string(),
            Type::SelfTypeParam(definition) | Type::BoundedParam { definition, .. } => {
                self.graph.name(*definition).to_string()
            }
            Type::Shape { keys, values } => self.show_shape(keys, values),
            Type::Tuple(elems) => format!("[{}]", self.show_list(elems)),
            Type::TypeVariable(name) => format!("T.type_parameter(:{name})"),
            Type::UnresolvedApplied { symbol, targs, .. } => self.show_applied(*symbol, targs),
            Type::UnresolvedClassRef { scope, names } => {
                let names = names
                    .iter()
                    .map(|name| name.as_str())
                    .collect::<Vec<_>>()
                    .join("::");
                if scope.is_root() {
                    names
                } else {
                    format!("{}::{names}", self.graph.full_name(*scope))
                }
            }
        }
    }

    fn show_list<'t>(&self, types: impl IntoIterator<Item = &'t Type>) -> String {
        types
            .into_iter()
            .map(|ty| self.show(ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn show_applied(&self, class: SymbolId, targs: &[Type]) -> String {
        let base = self.graph.full_name(class);
        if targs.is_empty() {
            base
        } else {
            format!("{base}[{}]", self.show_list(targs))
        }
    }

    fn show_union(&self, ty: &Type) -> String {
        let mut parts = Vec::new();
        flatten_or(ty, &mut parts);

        let before = parts.len();
        parts.retain(|part| !self.is_nil(part));
        let nilable = parts.len() != before;

        let inner = match parts.as_slice() {
            [] => return self.nil_name(),
            [single] => self.show(single),
            _ => format!("T.any({})", self.show_list(parts.iter().copied())),
        };
        if nilable {
            format!("T.nilable({inner})")
        } else {
            inner
        }
    }

    fn show_shape(&self, keys: &[Type], values: &[Type]) -> String {
        let entries = keys
            .iter()
            .zip(values)
            .map(|(key, value)| match key {
                Type::Literal {
                    kind: LiteralKind::Symbol,
                    value: name,
                } => format!("{name}: {}", self.show(value)),
                Type::Literal {
                    kind: LiteralKind::String,
                    value: name,
                } => format!("{} => {}", quote(name), self.show(value)),
                other => format!("{} => {}", self.show(other), self.show(value)),
            })
            .collect::<Vec<_>>();
        if entries.is_empty() {
            "{}".to_string()
        } else {
            format!("{{{}}}", entries.join(", "))
        }
    }

    fn is_nil(&self, ty: &Type) -> bool {
        matches!((ty, self.nil_class), (Type::ClassRef(symbol), Some(nil)) if *symbol == nil)
    }

    fn nil_name(&self) -> String {
        self.nil_class
            .map(|nil| self.graph.full_name(nil))
            .unwrap_or_else(|| "NilClass".to_string())
    }
}

fn flatten_or<'t>(ty: &'t Type, out: &mut Vec<&'t Type>) {
    match ty {
        Type::Or(left, right) => {
            flatten_or(left, out);
            flatten_or(right, out);
        }
        other => out.push(other),
    }
}

fn flatten_and<'t>(ty: &'t Type, out: &mut Vec<&'t Type>) {
    match ty {
        Type::And(left, right) => {
            flatten_and(left, out);
            flatten_and(right, out);
        }
        other => out.push(other),
    }
}

fn show_literal(kind: LiteralKind, value: &str) -> String {
    match kind {
        LiteralKind::Integer => format!("Integer({value})"),
        LiteralKind::Float => format!("Float({value})"),
        LiteralKind::String => format!("String({})", quote(value)),
        LiteralKind::Symbol => format!("Symbol(:{value})"),
        LiteralKind::True => "TrueClass".to_string(),
        LiteralKind::False => "FalseClass".to_string(),
    }
}

/// Double-quoted string literal; only `"` and `\` are escaped.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
