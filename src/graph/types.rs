//! Resolved types.
//!
//! [`Type`] is a closed union. Several variants embed [`SymbolId`]s; the single
//! traversal [`Type::for_each_symbol`] enumerates them and is shared by the
//! closure walk and the type printer so the two cannot disagree about which
//! variants carry references.

use crate::base::Name;

use super::symbol::SymbolId;

/// Kind of a literal singleton type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    Float,
    String,
    Symbol,
    True,
    False,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// The dynamic type.
    Untyped,
    /// Return type of a method whose result is ignored.
    Void,
    /// Reference through a type alias or type member symbol.
    Alias(SymbolId),
    And(Box<Type>, Box<Type>),
    Or(Box<Type>, Box<Type>),
    /// Generic instantiation `class[targs]`.
    Applied { class: SymbolId, targs: Vec<Type> },
    ClassRef(SymbolId),
    Literal { kind: LiteralKind, value: Name },
    /// The type of a type expression.
    Meta(Box<Type>),
    SelfType,
    /// Reference to a generic parameter from inside its owner.
    SelfTypeParam(SymbolId),
    /// Record type; `keys[i]` maps to `values[i]`.
    Shape { keys: Vec<Type>, values: Vec<Type> },
    Tuple(Vec<Type>),
    /// Method-level generic parameter (`T.type_parameter(:U)`).
    TypeVariable(Name),
    UnresolvedApplied {
        class: SymbolId,
        symbol: SymbolId,
        targs: Vec<Type>,
    },
    UnresolvedClassRef { scope: SymbolId, names: Vec<Name> },
    /// Generic parameter with bounds.
    BoundedParam {
        definition: SymbolId,
        lower: Box<Type>,
        upper: Box<Type>,
    },
}

impl Type {
    pub fn class(symbol: SymbolId) -> Self {
        Type::ClassRef(symbol)
    }

    pub fn applied(class: SymbolId, targs: Vec<Type>) -> Self {
        Type::Applied { class, targs }
    }

    pub fn any(left: Type, right: Type) -> Self {
        Type::Or(Box::new(left), Box::new(right))
    }

    pub fn all(left: Type, right: Type) -> Self {
        Type::And(Box::new(left), Box::new(right))
    }

    pub fn literal(kind: LiteralKind, value: impl Into<Name>) -> Self {
        Type::Literal {
            kind,
            value: value.into(),
        }
    }

    /// Symbol literal, the usual shape key.
    pub fn symbol_literal(value: impl Into<Name>) -> Self {
        Self::literal(LiteralKind::Symbol, value)
    }

    /// Call `f` for every symbol referenced anywhere inside this type.
    pub fn for_each_symbol<F: FnMut(SymbolId)>(&self, f: &mut F) {
        match self {
            Type::Alias(symbol) | Type::ClassRef(symbol) | Type::SelfTypeParam(symbol) => {
                f(*symbol)
            }
            Type::And(left, right) | Type::Or(left, right) => {
                left.for_each_symbol(f);
                right.for_each_symbol(f);
            }
            Type::Applied { class, targs } => {
                f(*class);
                for targ in targs {
                    targ.for_each_symbol(f);
                }
            }
            Type::Meta(wrapped) => wrapped.for_each_symbol(f),
            Type::Shape { keys, values } => {
                for key in keys {
                    key.for_each_symbol(f);
                }
                for value in values {
                    value.for_each_symbol(f);
                }
            }
            Type::Tuple(elems) => {
                for elem in elems {
                    elem.for_each_symbol(f);
                }
            }
            Type::UnresolvedApplied {
                class,
                symbol,
                targs,
            } => {
                f(*class);
                f(*symbol);
                for targ in targs {
                    targ.for_each_symbol(f);
                }
            }
            // Bounds are not printed, so they are not references.
            Type::BoundedParam { definition, .. } => f(*definition),
            Type::Untyped
            | Type::Void
            | Type::Literal { .. }
            | Type::SelfType
            | Type::TypeVariable(_)
            | Type::UnresolvedClassRef { .. } => {}
        }
    }

    /// All referenced symbols in traversal order (duplicates kept).
    pub fn symbols(&self) -> Vec<SymbolId> {
        let mut symbols = Vec::new();
        self.for_each_symbol(&mut |symbol| symbols.push(symbol));
        symbols
    }
}
