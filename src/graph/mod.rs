//! Resolved symbol graph: the read-only input to stub generation.
//!
//! Symbols live in one arena and refer to each other through [`SymbolId`]
//! handles (owner, superclass, mixins, type-embedded references). The graph is
//! built once with a [`GraphBuilder`] and never mutated afterwards, so it can be
//! shared by reference across worker threads.

mod builder;
mod symbol;
mod table;
mod types;

pub use builder::GraphBuilder;
pub use symbol::{
    ClassData, FieldData, FieldKind, MethodData, MethodFlags, Parameter, ParameterFlags, Symbol,
    SymbolData, SymbolId, TypeMemberData, Variance,
};
pub use table::SymbolGraph;
pub use types::{LiteralKind, Type};
