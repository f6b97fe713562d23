use indexmap::IndexMap;

use crate::base::{Loc, Name};

use super::types::Type;

/// Unique identifier for a symbol in the arena.
/// Uses u32 for compact storage (supports ~4 billion symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// The global root scope. Every owner chain ends here.
    pub const ROOT: SymbolId = SymbolId(0);

    /// Create a new SymbolId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// A node of the symbol graph.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: Name,
    /// Enclosing scope. The root is its own owner.
    pub owner: SymbolId,
    pub loc: Option<Loc>,
    pub data: SymbolData,
}

/// Kind-specific payload of a [`Symbol`].
#[derive(Debug, Clone)]
pub enum SymbolData {
    Class(ClassData),
    Method(MethodData),
    Field(FieldData),
    /// Generic parameter of a class (`type_member` / `type_template`).
    TypeMember(TypeMemberData),
    /// Generic parameter of a method (`type_parameters`).
    TypeArgument,
}

impl Symbol {
    pub fn as_class(&self) -> Option<&ClassData> {
        match &self.data {
            SymbolData::Class(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodData> {
        match &self.data {
            SymbolData::Method(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldData> {
        match &self.data {
            SymbolData::Field(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_type_member(&self) -> Option<&TypeMemberData> {
        match &self.data {
            SymbolData::TypeMember(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.data, SymbolData::Class(_))
    }

    /// True for singleton (meta) classes.
    pub fn is_singleton_class(&self) -> bool {
        self.as_class().is_some_and(|class| class.attached.is_some())
    }
}

/// A class or module.
#[derive(Debug, Clone, Default)]
pub struct ClassData {
    pub is_module: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_interface: bool,
    pub is_sealed: bool,
    pub superclass: Option<SymbolId>,
    /// Included (or, on a singleton class, extended) modules in declaration order.
    pub mixins: Vec<SymbolId>,
    pub type_members: Vec<SymbolId>,
    /// Members by name, in declaration order.
    pub members: IndexMap<Name, SymbolId>,
    /// The singleton class holding this class's class-level members.
    pub singleton: Option<SymbolId>,
    /// For a singleton class: the class it is attached to.
    pub attached: Option<SymbolId>,
}

/// Method modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodFlags {
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_overridable: bool,
    pub is_override: bool,
    pub is_private: bool,
    pub is_protected: bool,
}

/// Per-parameter markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterFlags {
    pub is_keyword: bool,
    pub is_repeated: bool,
    pub is_block: bool,
    pub is_default: bool,
    /// Block parameter synthesized for every method; never rendered.
    pub is_synthetic_block: bool,
}

/// A formal parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: Name,
    pub ty: Option<Type>,
    pub flags: ParameterFlags,
}

impl Parameter {
    /// Required positional parameter.
    pub fn positional(name: impl Into<Name>, ty: Option<Type>) -> Self {
        Self {
            name: name.into(),
            ty,
            flags: ParameterFlags::default(),
        }
    }

    /// Keyword parameter, optionally with a default value.
    pub fn keyword(name: impl Into<Name>, ty: Option<Type>, has_default: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            flags: ParameterFlags {
                is_keyword: true,
                is_default: has_default,
                ..ParameterFlags::default()
            },
        }
    }

    /// The block parameter every method carries.
    pub fn synthetic_block() -> Self {
        Self {
            name: Name::new("<blk>"),
            ty: None,
            flags: ParameterFlags {
                is_block: true,
                is_synthetic_block: true,
                ..ParameterFlags::default()
            },
        }
    }

    pub fn with_flags(mut self, flags: ParameterFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A method.
#[derive(Debug, Clone, Default)]
pub struct MethodData {
    pub flags: MethodFlags,
    pub has_sig: bool,
    /// Method-level generic parameters ([`SymbolData::TypeArgument`] symbols).
    pub type_arguments: Vec<SymbolId>,
    pub parameters: Vec<Parameter>,
    pub result_type: Option<Type>,
}

impl MethodData {
    /// Method with the given declared parameters plus the synthetic block parameter.
    pub fn new(parameters: Vec<Parameter>) -> Self {
        let mut parameters = parameters;
        parameters.push(Parameter::synthetic_block());
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Attach a signature with the given return type.
    pub fn with_sig(mut self, result_type: Type) -> Self {
        self.has_sig = true;
        self.result_type = Some(result_type);
        self
    }

    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Storage class of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `@x`
    Instance,
    /// A constant (`Foo::BAR`).
    Static,
    /// `@@x`
    ClassVariable,
}

#[derive(Debug, Clone)]
pub struct FieldData {
    pub kind: FieldKind,
    pub is_type_alias: bool,
    pub result_type: Option<Type>,
}

impl FieldData {
    pub fn new(kind: FieldKind, result_type: Option<Type>) -> Self {
        Self {
            kind,
            is_type_alias: false,
            result_type,
        }
    }

    pub fn type_alias(result_type: Type) -> Self {
        Self {
            kind: FieldKind::Static,
            is_type_alias: true,
            result_type: Some(result_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variance {
    Covariant,
    #[default]
    Invariant,
    Contravariant,
}

#[derive(Debug, Clone, Default)]
pub struct TypeMemberData {
    pub variance: Variance,
    /// Set when the member is declared `fixed:`; renders the bound instead of a variance.
    pub fixed: Option<Type>,
    pub lower_bound: Option<Type>,
    pub upper_bound: Option<Type>,
}
