//! Domain constants: reserved member names and the fixed text markers used
//! by generated stubs.

/// Prefix of internally reserved (unique) names. Members with such names are
/// never rendered.
pub const UNIQUE_NAME_PREFIX: &str = "<U ";

/// Prefix of toolchain-internal names (test suites, static initializers).
pub const INTERNAL_NAME_PREFIX: &str = "<";

/// Member link from a class to its singleton class.
pub const SINGLETON: &str = "<singleton>";

/// Type member every singleton class carries for its attached class.
pub const ATTACHED_CLASS: &str = "<AttachedClass>";

/// Member link from a singleton class back to its attached class.
pub const ATTACHED: &str = "<attached>";

/// Name of the constructor method.
pub const INITIALIZE: &str = "initialize";

/// Name of the synthesized static initializer.
pub const STATIC_INIT: &str = "<static-init>";

/// Reserved method listing the modules whose class methods a module mixes in.
pub const MIXES_IN_CLASS_METHODS: &str = "<mixes_in_class_methods>";

/// Accessor generated on the singleton class of a sealed class.
pub const SEALED_SUBCLASSES: &str = "sealed_subclasses";

/// Parameter name of a forwarding (`...`) parameter.
pub const FORWARD_ARGS: &str = "...";

/// Marker the resolver puts at the start of the first parameter name of a
/// method generated from a delegation declaration.
pub const DELEGATOR: &str = "def_delegator";

/// Plural form of [`DELEGATOR`].
pub const DELEGATORS: &str = "def_delegators";

/// Prefix of class variable names.
pub const CLASS_VARIABLE_PREFIX: &str = "@@";

/// Prefix of instance variable names.
pub const INSTANCE_VARIABLE_PREFIX: &str = "@";

/// Placeholder used for every default value and unsafe-typed declaration.
pub const UNSAFE_NIL: &str = "T.unsafe(nil)";

/// Keywords that introduce a struct-like property declaration.
pub const PROP_KEYWORDS: &[&str] = &["prop", "const"];

/// Keywords that introduce a record (flat-file) field declaration.
pub const RECORD_FIELD_KEYWORDS: &[&str] = &["field", "from", "pattern"];

/// Record field keywords that may also be followed directly by `(`.
pub const RECORD_FIELD_CALL_KEYWORDS: &[&str] = &["pattern"];
