//! Rendering options

/// Layout and well-known class settings for the interface renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Maximum line width before a signature or `def` is broken up
    pub max_line_width: usize,
    /// Signatures with more parameters than this are always multi-line
    pub max_sig_params: usize,
    /// First line of every stub
    pub header: String,
    /// Base class of struct-like classes
    pub struct_base: String,
    /// Base class of enumerations
    pub enum_base: String,
    /// Base class of records (flat files)
    pub record_base: String,
    /// Class whose presence in a union makes it nilable
    pub nil_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            max_line_width: 80,
            max_sig_params: 4,
            header: "# typed: true".to_string(),
            struct_base: "T::Struct".to_string(),
            enum_base: "T::Enum".to_string(),
            record_base: "Opus::Flatfiles::Record".to_string(),
            nil_class: "NilClass".to_string(),
        }
    }
}

impl RenderOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_width * level)
    }
}
