//! Names of symbols and path segments.

use smol_str::SmolStr;

/// A symbol name. Short names are stored inline, so cloning is cheap.
pub type Name = SmolStr;

/// A fully-qualified name path, outermost segment first (`["Foo", "Bar"]`).
pub type NamePath = Vec<Name>;

/// Build a [`NamePath`] from `::`-separated text.
///
/// Empty segments are dropped, so a leading `::` is accepted.
pub fn name_path(path: &str) -> NamePath {
    path.split("::")
        .filter(|segment| !segment.is_empty())
        .map(Name::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_path_splits_segments() {
        assert_eq!(name_path("Foo::Bar"), vec![Name::new("Foo"), Name::new("Bar")]);
    }

    #[test]
    fn test_name_path_ignores_leading_separator() {
        assert_eq!(name_path("::Foo"), vec![Name::new("Foo")]);
    }

    #[test]
    fn test_name_path_empty() {
        assert!(name_path("").is_empty());
    }
}
