//! Go-specific naming conventions.

use stubgen_codegen::NamingConvention;
use stubgen_core::capitalize_first;

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
///
/// Names are exported by uppercasing the first character only, so keywords
/// can only be hit by identifiers that do not start with a letter.
pub const GO_NAMING: NamingConvention = NamingConvention {
    field_to_name: capitalize_first,
    operation_to_name: capitalize_first,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_go_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_field_name() {
        assert_eq!(GO_NAMING.field_name("name"), "Name");
        assert_eq!(GO_NAMING.field_name("nextPage"), "NextPage");
        assert_eq!(GO_NAMING.field_name("next_page"), "Next_page");
        assert_eq!(GO_NAMING.field_name("ID"), "ID");
    }

    #[test]
    fn test_go_operation_name() {
        assert_eq!(GO_NAMING.operation_name("listWidgets"), "ListWidgets");
        assert_eq!(GO_NAMING.operation_name("ListWidgets"), "ListWidgets");
    }

    #[test]
    fn test_go_reserved_words() {
        assert!(GO_NAMING.is_reserved("func"));
        assert!(!GO_NAMING.is_reserved("Func"));
        assert_eq!(GO_NAMING.safe_name("type"), "type_");
    }
}
