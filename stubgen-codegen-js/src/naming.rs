//! JavaScript-specific naming conventions.

use stubgen_codegen::{NamingConvention, language::keep_as_is};
use stubgen_core::lower_first;

/// JavaScript naming conventions.
///
/// Class method names may be reserved words, so nothing is escaped.
pub const JS_NAMING: NamingConvention = NamingConvention {
    field_to_name: keep_as_is,
    // Methods use camelCase
    operation_to_name: lower_first,
    reserved_words: &[],
    escape_reserved: keep_as_is,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_operation_name() {
        assert_eq!(JS_NAMING.operation_name("ListWidgets"), "listWidgets");
        assert_eq!(JS_NAMING.operation_name("listWidgets"), "listWidgets");
        assert_eq!(JS_NAMING.operation_name("Delete"), "delete");
    }

    #[test]
    fn test_js_field_name_is_identity() {
        assert_eq!(JS_NAMING.field_name("next_page"), "next_page");
        assert_eq!(JS_NAMING.field_name("NextPage"), "NextPage");
    }
}
