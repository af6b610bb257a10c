//! Python-specific naming conventions.

use stubgen_codegen::NamingConvention;
use stubgen_core::to_snake_case;

fn escape_python_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Python naming conventions.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    // Fields and methods use snake_case
    field_to_name: to_snake_case,
    operation_to_name: to_snake_case,
    reserved_words: &[
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with",
        "yield",
    ],
    escape_reserved: escape_python_reserved,
};
