//! Naming conventions for different programming languages.

/// Language-specific naming conventions.
///
/// Defines how schema field names and operation ids become identifiers, and
/// how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a schema field name (e.g., "userName" -> "user_name" in Python)
    pub field_to_name: fn(&str) -> String,
    /// Transform an operation id into a callable name
    pub operation_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "import" -> "import_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Render a schema identifier in the language's idiomatic form.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }

    /// Render an operation id as a callable name.
    pub fn operation_name(&self, operation_id: &str) -> String {
        let transformed = (self.operation_to_name)(operation_id);
        self.safe_name(&transformed)
    }
}

/// Identity transform for languages that keep schema names verbatim.
pub fn keep_as_is(name: &str) -> String {
    name.to_string()
}

#[cfg(test)]
mod tests {
    use stubgen_core::{capitalize_first, to_snake_case};

    use super::*;

    fn escape_with_underscore(name: &str) -> String {
        format!("{}_", name)
    }

    const SNAKE: NamingConvention = NamingConvention {
        field_to_name: to_snake_case,
        operation_to_name: to_snake_case,
        reserved_words: &["class", "import"],
        escape_reserved: escape_with_underscore,
    };

    const EXPORTED: NamingConvention = NamingConvention {
        field_to_name: capitalize_first,
        operation_to_name: capitalize_first,
        reserved_words: &[],
        escape_reserved: keep_as_is,
    };

    #[test]
    fn test_field_name() {
        assert_eq!(SNAKE.field_name("nextPage"), "next_page");
        assert_eq!(EXPORTED.field_name("nextPage"), "NextPage");
    }

    #[test]
    fn test_reserved_words_escaped_after_transform() {
        assert!(SNAKE.is_reserved("import"));
        assert_eq!(SNAKE.operation_name("Import"), "import_");
        assert_eq!(SNAKE.safe_name("widget"), "widget");
    }

    #[test]
    fn test_escaped_names_stay_stable() {
        let once = SNAKE.field_name("class");
        assert_eq!(once, "class_");
        assert_eq!(SNAKE.field_name(&once), once);
    }

    #[test]
    fn test_keep_as_is() {
        assert_eq!(keep_as_is("ListWidgets"), "ListWidgets");
    }
}
