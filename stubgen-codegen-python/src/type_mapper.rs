//! Python type mapper implementation.

use stubgen_codegen::{Language, TypeMapper};
use stubgen_schema::Primitive;

/// Python type mapper using `typing` spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> Language {
        Language::Python
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::String => "str",
            Primitive::Boolean => "bool",
            Primitive::Number => "float",
            Primitive::Integer => "int",
        }
    }

    fn map_array(&self, item: &str) -> String {
        format!("List[{}]", item)
    }

    fn map_map(&self, value: &str) -> String {
        format!("Dict[str, {}]", value)
    }
}
