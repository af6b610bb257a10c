//! Go type mapper implementation.

use stubgen_codegen::{Language, TypeMapper};
use stubgen_schema::Primitive;

/// Go type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> Language {
        Language::Go
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::String => "string",
            Primitive::Boolean => "bool",
            Primitive::Number => "float64",
            Primitive::Integer => "int64",
        }
    }

    fn map_array(&self, item: &str) -> String {
        format!("[]{}", item)
    }

    fn map_map(&self, value: &str) -> String {
        format!("map[string]{}", value)
    }

    fn map_reference(&self, name: &str) -> String {
        // Schemas are passed by pointer
        format!("*{}", name)
    }
}
