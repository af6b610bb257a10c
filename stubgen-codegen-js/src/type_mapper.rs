//! JavaScript type mapper implementation.
//!
//! The spellings only appear in comments, so they describe the wire shape
//! rather than any runtime type.

use stubgen_codegen::{Language, TypeMapper};
use stubgen_schema::Primitive;

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptTypeMapper;

impl TypeMapper for JavaScriptTypeMapper {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::String => "string",
            Primitive::Boolean => "boolean",
            Primitive::Number => "float",
            Primitive::Integer => "int",
        }
    }

    fn map_array(&self, item: &str) -> String {
        format!("array[{}]", item)
    }

    fn map_map(&self, value: &str) -> String {
        format!("map[string, {}]", value)
    }
}

#[cfg(test)]
mod tests {
    use stubgen_codegen::{mapping::TypeResolver, testing::widget_document};
    use stubgen_schema::SchemaNode;

    use super::*;

    #[test]
    fn test_primitives() {
        let mapper = JavaScriptTypeMapper;
        assert_eq!(mapper.map_primitive(Primitive::Boolean), "boolean");
        assert_eq!(mapper.map_primitive(Primitive::Number), "float");
        assert_eq!(mapper.map_primitive(Primitive::Integer), "int");
    }

    #[test]
    fn test_containers() {
        let doc = widget_document();
        let types = TypeResolver::new(&JavaScriptTypeMapper, &doc);
        let node = SchemaNode::map(SchemaNode::array(SchemaNode::reference("Widget")));

        assert_eq!(types.map(&node, "x").unwrap(), "map[string, array[Widget]]");
    }
}
