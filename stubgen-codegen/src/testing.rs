//! Shared fixtures for emitter tests.

use stubgen_schema::{Document, Operation, PathItem, Primitive, SchemaDefinition, SchemaNode};

use crate::{
    EmitContext, Emitter, Language, NamingConvention, Result, TypeMapper,
    builder::CodeBuilder,
    generation::generated_header,
    language::keep_as_is,
};

/// A small widget service: two operations, five schemas, one route without
/// a POST body.
pub fn widget_document() -> Document {
    let widget = SchemaDefinition::new("Widget")
        .required_property("name", SchemaNode::string().with_title("Display name"))
        .required_property("count", SchemaNode::integer())
        .property("note", SchemaNode::string().with_title("Free-form note"))
        .property("labels", SchemaNode::map(SchemaNode::string()));

    let list_request = SchemaDefinition::new("ListWidgetsRequest")
        .property("filter", SchemaNode::string())
        .property("limit", SchemaNode::integer().with_title("Page size"));

    let list_response = SchemaDefinition::new("ListWidgetsResponse")
        .required_property("widgets", SchemaNode::array(SchemaNode::reference("Widget")))
        .required_property("total", SchemaNode::integer())
        .property("next_page", SchemaNode::string());

    let get_request =
        SchemaDefinition::new("GetWidgetRequest").required_property("id", SchemaNode::string());

    let get_response =
        SchemaDefinition::new("GetWidgetResponse").property("widget", SchemaNode::reference("Widget"));

    let health = PathItem {
        post: None,
        other_methods: vec!["get".to_string()],
    };

    Document::builder("https://api.example.com/widgets.json")
        .schema(widget)
        .schema(list_response)
        .schema(list_request)
        .schema(get_response)
        .schema(get_request)
        .operation(Operation::new("/widgets/list", "ListWidgets").with_summary("List all widgets"))
        .path("/health", health)
        .operation(Operation::new("/widgets/get", "GetWidget"))
        .build()
        .expect("widget fixture is valid")
}

/// A document with no routes and no schemas.
pub fn empty_document() -> Document {
    Document::builder("empty.json")
        .build()
        .expect("empty fixture is valid")
}

/// Spells kinds out (`integer`, `array<T>`, `map<T>`) so engine tests do not
/// depend on a real language crate.
pub struct CommentTypes;

impl TypeMapper for CommentTypes {
    fn language(&self) -> Language {
        Language::Python
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        primitive.as_str()
    }

    fn map_array(&self, item: &str) -> String {
        format!("array<{item}>")
    }

    fn map_map(&self, value: &str) -> String {
        format!("map<{value}>")
    }
}

static COMMENT_NAMING: NamingConvention = NamingConvention {
    field_to_name: keep_as_is,
    operation_to_name: keep_as_is,
    reserved_words: &[],
    escape_reserved: keep_as_is,
};

/// Writes every schema and operation as a comment line.
pub struct CommentEmitter;

impl CommentEmitter {
    fn header(ctx: &EmitContext<'_>) -> CodeBuilder {
        let mut builder = CodeBuilder::python();
        builder
            .push_raw(&generated_header("#", ctx.source()))
            .push_blank();
        builder
    }
}

impl Emitter for CommentEmitter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &CommentTypes
    }

    fn naming(&self) -> &NamingConvention {
        &COMMENT_NAMING
    }

    fn model_filename(&self, module: &str) -> String {
        format!("{module}_model.txt")
    }

    fn client_filename(&self, module: &str) -> String {
        format!("{module}_client.txt")
    }

    fn emit_model(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        for schema in ctx.schemas() {
            builder.push_comment("#", &format!("{}: {}", schema.name, ctx.example(schema)?));
        }
        Ok(builder.build())
    }

    fn emit_client(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        for resolved in ctx.operations() {
            let op = resolved.operation;
            builder.push_comment("#", &format!("{} {}", op.operation_id, op.path));
        }
        Ok(builder.build())
    }
}
