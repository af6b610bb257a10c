//! OpenAPI 3 loader.
//!
//! Deserializes the subset of an OpenAPI document the generator reads
//! (POST operations and `components.schemas`) and lowers it into the
//! document model.

use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};
use tracing::{debug, warn};

use crate::{
    Document, Error, Operation, PathItem, Primitive, Result, SchemaDefinition, SchemaKind,
    SchemaNode, SourceContext,
};

const COMPONENT_PREFIX: &str = "#/components/schemas/";

const OTHER_METHODS: &[&str] = &["get", "put", "delete", "options", "head", "patch", "trace"];

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    openapi: Option<String>,
    #[serde(default)]
    paths: IndexMap<String, RawPathItem>,
    #[serde(default)]
    components: RawComponents,
}

#[derive(Debug, Default, Deserialize)]
struct RawComponents {
    #[serde(default)]
    schemas: IndexMap<String, RawSchema>,
}

#[derive(Debug, Deserialize)]
struct RawPathItem {
    post: Option<RawOperation>,
    #[serde(flatten)]
    rest: IndexMap<String, IgnoredAny>,
}

#[derive(Debug, Deserialize)]
struct RawOperation {
    #[serde(rename = "operationId")]
    operation_id: Option<String>,
    summary: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSchema {
    #[serde(rename = "$ref")]
    reference: Option<String>,
    #[serde(rename = "type")]
    ty: Option<RawType>,
    title: Option<String>,
    items: Option<Box<RawSchema>>,
    #[serde(rename = "additionalProperties")]
    additional_properties: Option<AdditionalProperties>,
    #[serde(default)]
    properties: IndexMap<String, RawSchema>,
    #[serde(default)]
    required: Vec<String>,
}

/// `type` is a string in OpenAPI 3.0 and may be a list in 3.1.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawType {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<RawSchema>),
}

impl RawSchema {
    /// The declared type tag, ignoring `null` in 3.1 type lists.
    fn type_tag(&self) -> Option<&str> {
        match self.ty.as_ref()? {
            RawType::Single(tag) => Some(tag),
            RawType::Multiple(tags) => tags.iter().map(String::as_str).find(|t| *t != "null"),
        }
    }
}

pub(crate) fn parse_json(ctx: &SourceContext) -> Result<Document> {
    let raw: RawDocument = serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e))?;
    lower(raw, ctx.filename())
}

pub(crate) fn parse_yaml(ctx: &SourceContext) -> Result<Document> {
    let raw: RawDocument = serde_yaml::from_str(ctx.src()).map_err(|e| ctx.yaml_error(e))?;
    lower(raw, ctx.filename())
}

fn lower(raw: RawDocument, source: &str) -> Result<Document> {
    let version = raw.openapi.unwrap_or_default();
    if !version.starts_with("3.") {
        return Err(Box::new(Error::UnsupportedVersion { version }));
    }

    let mut builder = Document::builder(source);

    for (path, item) in raw.paths {
        let item = lower_path_item(&path, item);
        builder = builder.path(path, item);
    }

    for (name, schema) in raw.components.schemas {
        builder = builder.schema(lower_definition(name, schema));
    }

    let doc = builder.build()?;
    debug!(
        version = %version,
        operations = doc.operations().count(),
        "loaded OpenAPI document"
    );
    Ok(doc)
}

fn lower_path_item(path: &str, raw: RawPathItem) -> PathItem {
    let other_methods = raw
        .rest
        .keys()
        .filter(|key| OTHER_METHODS.contains(&key.as_str()))
        .cloned()
        .collect();

    let post = match raw.post {
        Some(RawOperation {
            operation_id: Some(id),
            summary,
        }) if !id.is_empty() => Some(Operation {
            path: path.to_string(),
            operation_id: id,
            summary,
        }),
        Some(_) => {
            warn!(path, "POST operation has no operationId, skipping");
            None
        }
        None => None,
    };

    PathItem {
        post,
        other_methods,
    }
}

fn lower_definition(name: String, raw: RawSchema) -> SchemaDefinition {
    if let Some(reference) = &raw.reference {
        return SchemaDefinition::alias(name, reference_name(reference));
    }
    if let Some(tag) = raw.type_tag().filter(|tag| *tag != "object") {
        return SchemaDefinition::unsupported(name, tag);
    }

    let mut definition = SchemaDefinition::new(name);
    definition.required = raw.required.into_iter().collect();
    definition.properties = raw
        .properties
        .iter()
        .map(|(field, schema)| (field.clone(), lower_node(schema)))
        .collect();
    definition
}

fn lower_node(raw: &RawSchema) -> SchemaNode {
    let kind = match (&raw.reference, raw.type_tag()) {
        (Some(reference), _) => SchemaKind::Reference(reference_name(reference).to_string()),
        (None, Some("array")) => match &raw.items {
            Some(items) => SchemaKind::Array(Box::new(lower_node(items))),
            None => SchemaKind::Unsupported("array without items".to_string()),
        },
        (None, Some("object")) => match &raw.additional_properties {
            Some(AdditionalProperties::Schema(value)) => {
                SchemaKind::Map(Box::new(lower_node(value)))
            }
            _ => SchemaKind::Unsupported("object".to_string()),
        },
        (None, Some(tag)) => match Primitive::from_tag(tag) {
            Some(primitive) => SchemaKind::Primitive(primitive),
            None => SchemaKind::Unsupported(tag.to_string()),
        },
        (None, None) => SchemaKind::Unsupported("untyped".to_string()),
    };

    SchemaNode {
        kind,
        title: raw.title.clone(),
    }
}

/// Strip the components prefix from a `$ref`. References elsewhere are kept
/// whole and will not resolve against the schema set.
fn reference_name(reference: &str) -> &str {
    reference
        .strip_prefix(COMPONENT_PREFIX)
        .unwrap_or(reference)
}
