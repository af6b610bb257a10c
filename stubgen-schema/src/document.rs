//! The parsed API document the generation engine reads from.

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::{Error, Operation, PathItem, Result, SchemaDefinition, SourceContext, openapi};

/// A validated, read-only API document.
///
/// Construction goes through [`DocumentBuilder`] (or the loaders, which use
/// it), so every `Document` satisfies two invariants: required field names
/// exist among their schema's properties, and operation ids are unique.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    paths: IndexMap<String, PathItem>,
    schemas: IndexMap<String, SchemaDefinition>,
}

impl Document {
    /// Start building a document; `source` is the locator named in
    /// generated headers.
    pub fn builder(source: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder {
            source: source.into(),
            paths: IndexMap::new(),
            schemas: IndexMap::new(),
        }
    }

    /// Load an OpenAPI 3 document from a local file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, everything else
    /// as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let ctx = SourceContext::new(content, path.display().to_string());

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext, "yaml" | "yml"));
        if is_yaml {
            openapi::parse_yaml(&ctx)
        } else {
            openapi::parse_json(&ctx)
        }
    }

    /// Parse an OpenAPI 3 document from JSON text.
    pub fn from_json_str(content: &str, source: &str) -> Result<Self> {
        openapi::parse_json(&SourceContext::new(content, source))
    }

    /// Parse an OpenAPI 3 document from YAML text.
    pub fn from_yaml_str(content: &str, source: &str) -> Result<Self> {
        openapi::parse_yaml(&SourceContext::new(content, source))
    }

    /// The document locator.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Route paths and what they declare, in document order.
    pub fn paths(&self) -> &IndexMap<String, PathItem> {
        &self.paths
    }

    /// Named schema definitions, in document order.
    pub fn schemas(&self) -> &IndexMap<String, SchemaDefinition> {
        &self.schemas
    }

    /// Look up a schema definition by name.
    pub fn schema(&self, name: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(name)
    }

    /// Check if a schema definition exists.
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// All POST operations, in document order.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.paths.values().filter_map(|item| item.post.as_ref())
    }
}

/// Builder for [`Document`].
#[derive(Debug)]
pub struct DocumentBuilder {
    source: String,
    paths: IndexMap<String, PathItem>,
    schemas: IndexMap<String, SchemaDefinition>,
}

impl DocumentBuilder {
    /// Add a schema definition, replacing any previous one with the same name.
    pub fn schema(mut self, definition: SchemaDefinition) -> Self {
        self.schemas.insert(definition.name.clone(), definition);
        self
    }

    /// Add a POST operation under its own path.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.paths
            .insert(operation.path.clone(), PathItem::post(operation));
        self
    }

    /// Add a route with an explicit path item.
    pub fn path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.paths.insert(path.into(), item);
        self
    }

    /// Validate and finish the document.
    pub fn build(self) -> Result<Document> {
        for definition in self.schemas.values() {
            if let Some(field) = definition.dangling_required() {
                return Err(Box::new(Error::UnknownRequiredField {
                    schema: definition.name.clone(),
                    field: field.to_string(),
                }));
            }
        }

        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        for (path, item) in &self.paths {
            let Some(op) = &item.post else { continue };
            if let Some(first_path) = seen.insert(op.operation_id.as_str(), path.as_str()) {
                return Err(Box::new(Error::DuplicateOperation {
                    operation_id: op.operation_id.clone(),
                    first_path: first_path.to_string(),
                    second_path: path.clone(),
                }));
            }
        }

        debug!(
            source = %self.source,
            schemas = self.schemas.len(),
            paths = self.paths.len(),
            "document built"
        );

        Ok(Document {
            source: self.source,
            paths: self.paths,
            schemas: self.schemas,
        })
    }
}
