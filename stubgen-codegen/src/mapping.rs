//! Recursive schema-to-type mapping.
//!
//! [`TypeResolver`] is the single place where a [`SchemaNode`] becomes a
//! target-language type string. Model rendering and example rendering both
//! go through it, so an unsupported kind or a dangling reference fails the
//! same way wherever it is reached.

use stubgen_schema::{Document, SchemaDefinition, SchemaKind, SchemaNode};
use tracing::trace;

use crate::{Error, Result, TypeMapper};

/// Maps schema nodes using a language's [`TypeMapper`] and the document's
/// schema set for reference checks.
#[derive(Clone, Copy)]
pub struct TypeResolver<'a> {
    mapper: &'a dyn TypeMapper,
    document: &'a Document,
}

impl<'a> TypeResolver<'a> {
    pub fn new(mapper: &'a dyn TypeMapper, document: &'a Document) -> Self {
        Self { mapper, document }
    }

    /// Map a node to its type string.
    ///
    /// `location` names the node in diagnostics (e.g. `Widget.labels`);
    /// array items extend it with `[]` and map values with `{}`.
    pub fn map(&self, node: &SchemaNode, location: &str) -> Result<String> {
        let mapped = match &node.kind {
            SchemaKind::Primitive(primitive) => self.mapper.map_primitive(*primitive).to_string(),
            SchemaKind::Array(item) => {
                let item = self.map(item, &format!("{location}[]"))?;
                self.mapper.map_array(&item)
            }
            SchemaKind::Map(value) => {
                let value = self.map(value, &format!("{location}{{}}"))?;
                self.mapper.map_map(&value)
            }
            SchemaKind::Reference(name) => {
                self.check_reference(name, location)?;
                self.mapper.map_reference(name)
            }
            SchemaKind::Unsupported(tag) => {
                return Err(Box::new(Error::UnknownSchemaType {
                    kind: tag.clone(),
                    location: location.to_string(),
                }));
            }
        };
        trace!(location, mapped = %mapped, "mapped type");
        Ok(mapped)
    }

    /// Ensure `name` is a schema the document defines.
    pub fn check_reference(&self, name: &str, location: &str) -> Result<()> {
        if self.document.has_schema(name) {
            Ok(())
        } else {
            Err(Box::new(Error::MalformedReference {
                name: name.to_string(),
                location: location.to_string(),
            }))
        }
    }

    /// The aliased schema name when `definition` is a bare reference.
    pub fn alias_target<'d>(&self, definition: &'d SchemaDefinition) -> Result<Option<&'d str>> {
        match definition.alias.as_deref() {
            Some(target) => {
                self.check_reference(target, &definition.name)?;
                Ok(Some(target))
            }
            None => Ok(None),
        }
    }
}
