//! Named, object-shaped schema definitions.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::SchemaNode;

/// A named top-level schema.
///
/// Properties keep document order here; every consumer that needs a stable
/// order asks the resolver for it instead of relying on this map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition {
    pub name: String,
    pub properties: IndexMap<String, SchemaNode>,
    pub required: BTreeSet<String>,
    /// Set when the definition is a bare reference to another schema.
    pub alias: Option<String>,
    /// The declared type tag when the definition is not object-shaped.
    pub unsupported: Option<String>,
}

impl SchemaDefinition {
    /// Create an empty object definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
            required: BTreeSet::new(),
            alias: None,
            unsupported: None,
        }
    }

    /// Create a definition that stands for another named schema.
    pub fn alias(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: Some(target.into()),
            ..Self::new(name)
        }
    }

    /// Create a definition whose top-level type cannot be rendered as a model.
    pub fn unsupported(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            unsupported: Some(tag.into()),
            ..Self::new(name)
        }
    }

    /// Add an optional property.
    pub fn property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    /// Add a required property.
    pub fn required_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        let name = name.into();
        self.required.insert(name.clone());
        self.properties.insert(name, node);
        self
    }

    /// Check whether a field is listed as required.
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }

    /// First required name that has no matching property.
    pub(crate) fn dangling_required(&self) -> Option<&str> {
        self.required
            .iter()
            .find(|name| !self.properties.contains_key(*name))
            .map(String::as_str)
    }
}
