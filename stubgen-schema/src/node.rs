//! Type descriptions attached to schema properties.

use std::fmt;

/// Scalar schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Boolean,
    Number,
    Integer,
}

impl Primitive {
    /// Get the schema type name as written in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Boolean => "boolean",
            Primitive::Number => "number",
            Primitive::Integer => "integer",
        }
    }

    /// Parse a document type tag into a primitive, if it is one.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Primitive::String),
            "boolean" => Some(Primitive::Boolean),
            "number" => Some(Primitive::Number),
            "integer" => Some(Primitive::Integer),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a [`SchemaNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    /// A scalar value.
    Primitive(Primitive),
    /// A sequence of the item type.
    Array(Box<SchemaNode>),
    /// A string-keyed mapping to the value type.
    Map(Box<SchemaNode>),
    /// A reference to a named schema definition.
    Reference(String),
    /// Any type tag outside the supported kinds, kept verbatim so that type
    /// mapping can reject it with the offending tag.
    Unsupported(String),
}

impl SchemaKind {
    /// Short tag describing the kind (used in diagnostics).
    pub fn tag(&self) -> &str {
        match self {
            SchemaKind::Primitive(p) => p.as_str(),
            SchemaKind::Array(_) => "array",
            SchemaKind::Map(_) => "object-map",
            SchemaKind::Reference(_) => "reference",
            SchemaKind::Unsupported(tag) => tag,
        }
    }
}

/// An anonymous type description, owned by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNode {
    pub kind: SchemaKind,
    pub title: Option<String>,
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        Self { kind, title: None }
    }

    pub fn string() -> Self {
        Self::new(SchemaKind::Primitive(Primitive::String))
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Primitive(Primitive::Boolean))
    }

    pub fn number() -> Self {
        Self::new(SchemaKind::Primitive(Primitive::Number))
    }

    pub fn integer() -> Self {
        Self::new(SchemaKind::Primitive(Primitive::Integer))
    }

    pub fn array(item: SchemaNode) -> Self {
        Self::new(SchemaKind::Array(Box::new(item)))
    }

    pub fn map(value: SchemaNode) -> Self {
        Self::new(SchemaKind::Map(Box::new(value)))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(SchemaKind::Reference(name.into()))
    }

    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::new(SchemaKind::Unsupported(tag.into()))
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_from_tag() {
        assert_eq!(Primitive::from_tag("string"), Some(Primitive::String));
        assert_eq!(Primitive::from_tag("integer"), Some(Primitive::Integer));
        assert_eq!(Primitive::from_tag("object"), None);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(SchemaNode::boolean().kind.tag(), "boolean");
        assert_eq!(SchemaNode::array(SchemaNode::string()).kind.tag(), "array");
        assert_eq!(SchemaNode::map(SchemaNode::string()).kind.tag(), "object-map");
        assert_eq!(SchemaNode::reference("Widget").kind.tag(), "reference");
        assert_eq!(SchemaNode::unsupported("tuple").kind.tag(), "tuple");
    }

    #[test]
    fn test_empty_title_is_absent() {
        assert_eq!(SchemaNode::string().with_title("").title(), None);
        assert_eq!(
            SchemaNode::string().with_title("Display name").title(),
            Some("Display name")
        );
    }
}
