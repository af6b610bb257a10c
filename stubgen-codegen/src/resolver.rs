//! Deterministic ordering of schemas, fields and operations.
//!
//! Every emitter walks the lists produced here, never the document's own
//! maps, so output does not depend on document order.

use std::collections::BTreeSet;

use stubgen_schema::{Document, Operation, SchemaDefinition, SchemaNode};
use tracing::debug;

use crate::{Error, Result};

/// A schema property in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub node: &'a SchemaNode,
    pub required: bool,
}

/// Order a definition's properties: required fields ascending, then optional
/// fields ascending.
pub fn ordered_fields(definition: &SchemaDefinition) -> Vec<Field<'_>> {
    let mut fields: Vec<Field<'_>> = definition
        .properties
        .iter()
        .map(|(name, node)| Field {
            name: name.as_str(),
            node,
            required: definition.is_required(name),
        })
        .collect();
    fields.sort_by(|a, b| b.required.cmp(&a.required).then(a.name.cmp(b.name)));
    fields
}

/// A selected operation together with its request and response shapes.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOperation<'a> {
    pub operation: &'a Operation,
    pub request: &'a SchemaDefinition,
    pub response: &'a SchemaDefinition,
}

/// Everything an emitter walks, already ordered and filtered.
#[derive(Debug, Clone, Default)]
pub struct Resolved<'a> {
    pub schemas: Vec<&'a SchemaDefinition>,
    pub operations: Vec<ResolvedOperation<'a>>,
}

/// Orders and filters the contents of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    document: &'a Document,
}

impl<'a> Resolver<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// All schema definitions, ascending by name.
    pub fn sorted_schemas(&self) -> Vec<&'a SchemaDefinition> {
        let mut schemas: Vec<_> = self.document.schemas().values().collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// All renderable operations, ascending by path.
    pub fn sorted_operations(&self) -> Vec<&'a Operation> {
        let mut operations: Vec<_> = self.document.operations().collect();
        operations.sort_by(|a, b| a.path.cmp(&b.path));
        operations
    }

    /// Resolve the document against an operation allow-list.
    ///
    /// An empty `filter` selects every renderable operation. Every id in a
    /// non-empty filter must name a renderable operation, every selected
    /// operation must have its request and response definitions, and every
    /// schema must be object-shaped or an alias.
    pub fn resolve(&self, filter: &BTreeSet<String>) -> Result<Resolved<'a>> {
        let all = self.sorted_operations();

        if let Some(missing) = filter
            .iter()
            .find(|id| !all.iter().any(|op| &op.operation_id == *id))
        {
            return Err(Box::new(Error::UnknownOperation {
                name: missing.clone(),
            }));
        }

        let operations = all
            .into_iter()
            .filter(|op| filter.is_empty() || filter.contains(&op.operation_id))
            .map(|operation| -> Result<ResolvedOperation<'a>> {
                Ok(ResolvedOperation {
                    operation,
                    request: self.shape(operation, operation.request_schema())?,
                    response: self.shape(operation, operation.response_schema())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let schemas = self.sorted_schemas();
        if let Some((schema, tag)) = schemas
            .iter()
            .find_map(|s| s.unsupported.as_deref().map(|tag| (s, tag)))
        {
            return Err(Box::new(Error::UnknownSchemaType {
                kind: tag.to_string(),
                location: schema.name.clone(),
            }));
        }

        debug!(
            schemas = schemas.len(),
            operations = operations.len(),
            "resolved document"
        );

        Ok(Resolved {
            schemas,
            operations,
        })
    }

    fn shape(&self, operation: &Operation, name: String) -> Result<&'a SchemaDefinition> {
        self.document.schema(&name).ok_or_else(|| {
            Box::new(Error::MalformedReference {
                name,
                location: format!("operation {}", operation.operation_id),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{empty_document, widget_document};

    fn names<'a>(fields: &[Field<'a>]) -> Vec<&'a str> {
        fields.iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_required_fields_first() {
        let def = SchemaDefinition::new("Widget")
            .required_property("name", SchemaNode::string())
            .required_property("count", SchemaNode::integer())
            .property("note", SchemaNode::string());

        let fields = ordered_fields(&def);
        assert_eq!(names(&fields), vec!["count", "name", "note"]);
        assert!(fields[0].required && fields[1].required && !fields[2].required);
    }

    #[test]
    fn test_optional_fields_sorted() {
        let def = SchemaDefinition::new("Filter")
            .property("zeta", SchemaNode::string())
            .property("alpha", SchemaNode::string())
            .required_property("mid", SchemaNode::string());

        assert_eq!(names(&ordered_fields(&def)), vec!["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_sorted_schemas() {
        let doc = widget_document();
        let names: Vec<_> = Resolver::new(&doc)
            .sorted_schemas()
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec![
                "GetWidgetRequest",
                "GetWidgetResponse",
                "ListWidgetsRequest",
                "ListWidgetsResponse",
                "Widget",
            ]
        );
    }

    #[test]
    fn test_operations_sorted_by_path() {
        let doc = widget_document();
        let resolved = Resolver::new(&doc).resolve(&BTreeSet::new()).unwrap();
        let ids: Vec<_> = resolved
            .operations
            .iter()
            .map(|r| r.operation.operation_id.as_str())
            .collect();

        assert_eq!(ids, vec!["GetWidget", "ListWidgets"]);
        assert_eq!(resolved.operations[0].request.name, "GetWidgetRequest");
        assert_eq!(resolved.operations[0].response.name, "GetWidgetResponse");
    }

    #[test]
    fn test_filter_selects_one() {
        let doc = widget_document();
        let filter = BTreeSet::from(["ListWidgets".to_string()]);
        let resolved = Resolver::new(&doc).resolve(&filter).unwrap();

        assert_eq!(resolved.operations.len(), 1);
        assert_eq!(resolved.operations[0].operation.path, "/widgets/list");
        assert_eq!(resolved.schemas.len(), 5);
    }

    #[test]
    fn test_unknown_filter_reports_first_missing() {
        let doc = widget_document();
        let filter = BTreeSet::from([
            "Zap".to_string(),
            "ListWidgets".to_string(),
            "DeleteWidget".to_string(),
        ]);

        let err = Resolver::new(&doc).resolve(&filter).unwrap_err();
        assert!(matches!(
            *err,
            Error::UnknownOperation { ref name } if name == "DeleteWidget"
        ));
    }

    #[test]
    fn test_missing_response_shape() {
        let doc = Document::builder("partial.json")
            .schema(SchemaDefinition::new("PingRequest"))
            .operation(Operation::new("/ping", "Ping"))
            .build()
            .unwrap();

        let err = Resolver::new(&doc).resolve(&BTreeSet::new()).unwrap_err();
        assert!(matches!(
            *err,
            Error::MalformedReference { ref name, ref location }
                if name == "PingResponse" && location == "operation Ping"
        ));
    }

    #[test]
    fn test_unselected_operation_shapes_not_required() {
        let doc = Document::builder("partial.json")
            .schema(SchemaDefinition::new("PingRequest"))
            .schema(SchemaDefinition::new("PingResponse"))
            .operation(Operation::new("/ping", "Ping"))
            .operation(Operation::new("/pong", "Pong"))
            .build()
            .unwrap();

        let filter = BTreeSet::from(["Ping".to_string()]);
        let resolved = Resolver::new(&doc).resolve(&filter).unwrap();
        assert_eq!(resolved.operations.len(), 1);
    }

    #[test]
    fn test_non_object_schema_is_rejected() {
        let doc = Document::builder("lists.json")
            .schema(SchemaDefinition::unsupported("WidgetList", "array"))
            .schema(SchemaDefinition::unsupported("Status", "string"))
            .build()
            .unwrap();

        let err = Resolver::new(&doc).resolve(&BTreeSet::new()).unwrap_err();
        assert!(matches!(
            *err,
            Error::UnknownSchemaType { ref kind, ref location }
                if kind == "string" && location == "Status"
        ));
    }

    #[test]
    fn test_empty_document() {
        let doc = empty_document();
        let resolved = Resolver::new(&doc).resolve(&BTreeSet::new()).unwrap();

        assert!(resolved.schemas.is_empty());
        assert!(resolved.operations.is_empty());
    }
}
