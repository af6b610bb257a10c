//! Check operation - document validation.

use std::collections::BTreeSet;

use stubgen_codegen::{Result, resolver::Resolver};
use stubgen_schema::Document;

use crate::reports::{CheckReport, OperationInfo};

/// Execute the check operation.
///
/// Resolves the document the same way generation does, so anything that
/// would stop a generate run is reported here.
pub fn check(document: &Document, operations: &[String]) -> Result<CheckReport> {
    let filter: BTreeSet<String> = operations.iter().cloned().collect();
    let resolved = Resolver::new(document).resolve(&filter)?;

    let mut skipped_routes: Vec<String> = document
        .paths()
        .iter()
        .filter(|(_, item)| item.post.is_none())
        .map(|(path, item)| match item.other_methods.as_slice() {
            [] => path.clone(),
            methods => format!("{} ({})", path, methods.join(", ").to_uppercase()),
        })
        .collect();
    skipped_routes.sort();

    Ok(CheckReport {
        source: document.source().to_string(),
        schemas: resolved.schemas.iter().map(|s| s.name.clone()).collect(),
        operations: resolved
            .operations
            .iter()
            .map(|r| OperationInfo {
                id: r.operation.operation_id.clone(),
                path: r.operation.path.clone(),
                summary: r.operation.summary().map(str::to_string),
            })
            .collect(),
        skipped_routes,
    })
}

#[cfg(test)]
mod tests {
    use stubgen_codegen::{Error, testing::widget_document};

    use super::*;

    #[test]
    fn test_check_lists_everything() {
        let report = check(&widget_document(), &[]).unwrap();

        assert_eq!(report.schemas.len(), 5);
        assert_eq!(report.schemas[0], "GetWidgetRequest");
        assert_eq!(report.operations.len(), 2);
        assert_eq!(report.operations[1].id, "ListWidgets");
        assert_eq!(
            report.operations[1].summary.as_deref(),
            Some("List all widgets")
        );
        assert_eq!(report.skipped_routes, vec!["/health (GET)"]);
    }

    #[test]
    fn test_skipped_route_without_methods() {
        let document = Document::builder("routes.json")
            .path("/legacy", stubgen_schema::PathItem::default())
            .build()
            .unwrap();

        let report = check(&document, &[]).unwrap();
        assert_eq!(report.skipped_routes, vec!["/legacy"]);
    }

    #[test]
    fn test_check_with_unknown_operation() {
        let err = check(&widget_document(), &["Missing".to_string()]).unwrap_err();
        assert!(matches!(*err, Error::UnknownOperation { ref name } if name == "Missing"));
    }
}
