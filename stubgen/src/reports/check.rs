//! Check command report data structures.

use super::output::{Output, Report};

/// A selected operation as shown by `stubgen check`.
#[derive(Debug)]
pub struct OperationInfo {
    pub id: String,
    pub path: String,
    pub summary: Option<String>,
}

/// Report data from document validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Locator of the checked document.
    pub source: String,
    /// Schema names in generation order.
    pub schemas: Vec<String>,
    /// Selected operations in generation order.
    pub operations: Vec<OperationInfo>,
    /// Routes that have no POST operation and are never generated, with the
    /// methods they do declare.
    pub skipped_routes: Vec<String>,
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.source));
        out.newline();

        out.section(&plural(self.schemas.len(), "schema"));
        for schema in &self.schemas {
            out.list_item(schema);
        }

        out.section(&plural(self.operations.len(), "operation"));
        for op in &self.operations {
            match &op.summary {
                Some(summary) => out.list_item(&format!("{} POST {} ({})", op.id, op.path, summary)),
                None => out.list_item(&format!("{} POST {}", op.id, op.path)),
            }
        }

        if !self.skipped_routes.is_empty() {
            out.section("Skipped (no POST operation)");
            for route in &self.skipped_routes {
                out.list_item(route);
            }
        }
    }
}
