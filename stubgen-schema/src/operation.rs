//! Routable operations.

/// One callable endpoint.
///
/// Request and response shapes are found by naming convention:
/// `<operation_id>Request` and `<operation_id>Response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub path: String,
    pub operation_id: String,
    pub summary: Option<String>,
}

impl Operation {
    pub fn new(path: impl Into<String>, operation_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operation_id: operation_id.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// The summary, if present and non-empty.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }

    /// Name of the request schema definition.
    pub fn request_schema(&self) -> String {
        format!("{}Request", self.operation_id)
    }

    /// Name of the response schema definition.
    pub fn response_schema(&self) -> String {
        format!("{}Response", self.operation_id)
    }
}

/// Everything the document declares under one route path.
///
/// Only the POST operation is renderable; other methods are recorded so
/// that callers can report what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathItem {
    pub post: Option<Operation>,
    pub other_methods: Vec<String>,
}

impl PathItem {
    pub fn post(operation: Operation) -> Self {
        Self {
            post: Some(operation),
            other_methods: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_names() {
        let op = Operation::new("/widgets/list", "ListWidgets");
        assert_eq!(op.request_schema(), "ListWidgetsRequest");
        assert_eq!(op.response_schema(), "ListWidgetsResponse");
    }

    #[test]
    fn test_empty_summary_is_absent() {
        let op = Operation::new("/a", "A").with_summary("");
        assert_eq!(op.summary(), None);
    }
}
