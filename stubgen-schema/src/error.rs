use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for document operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the document text and filename so parse failures can point
/// at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self
            .offset_of(source.line(), source.column())
            .map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            format: "JSON",
            source: Box::new(source),
        })
    }

    /// Create a parse error from a serde_yaml error.
    pub fn yaml_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source.location().map(|loc| SourceSpan::from(loc.index()));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            format: "YAML",
            source: Box::new(source),
        })
    }

    /// Byte offset of a 1-based line/column pair.
    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let offset = line_start + column.saturating_sub(1);
        (offset <= self.src.len()).then_some(offset)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(stubgen::io), help("the document locator must be a local file path"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {format} document")]
    #[diagnostic(code(stubgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unsupported document version '{version}'")]
    #[diagnostic(
        code(stubgen::unsupported_version),
        help("only OpenAPI 3.x documents are supported")
    )]
    UnsupportedVersion { version: String },

    #[error("schema '{schema}' requires unknown field '{field}'")]
    #[diagnostic(
        code(stubgen::unknown_required_field),
        help("add '{field}' to the properties of '{schema}' or drop it from 'required'")
    )]
    UnknownRequiredField { schema: String, field: String },

    #[error("operation id '{operation_id}' is used by both '{first_path}' and '{second_path}'")]
    #[diagnostic(
        code(stubgen::duplicate_operation),
        help("operation ids must be unique within a document")
    )]
    DuplicateOperation {
        operation_id: String,
        first_path: String,
        second_path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let ctx = SourceContext::new("{\n  \"a\": 1,\n  oops\n}", "api.json");
        assert_eq!(ctx.offset_of(1, 1), Some(0));
        assert_eq!(ctx.offset_of(3, 3), Some(14));
        assert_eq!(ctx.offset_of(0, 0), None);
    }

    #[test]
    fn test_json_error_has_span() {
        let src = "{\n  \"openapi\": \n}";
        let ctx = SourceContext::new(src, "api.json");
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();

        match *ctx.json_error(err) {
            Error::Parse { span, format, .. } => {
                assert_eq!(format, "JSON");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
