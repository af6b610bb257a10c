//! Generation requests, artifacts and the engine entry point.

use std::collections::BTreeSet;

use stubgen_schema::{Document, SchemaDefinition, SchemaNode};
use tracing::debug;

use crate::{
    Emitter, Error, Language, Result,
    example::render_example,
    mapping::TypeResolver,
    resolver::{Field, Resolved, ResolvedOperation, Resolver, ordered_fields},
};

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub language: Language,
    pub module: String,
    /// Operation ids to keep; empty selects every operation.
    pub operations: BTreeSet<String>,
}

impl GenerationRequest {
    pub fn new(language: Language, module: impl Into<String>) -> Self {
        Self {
            language,
            module: module.into(),
            operations: BTreeSet::new(),
        }
    }

    pub fn with_operations<I, S>(mut self, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operations.extend(operations.into_iter().map(Into::into));
        self
    }
}

/// The two generated files of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub language: Language,
    pub model_filename: String,
    pub model_source: String,
    pub client_filename: String,
    pub client_source: String,
}

impl GeneratedArtifact {
    /// `(filename, source)` pairs, model first.
    pub fn files(&self) -> [(&str, &str); 2] {
        [
            (self.model_filename.as_str(), self.model_source.as_str()),
            (self.client_filename.as_str(), self.client_source.as_str()),
        ]
    }
}

/// Read-only view handed to an [`Emitter`].
pub struct EmitContext<'a> {
    document: &'a Document,
    request: &'a GenerationRequest,
    resolved: Resolved<'a>,
    types: TypeResolver<'a>,
}

impl<'a> EmitContext<'a> {
    pub fn new(
        document: &'a Document,
        request: &'a GenerationRequest,
        resolved: Resolved<'a>,
        types: TypeResolver<'a>,
    ) -> Self {
        Self {
            document,
            request,
            resolved,
            types,
        }
    }

    /// Locator of the source document, used in header lines.
    pub fn source(&self) -> &str {
        self.document.source()
    }

    pub fn module(&self) -> &str {
        &self.request.module
    }

    /// Schema definitions, ascending by name.
    pub fn schemas(&self) -> &[&'a SchemaDefinition] {
        &self.resolved.schemas
    }

    /// Selected operations, ascending by path.
    pub fn operations(&self) -> &[ResolvedOperation<'a>] {
        &self.resolved.operations
    }

    /// A definition's fields, required first.
    pub fn fields<'d>(&self, definition: &'d SchemaDefinition) -> Vec<Field<'d>> {
        ordered_fields(definition)
    }

    pub fn map_type(&self, node: &SchemaNode, location: &str) -> Result<String> {
        self.types.map(node, location)
    }

    pub fn alias_target<'d>(&self, definition: &'d SchemaDefinition) -> Result<Option<&'d str>> {
        self.types.alias_target(definition)
    }

    /// Shape summary of a definition for comment annotations.
    pub fn example(&self, definition: &SchemaDefinition) -> Result<String> {
        render_example(definition, &self.types)
    }
}

/// First line of every generated file.
pub fn generated_header(comment: &str, source: &str) -> String {
    format!("{comment} This file was generated from {source}\n")
}

/// Generate both files for `request` with `emitter`.
///
/// Either both sources are returned or the first failure is; nothing is
/// written anywhere. The emitter must target the requested language.
pub fn generate(
    document: &Document,
    request: &GenerationRequest,
    emitter: &dyn Emitter,
) -> Result<GeneratedArtifact> {
    if emitter.language() != request.language {
        return Err(Box::new(Error::UnsupportedTargetLanguage {
            name: request.language.to_string(),
        }));
    }

    let resolved = Resolver::new(document).resolve(&request.operations)?;
    let types = TypeResolver::new(emitter.type_mapper(), document);
    let ctx = EmitContext::new(document, request, resolved, types);

    let model_filename = emitter.model_filename(&request.module);
    let model_source = emitter.emit_model(&ctx)?;
    debug!(file = %model_filename, bytes = model_source.len(), "rendered model");

    let client_filename = emitter.client_filename(&request.module);
    let client_source = emitter.emit_client(&ctx)?;
    debug!(file = %client_filename, bytes = client_source.len(), "rendered client");

    Ok(GeneratedArtifact {
        language: emitter.language(),
        model_filename,
        model_source,
        client_filename,
        client_source,
    })
}
