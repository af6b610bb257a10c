use miette::Diagnostic;
use thiserror::Error;

use crate::Language;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Failures that abort a generation run.
///
/// Every variant is fatal for the run: nothing is retried and no partial
/// artifact is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown operation '{name}'")]
    #[diagnostic(
        code(stubgen::unknown_operation),
        help("run 'stubgen check <source>' to list the operations the document defines")
    )]
    UnknownOperation { name: String },

    #[error("unsupported target language '{name}'")]
    #[diagnostic(
        code(stubgen::unsupported_language),
        help("supported languages are: go, js, py")
    )]
    UnsupportedTargetLanguage { name: String },

    #[error("unknown schema type '{kind}' at {location}")]
    #[diagnostic(
        code(stubgen::unknown_schema_type),
        help(
            "supported types are string, boolean, number, integer, array, object with additionalProperties, and $ref"
        )
    )]
    UnknownSchemaType { kind: String, location: String },

    #[error("reference to unknown schema '{name}' at {location}")]
    #[diagnostic(
        code(stubgen::malformed_reference),
        help("define '{name}' under components.schemas")
    )]
    MalformedReference { name: String, location: String },

    #[error("schema '{name}' collides with a name the {language} client declares")]
    #[diagnostic(
        code(stubgen::name_collision),
        help("rename the schema or generate the client into a separate module")
    )]
    NameCollision { name: String, language: Language },
}
