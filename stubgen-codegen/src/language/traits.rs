//! Language-agnostic code generation traits.

use stubgen_schema::Primitive;

use crate::{EmitContext, Language, NamingConvention, Result};

/// Trait for mapping schema types to language-specific type strings.
///
/// Implementations only supply the per-language syntax; the recursion over
/// nested nodes lives in [`TypeResolver`](crate::mapping::TypeResolver) so
/// every caller maps types the same way.
pub trait TypeMapper: Send + Sync {
    /// The target language
    fn language(&self) -> Language;

    /// Map a scalar type
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Wrap an already-mapped item type in the language's sequence syntax
    fn map_array(&self, item: &str) -> String;

    /// Wrap an already-mapped value type in the language's string-keyed map syntax
    fn map_map(&self, value: &str) -> String;

    /// Render a reference to a named schema
    fn map_reference(&self, name: &str) -> String {
        // Default implementation - languages with explicit reference semantics override
        name.to_string()
    }
}

/// Trait for language-specific emitters.
///
/// Implement this trait to add support for generating code in a new language.
pub trait Emitter: Send + Sync {
    /// The target language
    fn language(&self) -> Language;

    /// Type syntax for this language
    fn type_mapper(&self) -> &dyn TypeMapper;

    /// Identifier rules for this language
    fn naming(&self) -> &NamingConvention;

    /// File name of the model artifact for a module
    fn model_filename(&self, module: &str) -> String;

    /// File name of the client artifact for a module
    fn client_filename(&self, module: &str) -> String;

    /// Render the model source
    fn emit_model(&self, ctx: &EmitContext<'_>) -> Result<String>;

    /// Render the client source
    fn emit_client(&self, ctx: &EmitContext<'_>) -> Result<String>;
}
