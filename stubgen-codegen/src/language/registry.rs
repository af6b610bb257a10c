//! Emitter lookup by target language.

use std::collections::BTreeMap;

use stubgen_schema::Document;

use crate::{Emitter, Error, GeneratedArtifact, GenerationRequest, Language, Result, generate};

/// The set of emitters available to a run.
///
/// # Example
///
/// ```ignore
/// let registry = EmitterRegistry::new()
///     .register(stubgen_codegen_go::Generator::new())
///     .register(stubgen_codegen_python::Generator::new());
///
/// let artifact = registry.generate(&document, &request)?;
/// ```
#[derive(Default)]
pub struct EmitterRegistry {
    emitters: BTreeMap<Language, Box<dyn Emitter>>,
}

impl EmitterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an emitter, replacing any previous one for the same language.
    pub fn register(mut self, emitter: impl Emitter + 'static) -> Self {
        self.emitters.insert(emitter.language(), Box::new(emitter));
        self
    }

    /// Get the emitter for a language.
    pub fn get(&self, language: Language) -> Result<&dyn Emitter> {
        self.emitters
            .get(&language)
            .map(|emitter| emitter.as_ref())
            .ok_or_else(|| {
                Box::new(Error::UnsupportedTargetLanguage {
                    name: language.to_string(),
                })
            })
    }

    /// Languages with a registered emitter, in a stable order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.emitters.keys().copied()
    }

    /// Generate with the emitter registered for the request's language.
    pub fn generate(
        &self,
        document: &Document,
        request: &GenerationRequest,
    ) -> Result<GeneratedArtifact> {
        let emitter = self.get(request.language)?;
        generate(document, request, emitter)
    }
}
