//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`Language`] - The closed set of supported targets
//! - [`Emitter`] - Main trait for language emitters
//! - [`TypeMapper`] - Trait for mapping schema types to language types
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`EmitterRegistry`] - Lookup of emitters by target language

mod naming;
mod registry;
mod target;
mod traits;

pub use naming::{NamingConvention, keep_as_is};
pub use registry::EmitterRegistry;
pub use target::Language;
pub use traits::{Emitter, TypeMapper};
