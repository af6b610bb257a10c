//! Generation engine for the stubgen code generator.
//!
//! This crate lowers a [`Document`](stubgen_schema::Document) into model and
//! client source text. Language crates (e.g., `stubgen-codegen-go`) plug in
//! through the [`Emitter`], [`TypeMapper`] and [`NamingConvention`]
//! abstractions.
//!
//! # Module Organization
//!
//! - [`language`] - Target languages and per-language traits
//! - [`resolver`] - Deterministic schema, field and operation ordering
//! - [`mapping`] - Recursive schema-to-type mapping
//! - [`example`] - Single-line shape summaries for comment annotations
//! - [`builder`] - Indented text building
//! - [`generation`] - Requests, artifacts and the engine entry point
//! - [`testing`] - Shared document fixtures (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod example;
pub mod generation;
pub mod language;
pub mod mapping;
pub mod resolver;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use generation::{EmitContext, GeneratedArtifact, GenerationRequest, generate};
pub use language::{Emitter, EmitterRegistry, Language, NamingConvention, TypeMapper};
