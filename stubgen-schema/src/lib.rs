//! API document model for the stubgen code generator.
//!
//! The generation engine only ever sees a [`Document`]: named schema
//! definitions plus the routes that carry operations. Documents are built
//! either programmatically through [`DocumentBuilder`] or by loading an
//! OpenAPI 3 file with [`Document::from_path`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod definition;
mod document;
mod error;
mod node;
mod openapi;
mod operation;

pub use definition::SchemaDefinition;
pub use document::{Document, DocumentBuilder};
pub use error::{Error, Result, SourceContext};
pub use node::{Primitive, SchemaKind, SchemaNode};
pub use operation::{Operation, PathItem};
