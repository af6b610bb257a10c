//! Go emitter for the stubgen code generator.
//!
//! # Usage
//!
//! ```ignore
//! use stubgen_codegen::{GenerationRequest, Language, generate};
//! use stubgen_codegen_go::Generator;
//! use stubgen_schema::Document;
//!
//! let document = Document::from_path("api.json")?;
//! let request = GenerationRequest::new(Language::Go, "client");
//! let artifact = generate(&document, &request, &Generator::new())?;
//! ```
//!
//! # Generated Output
//!
//! - `<module>.model.gen.go` - One struct (or alias) per schema, with `json` tags
//! - `<module>.client.gen.go` - An `Invoker` interface and a `Client` with one
//!   method per operation

mod generator;
mod naming;
mod type_mapper;

pub use generator::Generator;
pub use naming::GO_NAMING;
pub use type_mapper::GoTypeMapper;
