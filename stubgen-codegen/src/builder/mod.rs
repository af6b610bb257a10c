//! Text building blocks for emitters.
//!
//! - [`CodeBuilder`] - Line-oriented builder with indentation tracking
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
