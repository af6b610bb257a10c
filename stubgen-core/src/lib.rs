//! Core utilities for the stubgen code generator.
//!
//! This crate provides the identifier case helpers shared by every target
//! language and the writer used to put generated text on disk.

mod file;
mod utils;

// File operations
pub use file::File;
// String utilities
pub use utils::{capitalize_first, lower_first, to_snake_case, to_title_case};
