//! Python emitter for the stubgen code generator.
//!
//! Python output is untyped: models are described by shape comments and the
//! client methods annotate their request and response shapes.
//!
//! # Generated Output
//!
//! - `<module>_model.py` - One `# Name: {...}` comment per schema
//! - `<module>_client.py` - An abstract `Invoker` and a `Client` taking one in
//!   its constructor

mod generator;
mod naming;
mod type_mapper;

pub use generator::Generator;
pub use naming::PYTHON_NAMING;
pub use type_mapper::PythonTypeMapper;
