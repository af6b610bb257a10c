//! JavaScript emitter for the stubgen code generator.
//!
//! # Generated Output
//!
//! - `<module>_model.js` - One `// Name: {...}` comment per schema
//! - `<module>_client.js` - An `Invoker` base class and a `<Module>API` class
//!   constructed with an invoker, exported as the module default

mod generator;
mod naming;
mod type_mapper;

pub use generator::Generator;
pub use naming::JS_NAMING;
pub use type_mapper::JavaScriptTypeMapper;
