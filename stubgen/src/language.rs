//! Emitter registration for every supported target.

use stubgen_codegen::EmitterRegistry;

/// Registry with the Go, JavaScript and Python emitters.
pub fn registry() -> EmitterRegistry {
    EmitterRegistry::new()
        .register(stubgen_codegen_go::Generator::new())
        .register(stubgen_codegen_js::Generator::new())
        .register(stubgen_codegen_python::Generator::new())
}
