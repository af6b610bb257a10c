//! Python emitter.

use stubgen_codegen::{
    EmitContext, Emitter, Language, NamingConvention, Result, TypeMapper,
    builder::CodeBuilder, generation::generated_header, resolver::ResolvedOperation,
};

use crate::{PYTHON_NAMING, PythonTypeMapper};

/// Python emitter producing shape comments and an injected-invoker client.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    mapper: PythonTypeMapper,
}

impl Emitter for Generator {
    fn language(&self) -> Language {
        Language::Python
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn naming(&self) -> &NamingConvention {
        &PYTHON_NAMING
    }

    fn model_filename(&self, module: &str) -> String {
        format!("{}_model.py", module)
    }

    fn client_filename(&self, module: &str) -> String {
        format!("{}_client.py", module)
    }

    fn emit_model(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        for schema in ctx.schemas() {
            let example = ctx.example(schema)?;
            builder.push_comment("#", &format!("{}: {}", schema.name, example));
        }
        Ok(builder.build())
    }

    fn emit_client(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        if ctx.operations().is_empty() {
            return Ok(builder.build());
        }

        builder
            .push_line("from abc import ABCMeta, abstractmethod")
            .push_blank()
            .push_blank();
        builder.push_block("class Invoker(metaclass=ABCMeta):", None, |b| {
            b.push_line("@abstractmethod");
            b.push_block("def invoke(self, path: str, req):", None, |b| {
                b.push_line("pass");
            });
        });
        builder.push_blank().push_blank();

        builder.push_line("class Client:").push_indent();
        builder.push_block("def __init__(self, invoker: Invoker):", None, |b| {
            b.push_line("self._invoker = invoker");
        });
        for resolved in ctx.operations() {
            builder.push_blank();
            self.render_operation(&mut builder, ctx, resolved)?;
        }
        builder.push_dedent();

        Ok(builder.build())
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    fn header(ctx: &EmitContext<'_>) -> CodeBuilder {
        let mut builder = CodeBuilder::python();
        builder
            .push_raw(&generated_header("#", ctx.source()))
            .push_blank();
        builder
    }

    fn render_operation(
        &self,
        builder: &mut CodeBuilder,
        ctx: &EmitContext<'_>,
        resolved: &ResolvedOperation<'_>,
    ) -> Result<()> {
        let op = resolved.operation;
        let request = ctx.example(resolved.request)?;
        let response = ctx.example(resolved.response)?;

        if let Some(summary) = op.summary() {
            builder.push_comment("#", summary);
        }
        let signature = format!(
            "def {}(self, req):",
            self.naming().operation_name(&op.operation_id)
        );
        builder.push_block(&signature, None, |b| {
            b.push_comment("#", &format!("req: {}", request))
                .push_comment("#", &format!("rsp: {}", response))
                .push_line(&format!(
                    "return self._invoker.invoke(\"{}\", req)",
                    op.path
                ));
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        let generator = Generator::new();
        assert_eq!(generator.model_filename("shop"), "shop_model.py");
        assert_eq!(generator.client_filename("shop"), "shop_client.py");
    }

    #[test]
    fn test_language() {
        let generator = Generator::new();
        assert_eq!(generator.language(), Language::Python);
        assert_eq!(generator.type_mapper().language(), Language::Python);
    }
}
