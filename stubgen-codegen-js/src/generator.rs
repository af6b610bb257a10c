//! JavaScript emitter.

use stubgen_codegen::{
    EmitContext, Emitter, Language, NamingConvention, Result, TypeMapper,
    builder::CodeBuilder, generation::generated_header, resolver::ResolvedOperation,
};
use stubgen_core::to_title_case;

use crate::{JS_NAMING, JavaScriptTypeMapper};

/// JavaScript emitter producing shape comments and an ES module client.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    mapper: JavaScriptTypeMapper,
}

impl Emitter for Generator {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn naming(&self) -> &NamingConvention {
        &JS_NAMING
    }

    fn model_filename(&self, module: &str) -> String {
        format!("{}_model.js", module)
    }

    fn client_filename(&self, module: &str) -> String {
        format!("{}_client.js", module)
    }

    fn emit_model(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        for schema in ctx.schemas() {
            let example = ctx.example(schema)?;
            builder.push_comment("//", &format!("{}: {}", schema.name, example));
        }
        Ok(builder.build())
    }

    fn emit_client(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        if ctx.operations().is_empty() {
            return Ok(builder.build());
        }

        let class_name = Self::class_name(ctx.module());

        builder.push_block("export class Invoker {", Some("}"), |b| {
            b.push_block("invoke(path, data) {", Some("}"), |b| {
                b.push_line("throw new Error(`Invoker.invoke is not implemented for ${path}`);");
            });
        });
        builder.push_blank();

        builder
            .push_line(&format!("export class {} {{", class_name))
            .push_indent();
        builder.push_block("constructor(invoker) {", Some("}"), |b| {
            b.push_line("this.invoker = invoker;");
        });
        for resolved in ctx.operations() {
            builder.push_blank();
            self.render_operation(&mut builder, ctx, resolved)?;
        }
        builder.push_dedent().push_line("}").push_blank();

        builder.push_line(&format!("export default {};", class_name));
        Ok(builder.build())
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `billing` -> `BillingAPI`
    fn class_name(module: &str) -> String {
        format!("{}API", to_title_case(module))
    }

    fn header(ctx: &EmitContext<'_>) -> CodeBuilder {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_raw(&generated_header("//", ctx.source()))
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
            builder.push_comment("//", summary);
        }
        builder
            .push_comment("//", &format!("req: {}", request))
            .push_comment("//", &format!("rsp: {}", response));
        let signature = format!(
            "{}(data) {{",
            self.naming().operation_name(&op.operation_id)
        );
        builder.push_block(&signature, Some("}"), |b| {
            b.push_line(&format!("return this.invoker.invoke('{}', data);", op.path));
        });
        Ok(())
    }
}
