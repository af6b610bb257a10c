//! Go emitter.

use stubgen_codegen::{
    EmitContext, Emitter, Error, Language, NamingConvention, Result, TypeMapper,
    builder::CodeBuilder,
    generation::generated_header,
    resolver::{Field, ResolvedOperation},
};
use stubgen_schema::{SchemaDefinition, SchemaNode};

use crate::{GO_NAMING, GoTypeMapper};

/// Package-level names the client declares next to the models.
const CLIENT_NAMES: &[&str] = &["Invoker", "Client", "NewClient"];

/// Go emitter producing structs and an injected-invoker client.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    mapper: GoTypeMapper,
}

impl Emitter for Generator {
    fn language(&self) -> Language {
        Language::Go
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn naming(&self) -> &NamingConvention {
        &GO_NAMING
    }

    fn model_filename(&self, module: &str) -> String {
        format!("{}.model.gen.go", module)
    }

    fn client_filename(&self, module: &str) -> String {
        format!("{}.client.gen.go", module)
    }

    fn emit_model(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        for (i, schema) in ctx.schemas().iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            self.render_schema(&mut builder, ctx, schema)?;
        }
        Ok(builder.build())
    }

    fn emit_client(&self, ctx: &EmitContext<'_>) -> Result<String> {
        let mut builder = Self::header(ctx);
        if ctx.operations().is_empty() {
            return Ok(builder.build());
        }
        if let Some(schema) = ctx
            .schemas()
            .iter()
            .find(|s| CLIENT_NAMES.contains(&s.name.as_str()))
        {
            return Err(Box::new(Error::NameCollision {
                name: schema.name.clone(),
                language: Language::Go,
            }));
        }

        builder.push_line("import \"context\"").push_blank();
        Self::render_invoker(&mut builder);
        for resolved in ctx.operations() {
            builder.push_blank();
            self.render_operation(&mut builder, ctx, resolved)?;
        }
        Ok(builder.build())
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    fn header(ctx: &EmitContext<'_>) -> CodeBuilder {
        let mut builder = CodeBuilder::go();
        builder
            .push_raw(&generated_header("//", ctx.source()))
            .push_line(&format!("package {}", ctx.module()))
            .push_blank();
        builder
    }

    fn render_schema(
        &self,
        builder: &mut CodeBuilder,
        ctx: &EmitContext<'_>,
        schema: &SchemaDefinition,
    ) -> Result<()> {
        if let Some(target) = ctx.alias_target(schema)? {
            builder.push_line(&format!("type {} = {}", schema.name, target));
            return Ok(());
        }

        let fields = ctx.fields(schema);
        if fields.is_empty() {
            builder.push_line(&format!("type {} struct{{}}", schema.name));
            return Ok(());
        }

        builder
            .push_line(&format!("type {} struct {{", schema.name))
            .push_indent();
        for field in &fields {
            let location = format!("{}.{}", schema.name, field.name);
            let go_type = ctx.map_type(field.node, &location)?;
            if let Some(comment) = field_comment(field) {
                builder.push_comment("//", &comment);
            }
            builder.push_line(&format!(
                "{} {} `json:\"{}\"`",
                self.naming().field_name(field.name),
                go_type,
                json_tag(field)
            ));
        }
        builder.push_dedent().push_line("}");
        Ok(())
    }

    fn render_invoker(builder: &mut CodeBuilder) {
        builder.push_comment(
            "//",
            "Invoker sends req to the route at path and decodes the reply into rsp.",
        );
        builder.push_block("type Invoker interface {", Some("}"), |b| {
            b.push_line(
                "Invoke(ctx context.Context, path string, req interface{}, rsp interface{}) error",
            );
        });
        builder.push_blank();

        builder.push_comment("//", "Client calls the service through an injected Invoker.");
        builder.push_block("type Client struct {", Some("}"), |b| {
            b.push_line("invoker Invoker");
        });
        builder.push_blank();

        builder.push_comment(
            "//",
            "NewClient returns a Client that sends every call through invoker.",
        );
        builder.push_block("func NewClient(invoker Invoker) *Client {", Some("}"), |b| {
            b.push_line("return &Client{invoker: invoker}");
        });
    }

    fn render_operation(
        &self,
        builder: &mut CodeBuilder,
        ctx: &EmitContext<'_>,
        resolved: &ResolvedOperation<'_>,
    ) -> Result<()> {
        let op = resolved.operation;
        let location = format!("operation {}", op.operation_id);
        let request = ctx.map_type(&SchemaNode::reference(&resolved.request.name), &location)?;
        let response = ctx.map_type(&SchemaNode::reference(&resolved.response.name), &location)?;

        if let Some(summary) = op.summary() {
            builder.push_comment("//", summary);
        }
        let signature = format!(
            "func (c *Client) {}(ctx context.Context, req {}) ({}, error) {{",
            self.naming().operation_name(&op.operation_id),
            request,
            response
        );
        builder.push_block(&signature, Some("}"), |b| {
            b.push_line(&format!("rsp := &{}{{}}", resolved.response.name))
                .push_line(&format!(
                    "err := c.invoker.Invoke(ctx, \"{}\", req, rsp)",
                    op.path
                ))
                .push_line("return rsp, err");
        });
        Ok(())
    }
}

fn field_comment(field: &Field<'_>) -> Option<String> {
    match (field.required, field.node.title()) {
        (true, Some(title)) => Some(format!("Required. {}", title)),
        (true, None) => Some("Required.".to_string()),
        (false, Some(title)) => Some(title.to_string()),
        (false, None) => None,
    }
}

fn json_tag(field: &Field<'_>) -> String {
    if field.required {
        field.name.to_string()
    } else {
        format!("{},omitempty", field.name)
    }
}
