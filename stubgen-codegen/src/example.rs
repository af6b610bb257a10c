//! Single-line shape summaries for comment annotations.
//!
//! Targets without declared types describe each schema in a comment, e.g.
//!
//! ```text
//! {"count": "type int(required).", "note": "type str. Free-form note"}
//! ```

use stubgen_schema::SchemaDefinition;

use crate::{Result, mapping::TypeResolver, resolver::ordered_fields};

/// Render the shape summary of a definition.
///
/// Aliases render as `{ref Target}`; field references render as the mapped
/// name without expanding the referenced body. Titles are folded onto the
/// one line.
pub fn render_example(definition: &SchemaDefinition, types: &TypeResolver<'_>) -> Result<String> {
    if let Some(target) = types.alias_target(definition)? {
        return Ok(format!("{{ref {target}}}"));
    }

    let entries = ordered_fields(definition)
        .into_iter()
        .map(|field| -> Result<String> {
            let location = format!("{}.{}", definition.name, field.name);
            let mapped = types.map(field.node, &location)?;
            let required = if field.required { "(required)" } else { "" };
            let title = field
                .node
                .title()
                .map(|t| format!(" {}", t.split_whitespace().collect::<Vec<_>>().join(" ")))
                .unwrap_or_default();
            Ok(format!(
                "\"{}\": \"type {mapped}{required}.{title}\"",
                field.name
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("{{{}}}", entries.join(", ")))
}
