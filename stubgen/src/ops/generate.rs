//! Generate operation - formatting and writing artifacts.

use std::path::PathBuf;

use eyre::{Context, Result};
use stubgen_codegen::{GeneratedArtifact, Language};
use stubgen_core::File;
use tracing::{info, warn};

use crate::{
    formatter::ExternalFormatter,
    reports::{GenerateReport, PreviewFile},
};

/// Settings for one generate run, after merging flags and config.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub language: Language,
    pub module: String,
    pub operations: Vec<String>,
    pub output: PathBuf,
    pub dry_run: bool,
    pub format: bool,
}

/// Execute the generate operation.
///
/// Formats the artifact when requested, then writes both files or returns
/// them as a preview. A formatter failure happens before anything is written.
pub fn generate(mut artifact: GeneratedArtifact, options: &GenerateOptions) -> Result<GenerateReport> {
    if options.format {
        match ExternalFormatter::for_language(artifact.language) {
            Some(formatter) => formatter
                .format_artifact(&mut artifact)
                .wrap_err("Formatting failed; nothing was written")?,
            None => warn!(language = %artifact.language, "no formatter for language, skipping"),
        }
    }

    if options.dry_run {
        let files = artifact
            .files()
            .into_iter()
            .map(|(path, content)| PreviewFile {
                path: path.to_string(),
                content: content.to_string(),
            })
            .collect();
        return Ok(GenerateReport::Preview(files));
    }

    let mut written = Vec::new();
    for (name, content) in artifact.files() {
        let file = File::new(options.output.join(name), content);
        file.write()
            .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;
        info!(path = %file.path().display(), "wrote file");
        written.push(file.path().to_path_buf());
    }

    Ok(GenerateReport::Written {
        language: artifact.language,
        module: options.module.clone(),
        files: written,
    })
}
