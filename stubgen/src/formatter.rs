//! Post-generation formatting through external tools.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use eyre::{Context, Result, bail, eyre};
use stubgen_codegen::{GeneratedArtifact, Language};
use tracing::debug;

/// A command that reads source on stdin and writes the formatted source to
/// stdout. Any failure rejects the output.
#[derive(Debug, Clone)]
pub struct ExternalFormatter {
    program: String,
    args: Vec<String>,
}

impl ExternalFormatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// The formatter for a target language, if it has one.
    pub fn for_language(language: Language) -> Option<Self> {
        match language {
            Language::Go => Some(Self::new("gofmt")),
            Language::JavaScript | Language::Python => None,
        }
    }

    pub fn format(&self, name: &str, source: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .wrap_err_with(|| format!("Failed to run {}", self.program))?;

        child
            .stdin
            .take()
            .ok_or_else(|| eyre!("{} has no stdin", self.program))?
            .write_all(source.as_bytes())
            .wrap_err_with(|| format!("Failed to write {} to {}", name, self.program))?;

        let output = child
            .wait_with_output()
            .wrap_err_with(|| format!("Failed to wait for {}", self.program))?;

        if !output.status.success() {
            bail!(
                "{} rejected {}:\n{}",
                self.program,
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        debug!(program = %self.program, file = name, "formatted");
        String::from_utf8(output.stdout)
            .wrap_err_with(|| format!("{} produced invalid UTF-8 for {}", self.program, name))
    }

    /// Format both files in place.
    pub fn format_artifact(&self, artifact: &mut GeneratedArtifact) -> Result<()> {
        artifact.model_source = self.format(&artifact.model_filename, &artifact.model_source)?;
        artifact.client_source = self.format(&artifact.client_filename, &artifact.client_source)?;
        Ok(())
    }
}
