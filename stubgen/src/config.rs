//! Optional `stubgen.toml` defaults.
//!
//! ```toml
//! [generate]
//! module = "billing"
//! lang = "py"
//! operations = ["ListInvoices"]
//! output = "gen"
//! format = false
//! ```

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;
use stubgen_codegen::Language;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "stubgen.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Defaults for `stubgen generate`; command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    pub module: Option<String>,
    pub lang: Option<Language>,
    #[serde(default)]
    pub operations: Vec<String>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: bool,
}

impl Config {
    /// Load the explicit config path, or `./stubgen.toml` when it exists.
    ///
    /// A missing explicit path is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(CONFIG_FILE).exists() => Path::new(CONFIG_FILE),
            None => return Ok(Self::default()),
        };

        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let config =
            Self::parse(&content).wrap_err_with(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
