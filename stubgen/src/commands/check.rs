use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stubgen_schema::Document;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the OpenAPI document (JSON, or YAML by extension)
    pub source: PathBuf,

    /// Only check these operation ids (repeatable)
    #[arg(short = 'p', long = "operation")]
    pub operations: Vec<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let document = Document::from_path(&self.source).unwrap_or_exit();
        let report = ops::check(&document, &self.operations).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
