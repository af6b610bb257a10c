use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stubgen_codegen::{GenerationRequest, Language};
use stubgen_schema::Document;
use tracing::info;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    language::registry,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the OpenAPI document (JSON, or YAML by extension)
    pub source: PathBuf,

    /// Operation id to generate (repeatable; defaults to all)
    #[arg(short = 'p', long = "operation")]
    pub operations: Vec<String>,

    /// Module name used for package and file names [default: client]
    #[arg(short, long)]
    pub module: Option<String>,

    /// Target language: go, js or py [default: go]
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output directory [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Run the target language formatter over the output (Go only)
    #[arg(long)]
    pub format: bool,

    /// Skip the formatter even when stubgen.toml enables it
    #[arg(long, conflicts_with = "format")]
    pub no_format: bool,

    /// Path to stubgen.toml (defaults to ./stubgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let options = self.options(config)?;

        let document = Document::from_path(&self.source).unwrap_or_exit();
        let request = GenerationRequest::new(options.language, &options.module)
            .with_operations(options.operations.iter().cloned());
        info!(
            language = %request.language,
            module = %request.module,
            operations = request.operations.len(),
            "generating"
        );

        let artifact = registry().generate(&document, &request).unwrap_or_exit();
        let report = ops::generate(artifact, &options)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// Merge flags over the config file over built-in defaults.
    fn options(&self, config: Config) -> Result<GenerateOptions> {
        let file = config.generate;

        let language = match self.lang.as_deref() {
            Some(lang) => lang.parse::<Language>().unwrap_or_exit(),
            None => file.lang.unwrap_or(Language::Go),
        };
        let operations = if self.operations.is_empty() {
            file.operations
        } else {
            self.operations.clone()
        };

        Ok(GenerateOptions {
            language,
            module: self
                .module
                .clone()
                .or(file.module)
                .unwrap_or_else(|| "client".to_string()),
            operations,
            output: self
                .output
                .clone()
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(".")),
            dry_run: self.dry_run,
            format: !self.no_format && (self.format || file.format),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> GenerateCommand {
        use clap::Parser;

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            generate: GenerateCommand,
        }

        let mut argv = vec!["stubgen"];
        argv.extend_from_slice(args);
        Harness::parse_from(argv).generate
    }

    #[test]
    fn test_defaults() {
        let options = command(&["api.json"]).options(Config::default()).unwrap();

        assert_eq!(options.language, Language::Go);
        assert_eq!(options.module, "client");
        assert_eq!(options.output, PathBuf::from("."));
        assert!(options.operations.is_empty());
        assert!(!options.dry_run && !options.format);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::parse(
            r#"
            [generate]
            module = "shop"
            lang = "js"
            operations = ["ListWidgets"]
            output = "gen"
            format = true
            "#,
        )
        .unwrap();

        let options = command(&["api.json", "-l", "python", "-p", "GetWidget", "-p", "ListWidgets"])
            .options(config)
            .unwrap();

        assert_eq!(options.language, Language::Python);
        assert_eq!(options.module, "shop");
        assert_eq!(options.operations, vec!["GetWidget", "ListWidgets"]);
        assert_eq!(options.output, PathBuf::from("gen"));
        assert!(options.format);
    }

    #[test]
    fn test_no_format_overrides_config() {
        let config = || Config::parse("[generate]\nformat = true\n").unwrap();

        let options = command(&["api.json"]).options(config()).unwrap();
        assert!(options.format);

        let options = command(&["api.json", "--no-format"]).options(config()).unwrap();
        assert!(!options.format);
    }

    #[test]
    fn test_format_flags_conflict() {
        use clap::{CommandFactory, Parser};

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            generate: GenerateCommand,
        }

        let result = Harness::command().try_get_matches_from([
            "stubgen",
            "api.json",
            "--format",
            "--no-format",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = Config::parse("[generate]\nlang = \"py\"\noperations = [\"GetWidget\"]\n").unwrap();
        let options = command(&["api.json", "--dry-run", "-m", "billing"])
            .options(config)
            .unwrap();

        assert_eq!(options.language, Language::Python);
        assert_eq!(options.module, "billing");
        assert_eq!(options.operations, vec!["GetWidget"]);
        assert!(options.dry_run);
    }
}
