//! Generate command report data structures.

use std::path::PathBuf;

use stubgen_codegen::Language;

use super::output::{Output, Report};

/// A file that would be written.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Outcome of a generate run.
#[derive(Debug)]
pub enum GenerateReport {
    /// Dry run: the files and their content.
    Preview(Vec<PreviewFile>),
    /// Files written to disk.
    Written {
        language: Language,
        module: String,
        files: Vec<PathBuf>,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            GenerateReport::Written {
                language,
                module,
                files,
            } => {
                out.section(&format!("Generated {} module '{}'", language, module));
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport::Written {
            language: Language::Go,
            module: "client".to_string(),
            files: vec![PathBuf::from("client.model.gen.go")],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec!["Generated go module 'client':", "  + client.model.gen.go"]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport::Preview(vec![PreviewFile {
            path: "client_model.js".to_string(),
            content: "// header\n".to_string(),
        }]);
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── client_model.js ──");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }
}
