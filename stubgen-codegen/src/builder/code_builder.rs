//! Line-oriented builder for generated source text.

use super::Indent;

/// Builds source text one line at a time, tracking the indentation level.
///
/// # Example
///
/// ```
/// use stubgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::python();
/// builder
///     .push_line("class Client:")
///     .push_indent()
///     .push_line("pass")
///     .push_dedent();
///
/// assert_eq!(builder.build(), "class Client:\n    pass\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Tab indentation.
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// 4-space indentation.
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Add a line with the current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a line comment (`<prefix> <text>`) with the current indentation.
    ///
    /// Multi-line text becomes one comment line per source line.
    pub fn push_comment(&mut self, prefix: &str, text: &str) -> &mut Self {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            lines.push("");
        }
        for line in lines {
            self.write_indent();
            self.buffer.push_str(prefix);
            if !line.is_empty() {
                self.buffer.push(' ');
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body, then `close` when given.
    pub fn push_block<F>(&mut self, header: &str, close: Option<&str>, body: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        body(self);
        self.push_dedent();
        if let Some(close) = close {
            self.push_line(close);
        }
        self
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
