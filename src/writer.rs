//! Indented line writer for S-expression output.
//!
//! Text accumulates into lines tagged with an indentation level. `add`
//! appends to the current line; `add_line` puts text on a line of its own.
//! Empty lines never reach the rendered output.

use crate::diagnostic::{Diagnostic, Violation};
use crate::span::Span;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Line {
    contents: String,
    indentation: usize,
}

#[derive(Clone, Debug)]
pub struct IndentedWriter {
    lines: Vec<Line>,
}

impl Default for IndentedWriter {
    fn default() -> Self {
        Self {
            lines: vec![Line {
                contents: String::new(),
                indentation: 0,
            }],
        }
    }
}

impl IndentedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn current(&mut self) -> &mut Line {
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Indentation level of the line being written.
    pub fn depth(&self) -> usize {
        self.lines.last().map_or(0, |l| l.indentation)
    }

    /// Start a fresh line unless the current one is still empty.
    pub fn new_line(&mut self) {
        let indentation = self.depth();
        if !self.current().contents.is_empty() {
            self.lines.push(Line {
                contents: String::new(),
                indentation,
            });
        }
    }

    pub fn indent(&mut self) {
        self.new_line();
        self.current().indentation += 1;
    }

    pub fn unindent(&mut self) -> Result<(), Diagnostic> {
        self.new_line();
        let line = self.current();
        if line.indentation == 0 {
            return Err(Diagnostic::new(Violation::IndentationUnderflow, Span::dummy()));
        }
        line.indentation -= 1;
        Ok(())
    }

    pub fn add(&mut self, text: &str) {
        self.current().contents.push_str(text);
    }

    pub fn add_line(&mut self, line: &str) {
        self.new_line();
        self.add(line);
        self.new_line();
    }

    /// Number of non-empty lines written so far.
    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.contents.is_empty()).count()
    }

    /// Render all non-empty lines, `indent_width` spaces per level.
    pub fn format(&self, indent_width: usize) -> String {
        let mut out = String::new();
        for line in self.lines.iter().filter(|l| !l.contents.is_empty()) {
            out.push_str(&" ".repeat(line.indentation * indent_width));
            out.push_str(&line.contents);
            out.push('\n');
        }
        out
    }
}
