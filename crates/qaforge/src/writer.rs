//! Line-oriented source builder used by the skeleton renderers.
//!
//! Every skeleton is a fixed header, one block per test case, and a fixed
//! footer. [`SourceWriter`] keeps the indentation bookkeeping out of the
//! renderers so each format reads as the text it produces.
//!
//! # Example
//!
//! ```rust
//! use qaforge::writer::SourceWriter;
//!
//! let mut w = SourceWriter::new("  ");
//! w.line("describe('Test Suite', () => {").blank();
//! w.indented(|w| {
//!     w.line("it('works', () => {");
//! });
//! assert_eq!(w.finish(), "describe('Test Suite', () => {\n\n  it('works', () => {\n");
//! ```

use crate::model::TestCase;
use crate::naming::CommentStyle;

/// Accumulates generated source one line at a time.
#[derive(Debug)]
pub struct SourceWriter {
    out: String,
    depth: usize,
    unit: &'static str,
}

impl SourceWriter {
    /// Create a writer with the given indentation unit.
    #[must_use]
    pub fn new(unit: &'static str) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            unit,
        }
    }

    /// Write one indented line.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(self.unit);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
        self
    }

    /// Write several lines at the current depth.
    pub fn lines(&mut self, lines: &[&str]) -> &mut Self {
        for l in lines {
            self.line(l);
        }
        self
    }

    /// Write an empty line (never indented).
    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Write a line comment at the current depth.
    pub fn comment(&mut self, style: CommentStyle, text: impl AsRef<str>) -> &mut Self {
        let line = format!("{} {}", style.marker(), style.payload(text.as_ref()));
        self.line(line)
    }

    /// Run `f` one indentation level deeper.
    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self
    }

    /// Take the generated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

/// Emit the per-case comment block: id, optionally the title, every step,
/// the expected result, then a blank line.
pub fn case_comments(w: &mut SourceWriter, style: CommentStyle, case: &TestCase, with_title: bool) {
    w.comment(style, format!("Test ID: {}", case.id));
    if with_title {
        w.comment(style, &case.title);
    }
    for (index, step) in case.steps.iter().enumerate() {
        w.comment(style, format!("Step {}: {step}", index + 1));
    }
    w.comment(style, format!("Expected: {}", case.expected));
    w.blank();
}
