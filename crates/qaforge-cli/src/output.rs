//! Status lines for the terminal
//!
//! Rendered documents go to stdout (or a file); everything the user reads
//! about what happened goes to stderr through [`StatusReporter`].

use console::{style, Term};

/// Styled status lines on stderr
#[derive(Debug)]
pub struct StatusReporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl StatusReporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    fn emit(&self, symbol: console::StyledObject<&str>, plain: &str, message: &str) {
        let prefix = if self.use_color {
            symbol.bold().to_string()
        } else {
            plain.to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.emit(style("✓").green(), "OK", message);
        }
    }

    /// Print a failure message, even in quiet mode
    pub fn failure(&self, message: &str) {
        self.emit(style("✗").red(), "FAIL", message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            self.emit(style("⚠").yellow(), "WARN", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.emit(style("ℹ").blue(), "INFO", message);
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }

        let styled = if self.use_color {
            style(title).bold().underlined().to_string()
        } else {
            format!("=== {title} ===")
        };

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&styled);
    }

    /// Dim a secondary value (hashes, paths) when colors are on
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reporter() {
        let reporter = StatusReporter::new(true, false);
        assert!(reporter.use_color);
        assert!(!reporter.quiet);
    }

    #[test]
    fn test_default_reporter() {
        let reporter = StatusReporter::default();
        assert!(reporter.use_color);
        assert!(!reporter.quiet);
    }

    #[test]
    fn test_dim_without_color_is_identity() {
        let reporter = StatusReporter::new(false, false);
        assert_eq!(reporter.dim("abc123"), "abc123");
    }

    #[test]
    fn test_messages_do_not_panic() {
        let reporter = StatusReporter::new(false, false);
        reporter.success("written");
        reporter.failure("mismatch");
        reporter.warning("fallback");
        reporter.info("3 files");
        reporter.header("Bundle");
    }

    #[test]
    fn test_quiet_mode_suppresses_output() {
        let reporter = StatusReporter::new(false, true);
        reporter.success("hidden");
        reporter.warning("hidden");
        reporter.info("hidden");
        reporter.header("hidden");
        reporter.failure("shown");
    }
}
