//! Downloadable files produced from a batch.

use crate::framework::Framework;
use crate::gherkin::render_feature;
use crate::model::TestCase;
use crate::tabular::{render_csv, render_markdown_at};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File name of the CSV export.
pub const CSV_FILENAME: &str = "test-cases.csv";
/// File name of the Markdown export.
pub const MARKDOWN_FILENAME: &str = "test-cases.md";
/// File name of the Gherkin export.
pub const FEATURE_FILENAME: &str = "test-cases.feature";

/// A named, typed blob ready to be written or served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Suggested file name
    pub filename: String,
    /// MIME type
    pub mime: String,
    /// File contents
    pub contents: String,
}

impl Artifact {
    /// Create an artifact from parts.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        mime: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
            contents: contents.into(),
        }
    }

    /// `test-cases.csv`
    #[must_use]
    pub fn csv(cases: &[TestCase]) -> Self {
        Self::new(CSV_FILENAME, "text/csv", render_csv(cases))
    }

    /// `test-cases.md`, stamped with `generated_at`
    #[must_use]
    pub fn markdown(cases: &[TestCase], generated_at: DateTime<Utc>) -> Self {
        Self::new(
            MARKDOWN_FILENAME,
            "text/markdown",
            render_markdown_at(cases, generated_at),
        )
    }

    /// `test-cases.feature`
    #[must_use]
    pub fn feature(cases: &[TestCase]) -> Self {
        Self::new(FEATURE_FILENAME, "text/plain", render_feature(cases))
    }

    /// Skeleton for `framework`, named and typed by its language.
    #[must_use]
    pub fn automation(cases: &[TestCase], framework: Framework) -> Self {
        Self::new(
            framework.automation_filename(),
            framework.language().mime(),
            framework.render(cases),
        )
    }

    /// Size of the contents in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True when the contents are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
