//! The abstract test case handed to every renderer.
//!
//! A batch is an ordered slice of [`TestCase`]. Renderers walk it in input
//! order and never sort by id or title.

use crate::error::{QaForgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One manual QA scenario: a title, ordered steps and an expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Positive id, unique within a batch
    pub id: u32,
    /// Human-readable name; becomes the test name in every format
    pub title: String,
    /// Ordered steps; position matters for Gherkin keywords
    pub steps: Vec<String>,
    /// Free-form expected outcome
    pub expected: String,
}

impl TestCase {
    /// Create a test case.
    #[must_use]
    pub fn new<S: Into<String>>(
        id: u32,
        title: impl Into<String>,
        steps: impl IntoIterator<Item = S>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            steps: steps.into_iter().map(Into::into).collect(),
            expected: expected.into(),
        }
    }

    /// Check the shape of a single case.
    ///
    /// # Errors
    ///
    /// Returns [`QaForgeError::InvalidTestCase`] for a zero id, a blank
    /// title or expected result, no steps, or a blank step.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(QaForgeError::invalid_case(self.id, "id must be positive"));
        }
        if self.title.trim().is_empty() {
            return Err(QaForgeError::invalid_case(self.id, "title is empty"));
        }
        if self.expected.trim().is_empty() {
            return Err(QaForgeError::invalid_case(self.id, "expected result is empty"));
        }
        if self.steps.is_empty() {
            return Err(QaForgeError::invalid_case(self.id, "at least one step is required"));
        }
        if let Some(pos) = self.steps.iter().position(|s| s.trim().is_empty()) {
            return Err(QaForgeError::invalid_case(
                self.id,
                format!("step {} is empty", pos + 1),
            ));
        }
        Ok(())
    }
}

/// Validate a batch at the request boundary, before any renderer runs.
///
/// # Errors
///
/// Returns [`QaForgeError::EmptyBatch`] for an empty slice,
/// [`QaForgeError::DuplicateId`] when two cases share an id, or the first
/// per-case validation failure.
pub fn validate_batch(cases: &[TestCase]) -> Result<()> {
    if cases.is_empty() {
        return Err(QaForgeError::EmptyBatch);
    }

    let mut seen = HashSet::with_capacity(cases.len());
    for case in cases {
        case.validate()?;
        if !seen.insert(case.id) {
            return Err(QaForgeError::DuplicateId(case.id));
        }
    }
    Ok(())
}
