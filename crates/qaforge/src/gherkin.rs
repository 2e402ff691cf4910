//! Gherkin feature text for Cucumber-style runners.
//!
//! Step keywords are positional: the first step is `Given`, the last step
//! of a multi-step case is `When`, everything between is `And`, and the
//! expected result closes the scenario as `Then`.

use crate::model::TestCase;
use crate::naming::comment_text;
use std::fmt;

/// Gherkin step keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Precondition (first step)
    Given,
    /// Action (last step of a multi-step case)
    When,
    /// Continuation (middle steps)
    And,
    /// Outcome (expected result)
    Then,
}

impl Keyword {
    /// Keyword for the step at `index` of a case with `len` steps.
    ///
    /// Index 0 is always `Given`, so a single-step case never gets `When`.
    #[must_use]
    pub const fn for_step(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::Given
        } else if index + 1 == len {
            Self::When
        } else {
            Self::And
        }
    }

    /// Keyword text as written in a feature file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::And => "And",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a batch as one feature with a scenario per test case.
#[must_use]
pub fn render_feature(cases: &[TestCase]) -> String {
    let mut feature = String::from(
        "Feature: Test Suite\n  \
         As a QA engineer\n  \
         I want to execute comprehensive test scenarios\n  \
         So that I can ensure the application works correctly\n\n",
    );

    for case in cases {
        feature.push_str(&format!("  Scenario: {}\n", comment_text(&case.title)));
        let len = case.steps.len();
        for (index, step) in case.steps.iter().enumerate() {
            feature.push_str(&format!(
                "    {} {}\n",
                Keyword::for_step(index, len),
                comment_text(step)
            ));
        }
        feature.push_str(&format!(
            "    {} {}\n\n",
            Keyword::Then,
            comment_text(&case.expected)
        ));
    }

    feature
}
