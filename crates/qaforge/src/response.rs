//! Model reply parsing and the generation report payload.

use crate::error::{QaForgeError, Result};
use crate::framework::generate_automation_skeleton;
use crate::gherkin::render_feature;
use crate::model::TestCase;
use crate::tabular::{render_csv, render_markdown_at};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[allow(clippy::expect_used)]
fn json_array() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: first '[' to last ']'.
    RE.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("static pattern compiles"))
}

/// Extract and parse the JSON array of test cases from a free-text reply.
///
/// Models often wrap the array in prose or code fences; everything from the
/// first `[` to the last `]` is taken as the payload.
///
/// # Errors
///
/// Returns [`QaForgeError::UnparseableResponse`] if the reply has no
/// bracketed span or the span is not a valid test case array.
pub fn parse_ai_response(text: &str) -> Result<Vec<TestCase>> {
    let span = json_array()
        .find(text)
        .ok_or_else(|| QaForgeError::UnparseableResponse("no JSON array found".to_string()))?;

    serde_json::from_str(span.as_str())
        .map_err(|e| QaForgeError::UnparseableResponse(e.to_string()))
}

/// Chat reply shown after a batch is generated.
#[must_use]
pub fn assistant_message(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!(
        "I've generated {count} comprehensive test case{plural} for you. Feel free to ask me to:\n\
         • Add more test cases for specific scenarios\n\
         • Make tests more detailed or specific\n\
         • Add edge cases or negative tests\n\
         • Modify any existing test cases\n\
         • Focus on particular aspects of the functionality"
    )
}

/// Download payloads bundled into a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExports {
    /// Markdown document
    pub markdown: String,
    /// CSV document
    pub csv: String,
    /// Gherkin feature
    pub cucumber: String,
    /// Archive URL; archives are not produced, so always `null`
    pub zip_url: Option<String>,
}

/// Everything produced for one batch, shaped for JSON consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// The batch itself
    pub manual_tests: Vec<TestCase>,
    /// Skeleton for the requested framework
    pub automation_skeletons: String,
    /// Gherkin feature
    pub cucumber: String,
    /// Framework key as requested (not the resolved one)
    pub framework: String,
    /// Download payloads
    pub exports: ReportExports,
    /// Assistant chat reply
    pub message: String,
}

impl GenerationReport {
    /// Render every output for `cases`, stamping Markdown with the current time.
    #[must_use]
    pub fn build(cases: Vec<TestCase>, framework: &str) -> Self {
        Self::build_at(cases, framework, Utc::now())
    }

    /// Render every output for `cases` with a fixed Markdown timestamp.
    #[must_use]
    pub fn build_at(cases: Vec<TestCase>, framework: &str, generated_at: DateTime<Utc>) -> Self {
        let cucumber = render_feature(&cases);
        Self {
            automation_skeletons: generate_automation_skeleton(&cases, framework),
            exports: ReportExports {
                markdown: render_markdown_at(&cases, generated_at),
                csv: render_csv(&cases),
                cucumber: cucumber.clone(),
                zip_url: None,
            },
            cucumber,
            framework: framework.to_string(),
            message: assistant_message(cases.len()),
            manual_tests: cases,
        }
    }
}
