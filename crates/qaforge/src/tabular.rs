//! CSV and Markdown exports of a batch.

use crate::model::TestCase;
use crate::naming::csv_field;
use chrono::{DateTime, SecondsFormat, Utc};

/// CSV header row, without the trailing newline.
pub const CSV_HEADER: &str = "ID,Title,Steps,Expected Result";

/// Separator used to flatten steps into one CSV field.
pub const STEP_SEPARATOR: &str = " | ";

/// One header row plus one newline-terminated row per case.
///
/// Title, joined steps and expected result are quoted; the id is not.
#[must_use]
pub fn render_csv(cases: &[TestCase]) -> String {
    let mut csv = format!("{CSV_HEADER}\n");
    for case in cases {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            case.id,
            csv_field(&case.title),
            csv_field(&case.steps.join(STEP_SEPARATOR)),
            csv_field(&case.expected)
        ));
    }
    csv
}

/// Markdown document stamped with the current time.
#[must_use]
pub fn render_markdown(cases: &[TestCase]) -> String {
    render_markdown_at(cases, Utc::now())
}

/// Markdown document stamped with `generated_at`.
#[must_use]
pub fn render_markdown_at(cases: &[TestCase], generated_at: DateTime<Utc>) -> String {
    let mut md = String::from("# Test Cases\n\n");
    md.push_str(&format!("Generated on: {}\n\n", iso_timestamp(generated_at)));

    for case in cases {
        md.push_str(&format!("## {}. {}\n\n", case.id, case.title));
        md.push_str("### Steps\n\n");
        for (index, step) in case.steps.iter().enumerate() {
            md.push_str(&format!("{}. {step}\n", index + 1));
        }
        md.push_str("\n### Expected Result\n\n");
        md.push_str(&format!("{}\n\n", case.expected));
        md.push_str("---\n\n");
    }

    md
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
