//! Loading test case batches from files or stdin

use crate::error::{CliError, CliResult};
use qaforge::{parse_ai_response, validate_batch, TestCase};
use std::io::Read;
use std::path::Path;

/// Read `path`, or stdin when it is `-`.
pub fn read_source(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|e| CliError::input(path.display().to_string(), e.to_string()))
}

/// Parse and validate a batch.
///
/// Accepts a plain JSON array of test cases, or a model reply with the array
/// embedded in prose or code fences.
pub fn parse_batch(text: &str) -> qaforge::Result<Vec<TestCase>> {
    let cases = match serde_json::from_str::<Vec<TestCase>>(text.trim()) {
        Ok(cases) => cases,
        Err(e) => {
            tracing::debug!(error = %e, "input is not a bare JSON array, scanning reply text");
            parse_ai_response(text)?
        }
    };
    validate_batch(&cases)?;
    tracing::debug!(count = cases.len(), "batch validated");
    Ok(cases)
}

/// Read, parse and validate the batch at `path`.
pub fn load_batch(path: &Path) -> CliResult<Vec<TestCase>> {
    let text = read_source(path)?;
    parse_batch(&text).map_err(|e| CliError::input(path.display().to_string(), e.to_string()))
}
