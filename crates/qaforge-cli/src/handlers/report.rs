//! Report command handler

use crate::commands::ReportArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::input::load_batch;
use crate::output::StatusReporter;
use qaforge::{fallback_test_cases, GenerationReport};

/// Build the report for the batch named by `args`.
pub fn build_report(config: &CliConfig, args: &ReportArgs) -> CliResult<GenerationReport> {
    let cases = match (&args.input, &args.story) {
        (Some(path), None) => load_batch(path)?,
        (None, Some(story)) => {
            if story.trim().is_empty() {
                return Err(CliError::invalid_argument("story is required"));
            }
            fallback_test_cases(story)
        }
        _ => {
            return Err(CliError::invalid_argument(
                "exactly one of --input or --story is required",
            ))
        }
    };

    let framework = args.framework.as_deref().unwrap_or(&config.framework);
    Ok(GenerationReport::build(cases, framework))
}

/// Execute the report command
pub fn execute_report(
    config: &CliConfig,
    args: &ReportArgs,
    reporter: &StatusReporter,
) -> CliResult<()> {
    let report = build_report(config, args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    reporter.info(&format!(
        "{} test cases, framework {}",
        report.manual_tests.len(),
        report.framework
    ));
    Ok(())
}
