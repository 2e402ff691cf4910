//! Render command handler

use crate::commands::RenderArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::input::load_batch;
use crate::output::StatusReporter;
use crate::RenderKind;
use qaforge::{generate_automation_skeleton, render_csv, render_feature, render_markdown, Framework, TestCase};
use std::path::Path;

/// Render `cases` as `kind`. `framework` only matters for automation.
#[must_use]
pub fn render_kind(kind: RenderKind, cases: &[TestCase], framework: &str) -> String {
    match kind {
        RenderKind::Automation => generate_automation_skeleton(cases, framework),
        RenderKind::Cucumber => render_feature(cases),
        RenderKind::Csv => render_csv(cases),
        RenderKind::Markdown => render_markdown(cases),
    }
}

/// Write `text` to `output`, or stdout when absent.
pub fn write_output(output: Option<&Path>, text: &str) -> CliResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, text)?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Execute the render command
pub fn execute_render(
    config: &CliConfig,
    args: &RenderArgs,
    reporter: &StatusReporter,
) -> CliResult<()> {
    let cases = load_batch(&args.input)?;
    let framework = args.framework.as_deref().unwrap_or(&config.framework);

    if args.kind == RenderKind::Automation && Framework::from_key(framework).is_none() {
        reporter.warning(&format!(
            "unknown framework '{framework}', rendering as {}",
            Framework::Playwright
        ));
    }

    let text = render_kind(args.kind, &cases, framework);
    write_output(args.output.as_deref(), &text)?;

    if let Some(path) = &args.output {
        reporter.success(&format!(
            "{} test cases rendered to {}",
            cases.len(),
            reporter.dim(&path.display().to_string())
        ));
    }
    Ok(())
}
