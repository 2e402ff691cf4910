//! Export command handler

use crate::commands::ExportArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::input::load_batch;
use crate::output::StatusReporter;
use qaforge::{BundleManifest, ExportBundle, Framework};
use std::path::PathBuf;

/// Leading hash characters shown per exported file
const SHORT_HASH: usize = 12;

/// Execute the export command
///
/// Unlike `render`, the framework key is parsed strictly: the bundle's file
/// names depend on it.
pub fn execute_export(
    config: &CliConfig,
    args: &ExportArgs,
    reporter: &StatusReporter,
) -> CliResult<BundleManifest> {
    let cases = load_batch(&args.input)?;
    let framework: Framework = args
        .framework
        .as_deref()
        .unwrap_or(&config.framework)
        .parse()?;
    let dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let manifest = ExportBundle::new(&cases, framework)
        .with_feature(args.with_feature || config.with_feature)
        .write_bundle(&dir)?;

    reporter.header("Export");
    for entry in &manifest.entries {
        let short = entry.hash.get(..SHORT_HASH).unwrap_or(&entry.hash);
        reporter.success(&format!(
            "{} ({} bytes) {}",
            entry.path,
            entry.bytes,
            reporter.dim(short)
        ));
    }
    reporter.info(&format!(
        "{} test cases exported to {}",
        manifest.case_count,
        dir.display()
    ));
    Ok(manifest)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use qaforge::TestCase;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("cases.json");
        let cases = vec![
            TestCase::new(1, "Login works", ["Open", "Submit"], "Dashboard"),
            TestCase::new(2, "Logout works", ["Click logout"], "Login page"),
        ];
        std::fs::write(&input, serde_json::to_string(&cases).unwrap()).unwrap();
        (dir, input)
    }

    fn quiet() -> StatusReporter {
        StatusReporter::new(false, true)
    }

    #[test]
    fn test_export_writes_bundle() {
        let (dir, input) = setup();
        let out = dir.path().join("bundle");
        let args = ExportArgs {
            input,
            framework: Some("selenium-java".to_string()),
            out: Some(out.clone()),
            with_feature: false,
        };
        let manifest = execute_export(&CliConfig::new(), &args, &quiet()).unwrap();

        assert_eq!(manifest.case_count, 2);
        assert_eq!(manifest.entries.len(), 3);
        assert!(out.join("TestSuite.java").exists());
        assert!(out.join(qaforge::bundle::MANIFEST_FILE).exists());
        assert!(!out.join("test-cases.feature").exists());
    }

    #[test]
    fn test_config_can_enable_feature_file() {
        let (dir, input) = setup();
        let out = dir.path().join("bundle");
        let args = ExportArgs {
            input,
            framework: None,
            out: Some(out.clone()),
            with_feature: false,
        };
        let config = CliConfig::new().with_feature(true);
        execute_export(&config, &args, &quiet()).unwrap();
        assert!(out.join("test-cases.feature").exists());
        assert!(out.join("test-automation.spec.js").exists());
    }

    #[test]
    fn test_unknown_framework_rejected() {
        let (dir, input) = setup();
        let args = ExportArgs {
            input,
            framework: Some("karma".to_string()),
            out: Some(dir.path().join("bundle")),
            with_feature: false,
        };
        let err = execute_export(&CliConfig::new(), &args, &quiet()).unwrap_err();
        assert!(matches!(
            err,
            CliError::QaForge(qaforge::QaForgeError::UnknownFramework(_))
        ));
    }
}
