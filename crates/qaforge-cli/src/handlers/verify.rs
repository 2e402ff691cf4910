//! Verify command handler

use crate::commands::VerifyArgs;
use crate::error::CliResult;
use crate::output::StatusReporter;
use qaforge::{verify_bundle, QaForgeError};

/// Execute the verify command
pub fn execute_verify(args: &VerifyArgs, reporter: &StatusReporter) -> CliResult<()> {
    match verify_bundle(&args.dir) {
        Ok(manifest) => {
            for entry in &manifest.entries {
                reporter.success(&entry.path);
            }
            reporter.info(&format!(
                "{} files match {} ({} test cases, {})",
                manifest.entries.len(),
                qaforge::bundle::MANIFEST_FILE,
                manifest.case_count,
                manifest.framework
            ));
            Ok(())
        }
        Err(e) => {
            if let QaForgeError::HashMismatch { path, .. } = &e {
                reporter.failure(&format!("{path} was modified after export"));
            }
            Err(e.into())
        }
    }
}
