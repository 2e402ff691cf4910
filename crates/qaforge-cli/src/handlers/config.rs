//! Config command handler

use crate::commands::ConfigArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the config command
///
/// With no flag the effective configuration is shown.
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let shown = if args.default {
        CliConfig::default()
    } else {
        config.clone()
    };
    print!("{}", shown.to_yaml()?);
    Ok(())
}
