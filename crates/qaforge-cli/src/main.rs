//! QA Forge CLI: render test cases into automation skeletons and exports
//!
//! ## Usage
//!
//! ```bash
//! qaforge render --input cases.json --framework pytest     # Skeleton to stdout
//! qaforge render cucumber --input cases.json -o login.feature
//! qaforge report --story "User can reset their password"  # Report JSON
//! qaforge export --input cases.json --out dist --with-feature
//! qaforge verify dist                                      # Check manifest
//! ```

use clap::Parser;
use qaforge_cli::{
    handlers::{
        execute_config, execute_export, execute_formats, execute_render, execute_report,
        execute_verify,
    },
    Cli, CliConfig, CliResult, Commands, StatusReporter, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    init_logging(config.verbosity);
    let reporter = StatusReporter::new(config.color.should_color(), config.verbosity.is_quiet());

    match cli.command {
        Commands::Render(args) => execute_render(&config, &args, &reporter),
        Commands::Report(args) => execute_report(&config, &args, &reporter),
        Commands::Export(args) => execute_export(&config, &args, &reporter).map(|_| ()),
        Commands::Verify(args) => execute_verify(&args, &reporter),
        Commands::Formats => {
            execute_formats();
            Ok(())
        }
        Commands::Config(args) => execute_config(&config, &args),
    }
}

/// File config first, then any verbosity or color given on the command line.
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = CliConfig::load(cli.config.as_deref())?;

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    Ok(config)
}

/// `RUST_LOG` wins; otherwise the level follows verbosity.
fn init_logging(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
