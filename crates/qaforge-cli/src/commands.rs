//! CLI command definitions using clap

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// QA Forge: turn abstract test cases into automation skeletons and exports
#[derive(Parser, Debug)]
#[command(name = "qaforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never); overrides the config file
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// Config file (defaults to ./.qaforge.yaml when present)
    #[arg(long, global = true, env = "QAFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a batch in one output format
    Render(RenderArgs),

    /// Print the full generation report as JSON
    Report(ReportArgs),

    /// Write an export bundle with a manifest
    Export(ExportArgs),

    /// Verify an export bundle against its manifest
    Verify(VerifyArgs),

    /// List supported automation frameworks
    Formats,

    /// Show configuration
    Config(ConfigArgs),
}

/// What `render` produces
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderKind {
    /// Automation skeleton for `--framework`
    #[default]
    Automation,
    /// Gherkin feature
    Cucumber,
    /// CSV table
    Csv,
    /// Markdown document
    Markdown,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Output kind
    #[arg(value_enum, default_value = "automation")]
    pub kind: RenderKind,

    /// Test case file: a JSON array or a raw model reply ("-" for stdin)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Framework key; unknown keys render as playwright
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the report command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "story"])))]
pub struct ReportArgs {
    /// Test case file: a JSON array or a raw model reply ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// User story; test cases come from the built-in fallback sets
    #[arg(short, long)]
    pub story: Option<String>,

    /// Framework key; echoed as given, rendered leniently
    #[arg(short, long)]
    pub framework: Option<String>,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Test case file: a JSON array or a raw model reply ("-" for stdin)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Framework key; must be one of `qaforge formats`
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Include test-cases.feature
    #[arg(long)]
    pub with_feature: bool,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Bundle directory
    pub dir: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show effective configuration
    #[arg(long)]
    pub show: bool,

    /// Show built-in defaults
    #[arg(long, conflicts_with = "show")]
    pub default: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_defaults_to_automation() {
        let cli = Cli::parse_from(["qaforge", "render", "--input", "cases.json"]);
        if let Commands::Render(args) = cli.command {
            assert_eq!(args.kind, RenderKind::Automation);
            assert_eq!(args.input, PathBuf::from("cases.json"));
            assert!(args.framework.is_none());
        } else {
            panic!("expected Render command");
        }
    }

    #[test]
    fn test_parse_render_kind_and_framework() {
        let cli = Cli::parse_from([
            "qaforge", "render", "csv", "-i", "c.json", "-f", "pytest", "-o", "out.csv",
        ]);
        if let Commands::Render(args) = cli.command {
            assert_eq!(args.kind, RenderKind::Csv);
            assert_eq!(args.framework.as_deref(), Some("pytest"));
            assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        } else {
            panic!("expected Render command");
        }
    }

    #[test]
    fn test_report_requires_a_source() {
        assert!(Cli::try_parse_from(["qaforge", "report"]).is_err());
        assert!(Cli::try_parse_from(["qaforge", "report", "-i", "a", "-s", "b"]).is_err());
        assert!(Cli::try_parse_from(["qaforge", "report", "--story", "login"]).is_ok());
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from([
            "qaforge", "export", "-i", "c.json", "--out", "dist", "--with-feature",
        ]);
        if let Commands::Export(args) = cli.command {
            assert_eq!(args.out, Some(PathBuf::from("dist")));
            assert!(args.with_feature);
        } else {
            panic!("expected Export command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["qaforge", "-vv", "--color", "never", "formats"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorArg::Never));
        assert!(matches!(cli.command, Commands::Formats));
    }

    #[test]
    fn test_config_show_and_default_conflict() {
        assert!(Cli::try_parse_from(["qaforge", "config", "--show", "--default"]).is_err());
    }

    #[test]
    fn test_color_arg_conversion() {
        use crate::config::ColorChoice;
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
    }
}
