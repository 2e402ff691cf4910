//! QA Forge CLI Library
//!
//! Command-line front end for the `qaforge` renderer: render batches,
//! build generation reports, export and verify bundles.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, ExportArgs, RenderArgs, RenderKind, ReportArgs,
    VerifyArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity, DEFAULT_CONFIG_FILE};
pub use error::{CliError, CliResult};
pub use output::StatusReporter;
