//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions
//! - Tests

pub mod config;
pub mod export;
pub mod formats;
pub mod input;
pub mod render;
pub mod report;
pub mod verify;

// Re-export handlers for convenient access
pub use config::execute_config;
pub use export::execute_export;
pub use formats::{execute_formats, formats_table};
pub use input::{load_batch, parse_batch};
pub use render::{execute_render, render_kind};
pub use report::{build_report, execute_report};
pub use verify::execute_verify;
