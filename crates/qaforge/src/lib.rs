//! QA Forge: deterministic rendering of abstract test cases.
//!
//! Turns an ordered batch of [`TestCase`] values into:
//!
//! - an automation skeleton for one of 17 frameworks ([`Framework`])
//! - a Gherkin feature ([`render_feature`])
//! - CSV and Markdown exports ([`render_csv`], [`render_markdown`])
//!
//! Rendering is pure and total: no I/O, no shared state, and any batch
//! (including an empty one) renders. Validation lives at the boundary in
//! [`validate_batch`]; export bundles with a Blake3 manifest live in
//! [`bundle`].
//!
//! # Example
//!
//! ```
//! use qaforge::prelude::*;
//!
//! let cases = vec![TestCase::new(
//!     1,
//!     "Login works",
//!     ["Open page", "Enter creds", "Submit"],
//!     "Dashboard shown",
//! )];
//!
//! let js = generate_automation_skeleton(&cases, "playwright");
//! assert!(js.contains("test('Login works', async ({ page }) => {"));
//!
//! let feature = render_feature(&cases);
//! assert!(feature.contains("    When Submit\n"));
//! ```

#![warn(missing_docs)]

pub mod artifact;
pub mod bundle;
pub mod error;
pub mod fallback;
pub mod framework;
pub mod gherkin;
pub mod model;
pub mod naming;
pub mod render;
pub mod response;
pub mod tabular;
pub mod writer;

pub use artifact::Artifact;
pub use bundle::{hash_bytes, hash_contents, verify_bundle, BundleManifest, ExportBundle, ManifestEntry};
pub use error::{QaForgeError, Result};
pub use fallback::fallback_test_cases;
pub use framework::{generate_automation_skeleton, Framework, Language};
pub use gherkin::{render_feature, Keyword};
pub use model::{validate_batch, TestCase};
pub use response::{assistant_message, parse_ai_response, GenerationReport, ReportExports};
pub use tabular::{render_csv, render_markdown, render_markdown_at};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::artifact::Artifact;
    pub use crate::bundle::{verify_bundle, BundleManifest, ExportBundle};
    pub use crate::error::QaForgeError;
    pub use crate::fallback::fallback_test_cases;
    pub use crate::framework::{generate_automation_skeleton, Framework, Language};
    pub use crate::gherkin::render_feature;
    pub use crate::model::{validate_batch, TestCase};
    pub use crate::naming::{pascal_case, snake_case, IdentStyle, MethodNamer};
    pub use crate::render::postman::PostmanCollection;
    pub use crate::response::{parse_ai_response, GenerationReport};
    pub use crate::tabular::{render_csv, render_markdown, render_markdown_at};
}
