//! Automation skeleton renderers, one function per framework.
//!
//! Every renderer is a pure `fn(&[TestCase]) -> String`: a fixed header,
//! one test unit per case in input order, and a fixed footer where the
//! format wraps tests in a suite. Test bodies hold comments and
//! placeholders only; nothing is derived from the free-form expected text.
//!
//! Use [`crate::framework::Framework`] to pick a renderer by key.

mod csharp;
mod java;
mod javascript;
pub mod postman;
mod python;
mod ruby;

use crate::model::TestCase;

pub use csharp::{nunit, selenium_csharp, xunit};
pub use java::{junit, rest_assured, selenium_java, testng};
pub use javascript::{cypress, jasmine, jest, mocha, playwright};
pub use postman::postman;
pub use python::{pytest, selenium_python};
pub use ruby::{capybara, rspec};

/// Signature shared by every skeleton renderer.
pub type RenderFn = fn(&[TestCase]) -> String;
