//! Framework keys and the skeleton dispatcher.
//!
//! [`Framework`] is the closed set of 17 automation targets. Parsing a key
//! strictly ([`str::parse`]) rejects unknown keys; [`Framework::resolve`]
//! is the lenient path used by the generation flow and falls back to
//! Playwright.

use crate::error::QaForgeError;
use crate::model::TestCase;
use crate::render::{self, RenderFn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Automation framework a skeleton is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Framework {
    /// Playwright Test (JavaScript)
    #[default]
    #[serde(rename = "playwright")]
    Playwright,
    /// Cypress (JavaScript)
    #[serde(rename = "cypress")]
    Cypress,
    /// Jest (JavaScript)
    #[serde(rename = "jest")]
    Jest,
    /// Mocha + chai (JavaScript)
    #[serde(rename = "mocha")]
    Mocha,
    /// Jasmine (JavaScript)
    #[serde(rename = "jasmine")]
    Jasmine,
    /// pytest (Python)
    #[serde(rename = "pytest")]
    Pytest,
    /// pytest + Selenium WebDriver (Python)
    #[serde(rename = "selenium-python")]
    SeleniumPython,
    /// JUnit 5 + Selenium WebDriver (Java)
    #[serde(rename = "selenium-java")]
    SeleniumJava,
    /// JUnit 5 (Java)
    #[serde(rename = "junit")]
    JUnit,
    /// TestNG (Java)
    #[serde(rename = "testng")]
    TestNg,
    /// NUnit (C#)
    #[serde(rename = "nunit")]
    NUnit,
    /// xUnit.net (C#)
    #[serde(rename = "xunit")]
    XUnit,
    /// NUnit + Selenium WebDriver (C#)
    #[serde(rename = "selenium-csharp")]
    SeleniumCSharp,
    /// RSpec (Ruby)
    #[serde(rename = "rspec")]
    RSpec,
    /// Capybara feature specs (Ruby)
    #[serde(rename = "capybara")]
    Capybara,
    /// REST-Assured (Java)
    #[serde(rename = "rest-assured")]
    RestAssured,
    /// Postman collection (JSON)
    #[serde(rename = "postman")]
    Postman,
}

/// Language of a generated skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript
    JavaScript,
    /// Python
    Python,
    /// Java
    Java,
    /// C#
    CSharp,
    /// Ruby
    Ruby,
    /// JSON data
    Json,
}

impl Language {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::CSharp => "C#",
            Self::Ruby => "Ruby",
            Self::Json => "JSON",
        }
    }

    /// MIME type for downloads.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::JavaScript => "text/javascript",
            Self::Python => "text/x-python",
            Self::Java => "text/x-java-source",
            Self::CSharp => "text/plain",
            Self::Ruby => "text/x-ruby",
            Self::Json => "application/json",
        }
    }
}

impl Framework {
    /// Every framework, in menu order.
    pub const ALL: [Self; 17] = [
        Self::Playwright,
        Self::Cypress,
        Self::Jest,
        Self::Mocha,
        Self::Jasmine,
        Self::Pytest,
        Self::SeleniumPython,
        Self::SeleniumJava,
        Self::JUnit,
        Self::TestNg,
        Self::NUnit,
        Self::XUnit,
        Self::SeleniumCSharp,
        Self::RSpec,
        Self::Capybara,
        Self::RestAssured,
        Self::Postman,
    ];

    /// Wire key, e.g. `selenium-python`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Playwright => "playwright",
            Self::Cypress => "cypress",
            Self::Jest => "jest",
            Self::Mocha => "mocha",
            Self::Jasmine => "jasmine",
            Self::Pytest => "pytest",
            Self::SeleniumPython => "selenium-python",
            Self::SeleniumJava => "selenium-java",
            Self::JUnit => "junit",
            Self::TestNg => "testng",
            Self::NUnit => "nunit",
            Self::XUnit => "xunit",
            Self::SeleniumCSharp => "selenium-csharp",
            Self::RSpec => "rspec",
            Self::Capybara => "capybara",
            Self::RestAssured => "rest-assured",
            Self::Postman => "postman",
        }
    }

    /// Look up an exact key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Look up a key, falling back to Playwright for unknown or missing keys.
    #[must_use]
    pub fn resolve(key: Option<&str>) -> Self {
        match key.and_then(Self::from_key) {
            Some(framework) => framework,
            None => {
                tracing::debug!(key = ?key, "unrecognized framework key, using playwright");
                Self::Playwright
            }
        }
    }

    /// Source language of the skeleton.
    #[must_use]
    pub const fn language(self) -> Language {
        match self {
            Self::Playwright | Self::Cypress | Self::Jest | Self::Mocha | Self::Jasmine => {
                Language::JavaScript
            }
            Self::Pytest | Self::SeleniumPython => Language::Python,
            Self::SeleniumJava | Self::JUnit | Self::TestNg | Self::RestAssured => Language::Java,
            Self::NUnit | Self::XUnit | Self::SeleniumCSharp => Language::CSharp,
            Self::RSpec | Self::Capybara => Language::Ruby,
            Self::Postman => Language::Json,
        }
    }

    /// Download file name for the generated skeleton.
    ///
    /// Jest keeps `.test.js` and the other JavaScript runners `.spec.js`;
    /// every other language gets a name its runner discovers.
    #[must_use]
    pub const fn automation_filename(self) -> &'static str {
        match self {
            Self::Jest => "test-automation.test.js",
            Self::Playwright | Self::Cypress | Self::Mocha | Self::Jasmine => {
                "test-automation.spec.js"
            }
            Self::Pytest | Self::SeleniumPython => "test_automation.py",
            Self::SeleniumJava | Self::JUnit | Self::TestNg => "TestSuite.java",
            Self::RestAssured => "APITestSuite.java",
            Self::NUnit | Self::XUnit | Self::SeleniumCSharp => "TestSuite.cs",
            Self::RSpec | Self::Capybara => "test_automation_spec.rb",
            Self::Postman => "test-automation.postman_collection.json",
        }
    }

    /// Renderer for this framework.
    #[must_use]
    pub fn renderer(self) -> RenderFn {
        match self {
            Self::Playwright => render::playwright,
            Self::Cypress => render::cypress,
            Self::Jest => render::jest,
            Self::Mocha => render::mocha,
            Self::Jasmine => render::jasmine,
            Self::Pytest => render::pytest,
            Self::SeleniumPython => render::selenium_python,
            Self::SeleniumJava => render::selenium_java,
            Self::JUnit => render::junit,
            Self::TestNg => render::testng,
            Self::NUnit => render::nunit,
            Self::XUnit => render::xunit,
            Self::SeleniumCSharp => render::selenium_csharp,
            Self::RSpec => render::rspec,
            Self::Capybara => render::capybara,
            Self::RestAssured => render::rest_assured,
            Self::Postman => render::postman,
        }
    }

    /// Render a batch as this framework's skeleton.
    #[must_use]
    pub fn render(self, cases: &[TestCase]) -> String {
        (self.renderer())(cases)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Framework {
    type Err = QaForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| QaForgeError::UnknownFramework(s.to_string()))
    }
}

/// Render `cases` for the framework named by `key`.
///
/// Unknown keys are not an error: they render exactly like `playwright`.
#[must_use]
pub fn generate_automation_skeleton(cases: &[TestCase], key: &str) -> String {
    Framework::resolve(Some(key)).render(cases)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cases() -> Vec<TestCase> {
        vec![
            TestCase::new(1, "Login works", ["Open page", "Submit"], "Dashboard shown"),
            TestCase::new(2, "Logout works", ["Click logout"], "Login page shown"),
        ]
    }

    #[test]
    fn keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = Framework::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), 17);
        for f in Framework::ALL {
            assert_eq!(f.key().parse::<Framework>().unwrap(), f);
            assert_eq!(f.to_string(), f.key());
        }
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&Framework::SeleniumCSharp).unwrap();
        assert_eq!(json, "\"selenium-csharp\"");
        let f: Framework = serde_json::from_str("\"rest-assured\"").unwrap();
        assert_eq!(f, Framework::RestAssured);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "nonexistent-framework".parse::<Framework>().unwrap_err();
        assert!(matches!(err, QaForgeError::UnknownFramework(k) if k == "nonexistent-framework"));
    }

    #[test]
    fn unknown_key_falls_back_to_playwright() {
        let expected = generate_automation_skeleton(&cases(), "playwright");
        assert_eq!(generate_automation_skeleton(&cases(), "nonexistent-framework"), expected);
        assert_eq!(generate_automation_skeleton(&cases(), ""), expected);
        assert_eq!(generate_automation_skeleton(&cases(), "Playwright"), expected);
        assert_eq!(Framework::resolve(None), Framework::Playwright);
    }

    #[test]
    fn dispatch_reaches_each_renderer() {
        let outputs: HashSet<String> = Framework::ALL.iter().map(|f| f.render(&cases())).collect();
        assert_eq!(outputs.len(), 17);
        assert!(generate_automation_skeleton(&cases(), "pytest").starts_with("import pytest\n"));
        assert!(generate_automation_skeleton(&cases(), "rspec").starts_with("require 'spec_helper'\n"));
    }

    #[test]
    fn filenames_follow_language() {
        assert_eq!(Framework::Jest.automation_filename(), "test-automation.test.js");
        assert_eq!(Framework::Cypress.automation_filename(), "test-automation.spec.js");
        assert!(Framework::Pytest.automation_filename().ends_with(".py"));
        assert!(Framework::NUnit.automation_filename().ends_with(".cs"));
        assert!(Framework::Capybara.automation_filename().ends_with("_spec.rb"));
        assert!(Framework::Postman.automation_filename().ends_with(".json"));
        assert_eq!(Framework::Postman.language().mime(), "application/json");
    }
}
