//! Python skeletons: plain pytest and pytest + Selenium WebDriver.

use crate::model::TestCase;
use crate::naming::{docstring_text, CommentStyle, IdentStyle, MethodNamer};
use crate::writer::SourceWriter;

const INDENT: &str = "    ";

/// pytest class with one method per case. The id, steps and expected
/// result live in the method docstring.
pub fn pytest(cases: &[TestCase]) -> String {
    let mut w = SourceWriter::new(INDENT);
    w.line("import pytest").blank();
    w.line("class TestSuite:");

    let mut namer = MethodNamer::new(IdentStyle::Python);
    w.indented(|w| {
        for case in cases {
            w.line(format!("def {}(self):", namer.name(case)));
            w.indented(|w| {
                w.line("\"\"\"");
                w.line(format!("Test ID: {}", case.id));
                w.line(docstring_text(&case.title)).blank();
                for (index, step) in case.steps.iter().enumerate() {
                    w.line(format!("Step {}: {}", index + 1, docstring_text(step)));
                }
                w.line(format!("Expected: {}", docstring_text(&case.expected)));
                w.line("\"\"\"");
                w.lines(&["# TODO: Implement test steps", "pass"]);
            });
            w.blank();
        }
    });

    w.finish()
}

/// pytest + Selenium: an autouse fixture creates and quits the Chrome
/// driver around every test.
pub fn selenium_python(cases: &[TestCase]) -> String {
    let mut w = SourceWriter::new(INDENT);
    w.lines(&[
        "import pytest",
        "from selenium import webdriver",
        "from selenium.webdriver.common.by import By",
        "from selenium.webdriver.support.ui import WebDriverWait",
        "from selenium.webdriver.support import expected_conditions as EC",
    ])
    .blank();
    w.line("class TestSuite:");

    let mut namer = MethodNamer::new(IdentStyle::Python);
    w.indented(|w| {
        w.lines(&["@pytest.fixture(autouse=True)", "def setup(self):"]);
        w.indented(|w| {
            w.lines(&[
                "self.driver = webdriver.Chrome()",
                "self.driver.implicitly_wait(10)",
                "yield",
                "self.driver.quit()",
            ]);
        });
        w.blank();

        for case in cases {
            w.line(format!("def {}(self):", namer.name(case)));
            w.indented(|w| {
                w.line("\"\"\"");
                w.line(format!("Test ID: {}", case.id));
                w.line(docstring_text(&case.title));
                w.line("\"\"\"");
                for (index, step) in case.steps.iter().enumerate() {
                    w.comment(CommentStyle::Hash, format!("Step {}: {step}", index + 1));
                }
                w.comment(CommentStyle::Hash, format!("Expected: {}", case.expected));
                w.blank();
                w.lines(&[
                    "self.driver.get(\"YOUR_URL_HERE\")",
                    "# TODO: Implement test steps",
                    "pass",
                ]);
            });
            w.blank();
        }
    });

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pytest_exact() {
        let cases = vec![TestCase::new(1, "Login fails!", ["Open page", "Submit"], "Error shown")];
        let expected = r#"import pytest

class TestSuite:
    def test_login_fails(self):
        """
        Test ID: 1
        Login fails!

        Step 1: Open page
        Step 2: Submit
        Expected: Error shown
        """
        # TODO: Implement test steps
        pass

"#;
        assert_eq!(pytest(&cases), expected);
    }

    #[test]
    fn selenium_fixture_emitted_once() {
        let cases = vec![
            TestCase::new(1, "First", ["a"], "x"),
            TestCase::new(2, "Second", ["b"], "y"),
        ];
        let out = selenium_python(&cases);
        assert_eq!(out.matches("@pytest.fixture(autouse=True)").count(), 1);
        assert_eq!(out.matches("self.driver.quit()").count(), 1);
        assert!(out.find("def setup(self):").unwrap() < out.find("def test_first(self):").unwrap());
        assert!(out.contains("        # Step 1: a\n        # Expected: x\n\n        self.driver.get(\"YOUR_URL_HERE\")\n"));
    }

    #[test]
    fn degenerate_and_duplicate_titles_stay_unique() {
        let cases = vec![
            TestCase::new(1, "Login", ["a"], "x"),
            TestCase::new(2, "LOGIN", ["a"], "x"),
            TestCase::new(3, "%%%", ["a"], "x"),
        ];
        let out = pytest(&cases);
        assert!(out.contains("def test_login(self):"));
        assert!(out.contains("def test_login_2(self):"));
        assert!(out.contains("def test_case_3(self):"));
    }

    #[test]
    fn windows_paths_in_docstrings_are_escaped() {
        let cases = vec![TestCase::new(
            1,
            r"Upload from C:\Users\qa\x_reports",
            [r"Pick C:\Users\qa"],
            "Uploaded",
        )];
        let out = pytest(&cases);
        assert!(out.contains(r"        Upload from C:\\Users\\qa\\x_reports"));
        assert!(out.contains(r"        Step 1: Pick C:\\Users\\qa"));
        assert!(selenium_python(&cases).contains(r"        Upload from C:\\Users\\qa\\x_reports"));
    }
}
