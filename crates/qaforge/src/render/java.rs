//! Java skeletons: JUnit 5, TestNG, Selenium (JUnit 5) and REST-Assured.

use crate::model::TestCase;
use crate::naming::{double_quoted, CommentStyle, IdentStyle, MethodNamer};
use crate::writer::{case_comments, SourceWriter};

const INDENT: &str = "    ";

/// Open `public class {name} {`, write `preamble` inside it, then one
/// method per case via `unit`, then close the class.
fn class_file(
    imports: &[&str],
    name: &str,
    cases: &[TestCase],
    preamble: impl FnOnce(&mut SourceWriter),
    mut unit: impl FnMut(&mut SourceWriter, &TestCase, &str),
) -> String {
    let mut w = SourceWriter::new(INDENT);
    w.lines(imports).blank();
    w.line(format!("public class {name} {{"));

    let mut namer = MethodNamer::new(IdentStyle::Java);
    w.indented(|w| {
        preamble(w);
        for case in cases {
            let method = namer.name(case);
            unit(w, case, &method);
            w.line("}").blank();
        }
    });

    w.line("}");
    w.finish()
}

/// JUnit 5 with `@DisplayName` carrying the original title.
pub fn junit(cases: &[TestCase]) -> String {
    class_file(
        &[
            "import org.junit.jupiter.api.*;",
            "import static org.junit.jupiter.api.Assertions.*;",
        ],
        "TestSuite",
        cases,
        |w| {
            w.blank();
        },
        |w, case, method| {
            w.line("@Test");
            w.line(format!("@DisplayName(\"{}\")", double_quoted(&case.title)));
            w.line(format!("public void {method}() {{"));
            w.indented(|w| {
                case_comments(w, CommentStyle::Java, case, false);
                w.line("// TODO: Implement test steps");
            });
        },
    )
}

/// TestNG with the title in the `@Test(description = ...)` attribute.
pub fn testng(cases: &[TestCase]) -> String {
    class_file(
        &[
            "import org.testng.annotations.*;",
            "import static org.testng.Assert.*;",
        ],
        "TestSuite",
        cases,
        |w| {
            w.blank();
        },
        |w, case, method| {
            w.line(format!(
                "@Test(description = \"{}\")",
                double_quoted(&case.title)
            ));
            w.line(format!("public void {method}() {{"));
            w.indented(|w| {
                case_comments(w, CommentStyle::Java, case, false);
                w.line("// TODO: Implement test steps");
            });
        },
    )
}

/// Selenium WebDriver on JUnit 5: one `ChromeDriver` per test, created in
/// `@BeforeEach` and quit in `@AfterEach`.
pub fn selenium_java(cases: &[TestCase]) -> String {
    class_file(
        &[
            "import org.junit.jupiter.api.*;",
            "import org.openqa.selenium.WebDriver;",
            "import org.openqa.selenium.chrome.ChromeDriver;",
            "import static org.junit.jupiter.api.Assertions.*;",
        ],
        "TestSuite",
        cases,
        |w| {
            w.line("private WebDriver driver;").blank();
            w.lines(&["@BeforeEach", "public void setUp() {"]);
            w.indented(|w| {
                w.lines(&[
                    "driver = new ChromeDriver();",
                    "driver.manage().timeouts().implicitlyWait(10, java.util.concurrent.TimeUnit.SECONDS);",
                ]);
            });
            w.line("}").blank();
            w.lines(&["@AfterEach", "public void tearDown() {"]);
            w.indented(|w| {
                w.line("if (driver != null) {");
                w.indented(|w| {
                    w.line("driver.quit();");
                });
                w.line("}");
            });
            w.line("}").blank();
        },
        |w, case, method| {
            w.line("@Test");
            w.line(format!("public void {method}() {{"));
            w.indented(|w| {
                case_comments(w, CommentStyle::Java, case, true);
                w.lines(&[
                    "driver.get(\"YOUR_URL_HERE\");",
                    "// TODO: Implement test steps",
                ]);
            });
        },
    )
}

/// REST-Assured API tests with a `given/when/then` chain expecting 200.
pub fn rest_assured(cases: &[TestCase]) -> String {
    class_file(
        &[
            "import io.restassured.RestAssured;",
            "import io.restassured.response.Response;",
            "import org.junit.jupiter.api.Test;",
            "import static io.restassured.RestAssured.*;",
            "import static org.hamcrest.Matchers.*;",
        ],
        "APITestSuite",
        cases,
        |w| {
            w.blank().line("static {");
            w.indented(|w| {
                w.line("RestAssured.baseURI = \"YOUR_API_BASE_URL\";");
            });
            w.line("}").blank();
        },
        |w, case, method| {
            w.line("@Test");
            w.line(format!("public void {method}() {{"));
            w.indented(|w| {
                case_comments(w, CommentStyle::Java, case, true);
                w.line("given()");
                w.indented(|w| {
                    w.line(".contentType(\"application/json\")");
                });
                w.line(".when()");
                w.indented(|w| {
                    w.line(".get(\"/endpoint\")");
                });
                w.line(".then()");
                w.indented(|w| {
                    w.line(".statusCode(200);");
                });
                w.line("// TODO: Add assertions");
            });
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cases() -> Vec<TestCase> {
        vec![TestCase::new(1, "Login fails!", ["Open page"], "Error shown")]
    }

    #[test]
    fn junit_exact() {
        let expected = r#"import org.junit.jupiter.api.*;
import static org.junit.jupiter.api.Assertions.*;

public class TestSuite {

    @Test
    @DisplayName("Login fails!")
    public void testLoginFails() {
        // Test ID: 1
        // Step 1: Open page
        // Expected: Error shown

        // TODO: Implement test steps
    }

}
"#;
        assert_eq!(junit(&cases()), expected);
    }

    #[test]
    fn testng_description_attribute() {
        let out = testng(&cases());
        assert!(out.contains("    @Test(description = \"Login fails!\")\n    public void testLoginFails() {\n"));
    }

    #[test]
    fn selenium_java_setup_before_tests() {
        let out = selenium_java(&cases());
        assert!(out.starts_with("import org.junit.jupiter.api.*;\n"));
        assert!(out.contains("public class TestSuite {\n    private WebDriver driver;\n\n    @BeforeEach\n"));
        assert!(out.contains("        if (driver != null) {\n            driver.quit();\n        }\n"));
        assert!(out.find("@AfterEach").unwrap() < out.find("@Test").unwrap());
        assert!(out.contains("        // Test ID: 1\n        // Login fails!\n"));
        assert!(out.ends_with("        // TODO: Implement test steps\n    }\n\n}\n"));
    }

    #[test]
    fn rest_assured_chain() {
        let out = rest_assured(&cases());
        assert!(out.contains("public class APITestSuite {\n\n    static {\n        RestAssured.baseURI = \"YOUR_API_BASE_URL\";\n    }\n\n"));
        assert!(out.contains(
            "        given()\n            .contentType(\"application/json\")\n        .when()\n            .get(\"/endpoint\")\n        .then()\n            .statusCode(200);\n"
        ));
    }

    #[test]
    fn quotes_in_annotations_escaped() {
        let cases = vec![TestCase::new(1, r#"Shows "Saved""#, ["a"], "b")];
        assert!(junit(&cases).contains(r#"@DisplayName("Shows \"Saved\"")"#));
        assert!(testng(&cases).contains(r#"@Test(description = "Shows \"Saved\"")"#));
    }

    #[test]
    fn unicode_escapes_broken_in_comments() {
        let cases = vec![TestCase::new(1, "Open report", [r"Open C:\users\qa\report.txt"], "Shown")];
        for render in [junit, testng, selenium_java, rest_assured] {
            let out = render(&cases);
            assert!(out.contains(r"// Step 1: Open C:\\users\qa\report.txt"));
            assert!(!out.contains(r"C:\users"));
        }
    }
}
