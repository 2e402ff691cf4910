//! Cross-format tests for qaforge.
//!
//! These tests exercise every renderer through the public dispatcher and
//! check the properties all formats share: order, unit counts, fallback.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use qaforge::prelude::*;

fn login_batch() -> Vec<TestCase> {
    vec![
        TestCase::new(
            1,
            "Login works",
            ["Open page", "Enter creds", "Submit"],
            "Dashboard shown",
        ),
        TestCase::new(
            2,
            "Login fails!",
            ["Open page", "Enter bad password", "Submit"],
            "Error \"Invalid credentials\" shown",
        ),
        TestCase::new(3, "Remember me", ["Tick remember me"], "Session persists"),
    ]
}

/// Lines that open one test unit in each framework's output.
fn count_units(framework: Framework, output: &str) -> usize {
    let starts = |prefix: &str| {
        output
            .lines()
            .filter(|l| l.trim_start().starts_with(prefix))
            .count()
    };
    match framework {
        Framework::Playwright | Framework::Jest => starts("test('"),
        Framework::Cypress | Framework::Mocha | Framework::Jasmine => starts("it('"),
        Framework::Pytest | Framework::SeleniumPython => starts("def test_"),
        Framework::JUnit
        | Framework::TestNg
        | Framework::SeleniumJava
        | Framework::RestAssured => starts("@Test"),
        Framework::NUnit | Framework::SeleniumCSharp => starts("[Test]"),
        Framework::XUnit => starts("[Fact]"),
        Framework::RSpec => starts("it '"),
        Framework::Capybara => starts("scenario '"),
        Framework::Postman => {
            let collection: PostmanCollection = serde_json::from_str(output).unwrap();
            collection.item.len()
        }
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

#[test]
fn every_framework_emits_one_unit_per_case() {
    let cases = login_batch();
    for framework in Framework::ALL {
        let out = generate_automation_skeleton(&cases, framework.key());
        assert_eq!(count_units(framework, &out), cases.len(), "{framework}");
    }
}

#[test]
fn every_framework_handles_empty_batch() {
    for framework in Framework::ALL {
        let out = framework.render(&[]);
        assert!(!out.is_empty(), "{framework} should still emit a header");
        assert_eq!(count_units(framework, &out), 0, "{framework}");
    }
}

#[test]
fn titles_appear_in_input_order() {
    let mut reversed = login_batch();
    reversed.reverse();
    let mut rotated = login_batch();
    rotated.rotate_left(1);

    for cases in [reversed, rotated] {
        for framework in Framework::ALL {
            let out = framework.render(&cases);
            let positions: Vec<_> = cases
                .iter()
                .map(|c| out.find(&format!("Test ID: {}", c.id)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{framework}");
        }
    }
}

#[test]
fn unknown_framework_is_playwright_byte_for_byte() {
    let cases = login_batch();
    assert_eq!(
        generate_automation_skeleton(&cases, "nonexistent-framework"),
        generate_automation_skeleton(&cases, "playwright")
    );
}

#[test]
fn rendering_is_deterministic() {
    let cases = login_batch();
    for framework in Framework::ALL {
        assert_eq!(framework.render(&cases), framework.render(&cases));
    }
    assert_eq!(render_csv(&cases), render_csv(&cases));
    assert_eq!(render_feature(&cases), render_feature(&cases));
}

// ============================================================================
// Identifier derivation
// ============================================================================

#[test]
fn pytest_and_junit_names_from_punctuated_title() {
    let cases = vec![TestCase::new(2, "Login fails!", ["Submit"], "Error")];
    assert!(generate_automation_skeleton(&cases, "pytest").contains("def test_login_fails(self):"));
    assert!(generate_automation_skeleton(&cases, "junit").contains("public void testLoginFails() {"));
    assert!(generate_automation_skeleton(&cases, "nunit").contains("public void TestLoginFails()"));
}

#[test]
fn duplicate_titles_get_distinct_methods() {
    let cases = vec![
        TestCase::new(1, "Same title", ["a"], "x"),
        TestCase::new(2, "Same title", ["b"], "y"),
    ];
    let py = Framework::Pytest.render(&cases);
    assert!(py.contains("def test_same_title(self):"));
    assert!(py.contains("def test_same_title_2(self):"));

    let java = Framework::JUnit.render(&cases);
    assert!(java.contains("public void testSameTitle() {"));
    assert!(java.contains("public void testSameTitle2() {"));
}

#[test]
fn symbol_only_title_still_yields_identifier() {
    let cases = vec![TestCase::new(9, "!!!", ["a"], "x")];
    assert!(Framework::Pytest.render(&cases).contains("def test_case_9(self):"));
    assert!(Framework::XUnit.render(&cases).contains("public void TestCase9()"));
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn quotes_in_titles_are_escaped_per_literal_style() {
    let cases = vec![TestCase::new(1, "User's \"profile\"", ["Open"], "Shown")];
    assert!(Framework::Playwright
        .render(&cases)
        .contains(r#"test('User\'s "profile"', async ({ page }) => {"#));
    assert!(Framework::RSpec
        .render(&cases)
        .contains(r#"it 'User\'s "profile"' do"#));
    assert!(Framework::JUnit
        .render(&cases)
        .contains(r#"@DisplayName("User's \"profile\"")"#));
}

#[test]
fn postman_survives_hostile_text() {
    let cases = vec![TestCase::new(
        1,
        "Quote \" backslash \\ newline\n end",
        ["Step with \"quotes\""],
        "{ \"ok\": true }",
    )];
    let out = Framework::Postman.render(&cases);
    let parsed: PostmanCollection = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.item[0].name, cases[0].title);
}

// ============================================================================
// Gherkin, CSV, Markdown
// ============================================================================

#[test]
fn feature_parses_with_gherkin_crate() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("login.feature");
    std::fs::write(&path, render_feature(&login_batch())).unwrap();

    let feature = gherkin::Feature::parse_path(&path, gherkin::GherkinEnv::default()).unwrap();
    assert_eq!(feature.name, "Test Suite");
    assert_eq!(feature.scenarios.len(), 3);

    let first = &feature.scenarios[0];
    assert_eq!(first.name, "Login works");
    let keywords: Vec<_> = first.steps.iter().map(|s| s.keyword.trim()).collect();
    assert_eq!(keywords, ["Given", "And", "When", "Then"]);
    assert_eq!(first.steps[3].value, "Dashboard shown");

    let single = &feature.scenarios[2];
    let keywords: Vec<_> = single.steps.iter().map(|s| s.keyword.trim()).collect();
    assert_eq!(keywords, ["Given", "Then"]);
}

#[test]
fn csv_has_header_plus_one_row_per_case() {
    let csv = render_csv(&login_batch());
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "ID,Title,Steps,Expected Result");
    assert_eq!(
        lines[2],
        r#"2,"Login fails!","Open page | Enter bad password | Submit","Error ""Invalid credentials"" shown""#
    );
}

#[test]
fn markdown_sections_follow_batch() {
    let md = render_markdown(&login_batch());
    assert!(md.starts_with("# Test Cases\n\nGenerated on: "));
    assert_eq!(md.matches("### Steps").count(), 3);
    assert_eq!(md.matches("---\n").count(), 3);
    assert!(md.contains("## 3. Remember me\n\n### Steps\n\n1. Tick remember me\n"));
}

// ============================================================================
// Boundary helpers
// ============================================================================

#[test]
fn fallback_batches_render_everywhere() {
    for story in ["User can log in", "Reset my password", "Export a report"] {
        let cases = fallback_test_cases(story);
        validate_batch(&cases).unwrap();
        for framework in Framework::ALL {
            assert_eq!(count_units(framework, &framework.render(&cases)), cases.len());
        }
    }
}

#[test]
fn ai_reply_to_report() {
    let reply = "Here are the tests:\n```json\n[{\"id\":1,\"title\":\"Checkout\",\"steps\":[\"Add item\",\"Pay\"],\"expected\":\"Order placed\"}]\n```";
    let cases = parse_ai_response(reply).unwrap();
    validate_batch(&cases).unwrap();

    let report = GenerationReport::build(cases, "cypress");
    assert!(report.automation_skeletons.contains("it('Checkout', () => {"));
    assert!(report.message.starts_with("I've generated 1 comprehensive test case for"));
    assert_eq!(report.exports.cucumber, report.cucumber);
}
