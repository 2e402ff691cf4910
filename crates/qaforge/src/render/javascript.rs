//! JavaScript skeletons: Playwright, Cypress, Jest, Mocha, Jasmine.

use crate::model::TestCase;
use crate::naming::{single_quoted, CommentStyle};
use crate::writer::{case_comments, SourceWriter};

const INDENT: &str = "  ";

/// Playwright Test: top-level `test()` calls with the `page` fixture.
pub fn playwright(cases: &[TestCase]) -> String {
    let mut w = SourceWriter::new(INDENT);
    w.line("import { test, expect } from '@playwright/test';").blank();

    for case in cases {
        w.line(format!(
            "test('{}', async ({{ page }}) => {{",
            single_quoted(&case.title)
        ));
        w.indented(|w| {
            case_comments(w, CommentStyle::Slash, case, false);
            w.lines(&[
                "// TODO: Implement test steps",
                "await page.goto('YOUR_URL_HERE');",
                "// Add your test implementation here",
            ]);
        });
        w.line("});").blank();
    }

    w.finish()
}

/// Jest: `test()` blocks inside one `describe`.
pub fn jest(cases: &[TestCase]) -> String {
    describe_suite("describe('Test Suite', () => {", cases, |w, case| {
        w.line(format!("test('{}', () => {{", single_quoted(&case.title)));
        w.indented(|w| {
            case_comments(w, CommentStyle::Slash, case, false);
            w.lines(&[
                "// TODO: Implement test steps",
                "// Add your test implementation here",
            ]);
        });
    })
}

/// Cypress: `it()` blocks visiting a placeholder URL.
pub fn cypress(cases: &[TestCase]) -> String {
    describe_suite("describe('Test Suite', () => {", cases, |w, case| {
        w.line(format!("it('{}', () => {{", single_quoted(&case.title)));
        w.indented(|w| {
            case_comments(w, CommentStyle::Slash, case, false);
            w.lines(&[
                "cy.visit('YOUR_URL_HERE');",
                "// Add your test implementation here",
            ]);
        });
    })
}

/// Mocha with chai: classic `function()` callbacks.
pub fn mocha(cases: &[TestCase]) -> String {
    let body = describe_suite("describe('Test Suite', function() {", cases, |w, case| {
        w.line(format!("it('{}', function() {{", single_quoted(&case.title)));
        w.indented(|w| {
            case_comments(w, CommentStyle::Slash, case, false);
            w.line("// TODO: Implement test steps");
        });
    });
    format!("const {{ expect }} = require('chai');\n\n{body}")
}

/// Jasmine: `it()` blocks with an `expect` hint.
pub fn jasmine(cases: &[TestCase]) -> String {
    describe_suite("describe('Test Suite', () => {", cases, |w, case| {
        w.line(format!("it('{}', () => {{", single_quoted(&case.title)));
        w.indented(|w| {
            case_comments(w, CommentStyle::Slash, case, false);
            w.lines(&[
                "// TODO: Implement test steps",
                "// expect(result).toBe(expected);",
            ]);
        });
    })
}

/// Wrap per-case blocks in a `describe(...)` suite. `unit` writes the opening
/// line and body of one test; the closing `});` is added here.
fn describe_suite(
    opening: &str,
    cases: &[TestCase],
    unit: impl Fn(&mut SourceWriter, &TestCase),
) -> String {
    let mut w = SourceWriter::new(INDENT);
    w.line(opening).blank();
    w.indented(|w| {
        for case in cases {
            unit(w, case);
            w.line("});").blank();
        }
    });
    w.line("});");
    w.finish()
}
