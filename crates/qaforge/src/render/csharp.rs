//! C# skeletons: NUnit, xUnit and Selenium on NUnit.

use crate::model::TestCase;
use crate::naming::{double_quoted, CommentStyle, IdentStyle, MethodNamer};
use crate::writer::{case_comments, SourceWriter};

const INDENT: &str = "    ";

/// Shape of one C# test file. Everything except the attributes, the
/// fixture preamble and the placeholder body is shared.
struct CSharpLayout<'a> {
    usings: &'a [&'a str],
    fixture: bool,
    comment_title: bool,
    placeholders: &'a [&'a str],
}

impl CSharpLayout<'_> {
    /// `namespace TestSuite { public class Tests { ... } }` with Allman
    /// braces. `preamble` runs inside the class before the first test;
    /// `attributes` writes the lines above each method signature.
    fn render(
        &self,
        cases: &[TestCase],
        preamble: impl FnOnce(&mut SourceWriter),
        attributes: impl Fn(&mut SourceWriter, &TestCase),
    ) -> String {
        let mut w = SourceWriter::new(INDENT);
        w.lines(self.usings).blank();
        w.lines(&["namespace TestSuite", "{"]);

        let mut namer = MethodNamer::new(IdentStyle::CSharp);
        w.indented(|w| {
            if self.fixture {
                w.line("[TestFixture]");
            }
            w.lines(&["public class Tests", "{"]);
            w.indented(|w| {
                preamble(w);
                for case in cases {
                    attributes(w, case);
                    w.line(format!("public void {}()", namer.name(case)));
                    w.line("{");
                    w.indented(|w| {
                        case_comments(w, CommentStyle::Slash, case, self.comment_title);
                        w.lines(self.placeholders);
                    });
                    w.line("}").blank();
                }
            });
            w.line("}");
        });

        w.line("}");
        w.finish()
    }
}

/// NUnit: `[TestFixture]` class with `[Description]` on every test.
pub fn nunit(cases: &[TestCase]) -> String {
    let layout = CSharpLayout {
        usings: &["using NUnit.Framework;"],
        fixture: true,
        comment_title: false,
        placeholders: &["// TODO: Implement test steps"],
    };
    layout.render(
        cases,
        |w| {
            w.blank();
        },
        |w, case| {
            w.line("[Test]");
            w.line(format!("[Description(\"{}\")]", double_quoted(&case.title)));
        },
    )
}

/// xUnit: `[Fact]` methods, title repeated as a comment.
pub fn xunit(cases: &[TestCase]) -> String {
    let layout = CSharpLayout {
        usings: &["using Xunit;"],
        fixture: false,
        comment_title: true,
        placeholders: &["// TODO: Implement test steps"],
    };
    layout.render(
        cases,
        |w| {
            w.blank();
        },
        |w, _| {
            w.line("[Fact]");
        },
    )
}

/// Selenium WebDriver on NUnit with `[SetUp]`/`[TearDown]` driver lifecycle.
pub fn selenium_csharp(cases: &[TestCase]) -> String {
    let layout = CSharpLayout {
        usings: &[
            "using OpenQA.Selenium;",
            "using OpenQA.Selenium.Chrome;",
            "using NUnit.Framework;",
        ],
        fixture: true,
        comment_title: true,
        placeholders: &[
            "driver.Navigate().GoToUrl(\"YOUR_URL_HERE\");",
            "// TODO: Implement test steps",
        ],
    };
    layout.render(
        cases,
        |w| {
            w.line("private IWebDriver driver;").blank();
            w.lines(&["[SetUp]", "public void Setup()", "{"]);
            w.indented(|w| {
                w.lines(&[
                    "driver = new ChromeDriver();",
                    "driver.Manage().Timeouts().ImplicitWait = TimeSpan.FromSeconds(10);",
                ]);
            });
            w.line("}").blank();
            w.lines(&["[TearDown]", "public void Teardown()", "{"]);
            w.indented(|w| {
                w.line("driver?.Quit();");
            });
            w.line("}").blank();
        },
        |w, _| {
            w.line("[Test]");
        },
    )
}
