//! Identifier derivation and literal escaping shared by all renderers.
//!
//! Titles are free prose. Before a title lands in generated source it is
//! either turned into a bare identifier (Python, Java, C# method names) or
//! escaped for the quote style of the literal it sits in.

use crate::model::TestCase;
use std::collections::HashSet;

/// Which language family a method name is derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentStyle {
    /// `test_login_fails`
    Python,
    /// `testLoginFails`
    Java,
    /// `TestLoginFails`
    CSharp,
}

impl IdentStyle {
    fn prefix(self) -> &'static str {
        match self {
            Self::Python => "test_",
            Self::Java => "test",
            Self::CSharp => "Test",
        }
    }

    fn stem(self, title: &str) -> String {
        match self {
            Self::Python => snake_case(title),
            Self::Java | Self::CSharp => pascal_case(title),
        }
    }

    fn fallback_stem(self, id: u32) -> String {
        match self {
            Self::Python => format!("case_{id}"),
            Self::Java | Self::CSharp => format!("Case{id}"),
        }
    }

    fn disambiguate(self, name: &str, id: u32) -> String {
        match self {
            Self::Python => format!("{name}_{id}"),
            Self::Java | Self::CSharp => format!("{name}{id}"),
        }
    }
}

/// Lower-case a title and collapse every run of characters outside
/// `[a-z0-9]` into a single `_`, trimming underscores at both ends.
///
/// `"Login fails!"` becomes `login_fails`. May return an empty string.
#[must_use]
pub fn snake_case(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_sep = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Strip everything that is not ASCII alphanumeric, upper-casing the first
/// letter of each remaining word.
///
/// `"Login fails!"` becomes `LoginFails`. May return an empty string.
#[must_use]
pub fn pascal_case(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                let mut w = first.to_ascii_uppercase().to_string();
                w.push_str(chars.as_str());
                w
            })
        })
        .collect()
}

/// Derives unique method names across one rendered file.
///
/// Empty stems fall back to `case_{id}` / `Case{id}`; a name already used
/// in the same file gets the case id appended.
#[derive(Debug)]
pub struct MethodNamer {
    style: IdentStyle,
    used: HashSet<String>,
}

impl MethodNamer {
    /// Create a namer for one output file.
    #[must_use]
    pub fn new(style: IdentStyle) -> Self {
        Self {
            style,
            used: HashSet::new(),
        }
    }

    /// Method name for `case`, including the framework's `test` prefix.
    pub fn name(&mut self, case: &TestCase) -> String {
        let mut stem = self.style.stem(&case.title);
        if stem.is_empty() {
            tracing::debug!(id = case.id, title = %case.title, "title yields no identifier characters");
            stem = self.style.fallback_stem(case.id);
        }

        let mut name = format!("{}{stem}", self.style.prefix());
        // A suffixed name can itself be taken by an earlier title.
        while self.used.contains(&name) {
            let renamed = self.style.disambiguate(&name, case.id);
            tracing::debug!(id = case.id, from = %name, to = %renamed, "method name collision");
            name = renamed;
        }
        self.used.insert(name.clone());
        name
    }
}

/// Escape text for a single-quoted literal (JavaScript, Ruby).
#[must_use]
pub fn single_quoted(text: &str) -> String {
    escape_quoted(text, '\'')
}

/// Escape text for a double-quoted literal (Java, C#, JavaScript).
#[must_use]
pub fn double_quoted(text: &str) -> String {
    escape_quoted(text, '"')
}

fn escape_quoted(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Flatten line breaks so a payload stays on one comment line.
#[must_use]
pub fn comment_text(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Text safe to place on one line of a non-raw Python docstring.
///
/// Backslashes are doubled first so `\U`, `\x` or `\N` in a Windows path
/// cannot start an escape sequence.
#[must_use]
pub fn docstring_text(text: &str) -> String {
    comment_text(text)
        .replace('\\', "\\\\")
        .replace("\"\"\"", "\\\"\\\"\\\"")
}

/// Comment payload for Java, where `\u` is translated before lexing even
/// inside comments.
///
/// A `\u` is a unicode escape only when its backslash run has odd length,
/// so every odd run in front of a `u` gets one more backslash.
#[must_use]
pub fn java_comment_text(text: &str) -> String {
    let flat = comment_text(text);
    let mut out = String::with_capacity(flat.len());
    let mut run = 0usize;
    for c in flat.chars() {
        if c == 'u' && run % 2 == 1 {
            out.push('\\');
        }
        run = if c == '\\' { run + 1 } else { 0 };
        out.push(c);
    }
    out
}

/// Quote a CSV field: wrap in `"` and double every embedded `"`.
#[must_use]
pub fn csv_field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Line-comment syntax of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// text`
    Slash,
    /// `// text` with unicode escapes broken up, for Java sources.
    Java,
    /// `# text`
    Hash,
}

impl CommentStyle {
    /// The comment marker, without trailing space.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Slash | Self::Java => "//",
            Self::Hash => "#",
        }
    }

    /// Make `text` safe to follow the marker on a single line.
    #[must_use]
    pub fn payload(self, text: &str) -> String {
        match self {
            Self::Java => java_comment_text(text),
            Self::Slash | Self::Hash => comment_text(text),
        }
    }
}
