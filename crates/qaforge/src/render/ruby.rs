//! Ruby skeletons: RSpec and Capybara feature specs.

use crate::model::TestCase;
use crate::naming::{single_quoted, CommentStyle};
use crate::writer::{case_comments, SourceWriter};

const INDENT: &str = "  ";

fn spec_file(
    requires: &[&str],
    describe: &str,
    keyword: &str,
    cases: &[TestCase],
    placeholders: &[&str],
) -> String {
    let mut w = SourceWriter::new(INDENT);
    w.lines(requires).blank();
    w.line(describe).blank();

    w.indented(|w| {
        for case in cases {
            w.line(format!("{keyword} '{}' do", single_quoted(&case.title)));
            w.indented(|w| {
                case_comments(w, CommentStyle::Hash, case, false);
                w.lines(placeholders);
            });
            w.line("end").blank();
        }
    });

    w.line("end");
    w.finish()
}

/// RSpec: `it` examples inside one `RSpec.describe`.
pub fn rspec(cases: &[TestCase]) -> String {
    spec_file(
        &["require 'spec_helper'"],
        "RSpec.describe 'Test Suite' do",
        "it",
        cases,
        &["# TODO: Implement test steps"],
    )
}

/// Capybara: `scenario` blocks in a `type: :feature` spec.
pub fn capybara(cases: &[TestCase]) -> String {
    spec_file(
        &["require 'spec_helper'", "require 'capybara/rspec'"],
        "RSpec.describe 'Test Suite', type: :feature do",
        "scenario",
        cases,
        &[
            "visit 'YOUR_URL_HERE'",
            "# TODO: Implement test steps",
            "# Example: fill_in 'Username', with: 'testuser'",
            "# Example: click_button 'Submit'",
            "# Example: expect(page).to have_content('Success')",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rspec_exact() {
        let cases = vec![TestCase::new(3, "Login with empty fields", ["Leave fields empty"], "Errors shown")];
        let expected = "\
require 'spec_helper'

RSpec.describe 'Test Suite' do

  it 'Login with empty fields' do
    # Test ID: 3
    # Step 1: Leave fields empty
    # Expected: Errors shown

    # TODO: Implement test steps
  end

end
";
        assert_eq!(rspec(&cases), expected);
    }

    #[test]
    fn capybara_feature_spec() {
        let cases = vec![TestCase::new(1, "Visitor's login", ["Open"], "Welcome")];
        let out = capybara(&cases);
        assert!(out.starts_with("require 'spec_helper'\nrequire 'capybara/rspec'\n\nRSpec.describe 'Test Suite', type: :feature do\n\n"));
        assert!(out.contains("  scenario 'Visitor\\'s login' do\n"));
        assert!(out.contains("    visit 'YOUR_URL_HERE'\n"));
        assert!(out.contains("    # Example: expect(page).to have_content('Success')\n  end\n"));
    }
}
