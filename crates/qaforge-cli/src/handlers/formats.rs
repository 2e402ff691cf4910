//! Formats command handler

use qaforge::Framework;

/// One row per framework: key, language, download file name.
#[must_use]
pub fn formats_table() -> String {
    let width = Framework::ALL
        .iter()
        .map(|f| f.key().len())
        .max()
        .unwrap_or_default();

    let mut table = String::new();
    for framework in Framework::ALL {
        table.push_str(&format!(
            "{:<width$}  {:<10}  {}\n",
            framework.key(),
            framework.language().name(),
            framework.automation_filename(),
        ));
    }
    table
}

/// Execute the formats command
pub fn execute_formats() {
    print!("{}", formats_table());
}
