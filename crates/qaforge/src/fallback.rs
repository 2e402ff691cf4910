//! Canned test cases used when no model is available.
//!
//! The story text is matched case-insensitively: anything mentioning a
//! login gets the login set, then password resets, and everything else gets
//! a generic form-submission set.

use crate::model::TestCase;

/// Pick a canned batch for `story`.
#[must_use]
pub fn fallback_test_cases(story: &str) -> Vec<TestCase> {
    let story = story.to_lowercase();

    if story.contains("login") || story.contains("sign in") {
        tracing::debug!("using login fallback set");
        return login_cases();
    }
    if story.contains("reset") || story.contains("password") {
        tracing::debug!("using password reset fallback set");
        return reset_cases();
    }
    tracing::debug!("using generic fallback set");
    generic_cases()
}

fn login_cases() -> Vec<TestCase> {
    const PAGE: &str = "Navigate to the login page";
    vec![
        TestCase::new(
            1,
            "Successful login with valid credentials",
            [PAGE, "Enter valid username", "Enter valid password", "Click login button"],
            "User is successfully logged in and redirected to dashboard",
        ),
        TestCase::new(
            2,
            "Login failure with invalid credentials",
            [PAGE, "Enter invalid username or password", "Click login button"],
            "Error message is displayed: \"Invalid credentials\"",
        ),
        TestCase::new(
            3,
            "Login with empty fields",
            [PAGE, "Leave username and password fields empty", "Click login button"],
            "Validation error messages are displayed for required fields",
        ),
        TestCase::new(
            4,
            "Password visibility toggle",
            [PAGE, "Enter password", "Click show/hide password icon"],
            "Password is toggled between visible and masked",
        ),
    ]
}

fn reset_cases() -> Vec<TestCase> {
    const PAGE: &str = "Navigate to forgot password page";
    const SEND: &str = "Click send reset link button";
    vec![
        TestCase::new(
            1,
            "Successful password reset with valid email",
            [PAGE, "Enter registered email address", SEND],
            "Success message displayed and reset email sent",
        ),
        TestCase::new(
            2,
            "Password reset with unregistered email",
            [PAGE, "Enter unregistered email address", SEND],
            "Error message: \"Email not found\"",
        ),
        TestCase::new(
            3,
            "Password reset with invalid email format",
            [PAGE, "Enter invalid email format", SEND],
            "Validation error: \"Please enter a valid email\"",
        ),
    ]
}

fn generic_cases() -> Vec<TestCase> {
    const PAGE: &str = "Navigate to the feature page";
    vec![
        TestCase::new(
            1,
            "Successful operation with valid inputs",
            [PAGE, "Enter valid data in all required fields", "Submit the form"],
            "Operation completes successfully with confirmation message",
        ),
        TestCase::new(
            2,
            "Error handling with invalid inputs",
            [PAGE, "Enter invalid data in required fields", "Attempt to submit the form"],
            "Error message is displayed indicating invalid input",
        ),
        TestCase::new(
            3,
            "Required field validation",
            [PAGE, "Leave required fields empty", "Attempt to submit the form"],
            "Validation errors displayed for all required fields",
        ),
        TestCase::new(
            4,
            "Boundary condition test",
            [PAGE, "Enter data at boundary limits (min/max values)", "Submit the form"],
            "System handles boundary values correctly without errors",
        ),
        TestCase::new(
            5,
            "Cancel/Back functionality",
            [PAGE, "Enter some data", "Click cancel or back button"],
            "User is returned to previous page without saving changes",
        ),
    ]
}
