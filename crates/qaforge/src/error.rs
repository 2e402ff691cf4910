//! Error types for `qaforge`.
//!
//! Rendering itself never fails. Errors come from the edges: validating a
//! batch handed over by the generator, parsing a model reply, and writing or
//! verifying an export bundle.

use thiserror::Error;

/// Result type alias for qaforge operations.
pub type Result<T> = std::result::Result<T, QaForgeError>;

/// Errors that can occur around test-case rendering.
#[derive(Debug, Error)]
pub enum QaForgeError {
    /// The batch contained no test cases
    #[error("Test case batch is empty")]
    EmptyBatch,

    /// A single test case failed shape validation
    #[error("Invalid test case {id}: {reason}")]
    InvalidTestCase {
        /// Id of the offending test case
        id: u32,
        /// Why it was rejected
        reason: String,
    },

    /// Two test cases in one batch share an id
    #[error("Duplicate test case id {0}")]
    DuplicateId(u32),

    /// Strict framework lookup failed
    #[error("Unknown framework '{0}'")]
    UnknownFramework(String),

    /// A model reply did not contain a JSON array of test cases
    #[error("Failed to parse AI response: {0}")]
    UnparseableResponse(String),

    /// Bundle manifest missing or unreadable
    #[error("Manifest verification failed for '{path}': {reason}")]
    ManifestError {
        /// Bundle directory or entry path
        path: String,
        /// Why verification failed
        reason: String,
    },

    /// Bundle entry was modified after export
    #[error("Hash mismatch for '{path}': expected {expected}, got {actual}")]
    HashMismatch {
        /// Entry file name
        path: String,
        /// Hash recorded in the manifest
        expected: String,
        /// Hash of the file on disk
        actual: String,
    },

    /// IO error during bundle operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QaForgeError {
    /// Create an invalid test case error
    #[must_use]
    pub fn invalid_case(id: u32, reason: impl Into<String>) -> Self {
        Self::InvalidTestCase {
            id,
            reason: reason.into(),
        }
    }
}
