//! Postman collection (schema v2.1.0) with one request per test case.
//!
//! Unlike the other skeletons this is data, not source: the id, steps and
//! expected result go into the request description, and the test script
//! carries a status assertion stub.

use crate::model::TestCase;
use crate::naming::double_quoted;
use serde::{Deserialize, Serialize};

/// Collection schema URL written into `info.schema`.
pub const COLLECTION_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Top-level Postman collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanCollection {
    /// Collection metadata
    pub info: CollectionInfo,
    /// One request item per test case
    pub item: Vec<PostmanItem>,
}

/// `info` block of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection name
    pub name: String,
    /// Schema URL
    pub schema: String,
}

/// A request plus its test script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanItem {
    /// Test case title
    pub name: String,
    /// Placeholder request
    pub request: PostmanRequest,
    /// Script events (a single `test` listener)
    pub event: Vec<PostmanEvent>,
}

/// Request definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanRequest {
    /// HTTP method
    pub method: String,
    /// Request headers
    pub header: Vec<PostmanHeader>,
    /// Target URL
    pub url: PostmanUrl,
    /// Id, steps and expected result
    pub description: String,
}

/// Request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanHeader {
    /// Header name
    pub key: String,
    /// Header value
    pub value: String,
}

/// Structured request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanUrl {
    /// Full URL with variables
    pub raw: String,
    /// Host segments
    pub host: Vec<String>,
    /// Path segments
    pub path: Vec<String>,
}

/// Script event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanEvent {
    /// Event name (`test`)
    pub listen: String,
    /// Script body
    pub script: PostmanScript,
}

/// Script body as individual lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanScript {
    /// Script lines
    pub exec: Vec<String>,
    /// Script MIME type
    #[serde(rename = "type")]
    pub kind: String,
}

impl PostmanItem {
    fn from_case(case: &TestCase) -> Self {
        let steps = case
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {s}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            name: case.title.clone(),
            request: PostmanRequest {
                method: "GET".to_string(),
                header: Vec::new(),
                url: PostmanUrl {
                    raw: "{{baseUrl}}/endpoint".to_string(),
                    host: vec!["{{baseUrl}}".to_string()],
                    path: vec!["endpoint".to_string()],
                },
                description: format!(
                    "Test ID: {}\n\nSteps:\n{steps}\n\nExpected: {}",
                    case.id, case.expected
                ),
            },
            event: vec![PostmanEvent {
                listen: "test".to_string(),
                script: PostmanScript {
                    exec: vec![
                        format!("// Test ID: {}", case.id),
                        format!("pm.test(\"{}\", function () {{", double_quoted(&case.title)),
                        "    pm.response.to.have.status(200);".to_string(),
                        "    // TODO: Add your test assertions here".to_string(),
                        "});".to_string(),
                    ],
                    kind: "text/javascript".to_string(),
                },
            }],
        }
    }
}

/// Build the collection model for a batch.
#[must_use]
pub fn collection(cases: &[TestCase]) -> PostmanCollection {
    PostmanCollection {
        info: CollectionInfo {
            name: "Test Suite".to_string(),
            schema: COLLECTION_SCHEMA.to_string(),
        },
        item: cases.iter().map(PostmanItem::from_case).collect(),
    }
}

/// Pretty-printed (2-space) collection JSON.
pub fn postman(cases: &[TestCase]) -> String {
    // Only strings and vectors of strings: serialization cannot fail.
    serde_json::to_string_pretty(&collection(cases)).unwrap_or_default()
}
