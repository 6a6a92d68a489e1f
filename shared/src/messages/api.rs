//! Request and error bodies for the webserver endpoints

use serde::{Deserialize, Serialize};

use crate::types::Strategy;

/// Body of `POST /api/pagespeed`
///
/// Both fields are optional on the wire so that a missing field can be
/// reported as a client error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

impl AuditRequest {
    pub fn new(url: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            url: Some(url.into()),
            strategy: Some(strategy.as_str().to_string()),
        }
    }
}

/// Error body returned by both endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
