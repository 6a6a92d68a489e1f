//! Dashboard error types

use thiserror::Error;

use shared::Strategy;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Published-item resolver not initialized. Call initialize() first.")]
    NotInitialized,

    #[error("Host query '{key}' failed: {message}")]
    HostQuery { key: String, message: String },

    #[error("Page context subscription failed: {message}")]
    Subscription { message: String },

    #[error("Page context unavailable: {message}")]
    ContextUnavailable { message: String },

    #[error("Page is not published")]
    NotPublished,

    #[error("A {strategy} audit is already running")]
    Busy { strategy: Strategy },

    #[error("Audit failed: {message}")]
    AuditFailed { message: String },

    #[error("Analysis unavailable: {message}")]
    AnalysisUnavailable { message: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn host_query(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HostQuery { key: key.into(), message: message.into() }
    }

    pub fn audit(message: impl Into<String>) -> Self {
        Self::AuditFailed { message: message.into() }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::AnalysisUnavailable { message: message.into() }
    }
}
