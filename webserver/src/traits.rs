//! Service trait definitions for dependency injection
//!
//! Both upstream APIs sit behind these traits so the router can be exercised
//! without network access.

use async_trait::async_trait;
use serde_json::Value;

use shared::{AnalysisResult, AuditMetrics, Strategy};
use crate::error::WebServerResult;

/// Performance-audit API client
#[mockall::automock]
#[async_trait]
pub trait AuditProvider: Send + Sync {
    /// Run a performance and SEO audit of `url` and select the fixed metric keys
    async fn run_audit(&self, url: &str, strategy: Strategy) -> WebServerResult<AuditMetrics>;
}

/// Text-generation API client
#[mockall::automock]
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Turn audit metrics into markdown tables and a summary
    ///
    /// The payload is forwarded as-is; its shape is not validated.
    async fn analyze(&self, metrics: &Value) -> WebServerResult<AnalysisResult>;
}
