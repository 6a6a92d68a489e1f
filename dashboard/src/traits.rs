//! Trait definitions with mockall annotations for testing
//!
//! The host SDK and the insights endpoints are the two seams of the dashboard.
//! Everything above them is driven through these traits.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

use shared::{AnalysisResult, AuditMetrics, Strategy};
use crate::error::DashboardResult;
use crate::types::SubscriptionEvent;

/// Host page-builder client
///
/// Thin view of the host SDK: keyed queries, keyed mutations and a keyed
/// subscription that pushes data or error events.
#[mockall::automock]
#[async_trait]
pub trait HostClient: Send + Sync {
    /// Read the current value behind `key`
    async fn query(&self, key: &str) -> DashboardResult<Value>;

    /// Run the mutation behind `key`, returning the `data` payload of the response
    async fn mutate(&self, key: &str, params: Value) -> DashboardResult<Value>;

    /// Subscribe to pushed updates for `key`
    ///
    /// The receiver closes when the host drops the subscription.
    async fn subscribe(&self, key: &str) -> DashboardResult<mpsc::Receiver<SubscriptionEvent>>;
}

/// Client for the webserver's audit and analysis endpoints
#[mockall::automock]
#[async_trait]
pub trait InsightsApi: Send + Sync {
    /// Run a performance and SEO audit of a published URL
    async fn run_audit(&self, url: &str, strategy: Strategy) -> DashboardResult<AuditMetrics>;

    /// Request the markdown analysis of previously fetched metrics
    async fn analyze(&self, metrics: &AuditMetrics) -> DashboardResult<AnalysisResult>;
}
