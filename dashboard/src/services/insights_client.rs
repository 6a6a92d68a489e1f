//! HTTP client for the webserver's audit and analysis endpoints

use async_trait::async_trait;
use reqwest::{Client, Response};

use shared::{
    component_debug, component_info, AnalysisResult, AuditMetrics, AuditRequest, ComponentId,
    ErrorResponse, Strategy,
};
use crate::error::{DashboardError, DashboardResult};
use crate::traits::InsightsApi;

pub const PAGESPEED_PATH: &str = "/api/pagespeed";
pub const ANALYSIS_PATH: &str = "/api/ai-analysis";

pub struct RealInsightsClient {
    http: Client,
    base_url: String,
}

impl RealInsightsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Message carried by a non-success response
///
/// Uses the `error` field of the body when present, else the status line.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status),
    }
}

#[async_trait]
impl InsightsApi for RealInsightsClient {
    async fn run_audit(&self, url: &str, strategy: Strategy) -> DashboardResult<AuditMetrics> {
        component_info!(ComponentId::current(), "Requesting {} audit of {}", strategy, url);

        let response = self
            .http
            .post(self.endpoint(PAGESPEED_PATH))
            .json(&AuditRequest::new(url, strategy))
            .send()
            .await
            .map_err(|e| DashboardError::audit(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DashboardError::audit(error_message(response).await));
        }

        let metrics: AuditMetrics = response
            .json()
            .await
            .map_err(|e| DashboardError::audit(format!("Invalid audit response: {}", e)))?;
        component_debug!(ComponentId::current(), "{} audit returned {} metrics", strategy, metrics.present_count());
        Ok(metrics)
    }

    async fn analyze(&self, metrics: &AuditMetrics) -> DashboardResult<AnalysisResult> {
        let response = self
            .http
            .post(self.endpoint(ANALYSIS_PATH))
            .json(metrics)
            .send()
            .await
            .map_err(|e| DashboardError::analysis(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DashboardError::analysis(error_message(response).await));
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| DashboardError::analysis(format!("Invalid analysis response: {}", e)))
    }
}
