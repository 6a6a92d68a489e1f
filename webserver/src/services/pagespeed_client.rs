//! PageSpeed Insights client
//!
//! Requests both the performance and the seo category for a URL and selects
//! the fixed metric keys from `lighthouseResult.audits`.

use async_trait::async_trait;
use serde_json::Value;

use shared::{AuditMetrics, ComponentId, Strategy, component_debug, component_info};
use crate::error::{WebServerError, WebServerResult};
use crate::services::api_keys::PAGESPEED_API_KEY;
use crate::traits::AuditProvider;

const SERVICE: &str = "pagespeed";
const RUN_PAGESPEED_PATH: &str = "/pagespeedonline/v5/runPagespeed";

/// Real PageSpeed client backed by reqwest
pub struct RealPageSpeedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RealPageSpeedClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RUN_PAGESPEED_PATH)
    }
}

/// Select the fixed metric keys from a raw PageSpeed report
///
/// A report without an audits map is a failure, not an empty result.
pub fn extract_metrics(report: &Value) -> WebServerResult<AuditMetrics> {
    let audits = report
        .get("lighthouseResult")
        .and_then(|result| result.get("audits"))
        .and_then(Value::as_object)
        .ok_or(WebServerError::MissingAudits)?;

    Ok(AuditMetrics::from_audits(audits))
}

#[async_trait]
impl AuditProvider for RealPageSpeedClient {
    async fn run_audit(&self, url: &str, strategy: Strategy) -> WebServerResult<AuditMetrics> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WebServerError::ApiKeyMissing { key_name: PAGESPEED_API_KEY })?;

        component_debug!(ComponentId::current(), "📡 Requesting {} audit for {}", strategy, url);
        let request_start = std::time::Instant::now();

        let response = self
            .http
            .get(self.endpoint())
            .query(&[
                ("url", url),
                ("strategy", strategy.as_str()),
                ("key", api_key),
                ("category", "performance"),
                ("category", "seo"),
            ])
            .send()
            .await
            // The request URL carries the API key
            .map_err(|e| WebServerError::upstream(SERVICE, e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebServerError::upstream(SERVICE, format!("HTTP {status}: {body}")));
        }

        let report: Value = response
            .json()
            .await
            .map_err(|e| WebServerError::upstream(SERVICE, format!("Failed to parse response: {}", e.without_url())))?;

        let metrics = extract_metrics(&report)?;
        component_info!(
            ComponentId::current(),
            "✅ {} audit for {} returned {}/18 metrics in {:?}",
            strategy,
            url,
            metrics.present_count(),
            request_start.elapsed()
        );
        Ok(metrics)
    }
}
