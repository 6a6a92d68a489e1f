//! Canned host payloads and endpoint results

use serde_json::{json, Value};

use shared::{AnalysisResult, AuditMetrics, PageContext};

pub struct TestFixtures;

impl TestFixtures {
    pub const LIVE_CONTEXT_ID: &'static str = "live-ctx";
    pub const HOME_PAGE: &'static str = "page-home";
    pub const ABOUT_PAGE: &'static str = "page-about";
    pub const DRAFT_PAGE: &'static str = "page-draft";

    pub fn page(id: &str) -> PageContext {
        PageContext { id: id.to_string(), path: format!("/{}", id) }
    }

    pub fn published_url(page_id: &str) -> String {
        format!("https://example.com/{}", page_id)
    }

    pub fn application_context() -> Value {
        json!({
            "resourceAccess": [{ "context": { "live": Self::LIVE_CONTEXT_ID } }]
        })
    }

    /// Live GraphQL response for `page_id`; draft pages have no published item
    pub fn published_item_response(page_id: &str) -> Value {
        if page_id == Self::DRAFT_PAGE {
            return json!({ "data": { "item": null } });
        }
        json!({
            "data": {
                "item": {
                    "id": page_id,
                    "name": page_id,
                    "path": format!("/sitecore/content/{}", page_id),
                    "displayName": page_id,
                    "url": { "url": Self::published_url(page_id) }
                }
            }
        })
    }

    /// Metrics tagged with the audited URL so tests can tell results apart
    pub fn metrics_for(url: &str) -> AuditMetrics {
        serde_json::from_value(json!({
            "performance": { "speed-index": { "score": 0.7, "displayValue": url } },
            "seo": { "document-title": { "score": 1 } }
        }))
        .unwrap()
    }

    pub fn analysis(summary: &str) -> AnalysisResult {
        AnalysisResult {
            performance: "| Metric | Score |".to_string(),
            seo: "| Check | Status |".to_string(),
            summary: summary.to_string(),
        }
    }
}
