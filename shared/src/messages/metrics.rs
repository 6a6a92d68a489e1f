//! Audit metrics selected from a PageSpeed report
//!
//! Audit values are passed through untouched. Only key selection happens here:
//! a key missing from the upstream report stays `None` and is omitted from
//! the serialized output, so consumers must read it as "unknown".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Performance audit keys, in report order
pub const PERFORMANCE_AUDIT_KEYS: [&str; 5] = [
    "cumulative-layout-shift",
    "largest-contentful-paint",
    "speed-index",
    "total-blocking-time",
    "first-contentful-paint",
];

/// SEO audit keys, in report order
pub const SEO_AUDIT_KEYS: [&str; 13] = [
    "is-crawlable",
    "robots-txt",
    "font-size",
    "tap-targets",
    "hreflang",
    "canonical",
    "structured-data",
    "crawlable-anchors",
    "document-title",
    "meta-description",
    "http-status-code",
    "image-alt",
    "link-text",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAudits {
    #[serde(rename = "cumulative-layout-shift", default, skip_serializing_if = "Option::is_none")]
    pub cumulative_layout_shift: Option<Value>,
    #[serde(rename = "largest-contentful-paint", default, skip_serializing_if = "Option::is_none")]
    pub largest_contentful_paint: Option<Value>,
    #[serde(rename = "speed-index", default, skip_serializing_if = "Option::is_none")]
    pub speed_index: Option<Value>,
    #[serde(rename = "total-blocking-time", default, skip_serializing_if = "Option::is_none")]
    pub total_blocking_time: Option<Value>,
    #[serde(rename = "first-contentful-paint", default, skip_serializing_if = "Option::is_none")]
    pub first_contentful_paint: Option<Value>,
}

impl PerformanceAudits {
    /// Select the performance keys from a report's `audits` map
    pub fn from_audits(audits: &Map<String, Value>) -> Self {
        let pick = |key: &str| audits.get(key).cloned();
        Self {
            cumulative_layout_shift: pick("cumulative-layout-shift"),
            largest_contentful_paint: pick("largest-contentful-paint"),
            speed_index: pick("speed-index"),
            total_blocking_time: pick("total-blocking-time"),
            first_contentful_paint: pick("first-contentful-paint"),
        }
    }

    /// Look up an audit by its report key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            "cumulative-layout-shift" => self.cumulative_layout_shift.as_ref(),
            "largest-contentful-paint" => self.largest_contentful_paint.as_ref(),
            "speed-index" => self.speed_index.as_ref(),
            "total-blocking-time" => self.total_blocking_time.as_ref(),
            "first-contentful-paint" => self.first_contentful_paint.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoAudits {
    #[serde(rename = "is-crawlable", default, skip_serializing_if = "Option::is_none")]
    pub is_crawlable: Option<Value>,
    #[serde(rename = "robots-txt", default, skip_serializing_if = "Option::is_none")]
    pub robots_txt: Option<Value>,
    #[serde(rename = "font-size", default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Value>,
    #[serde(rename = "tap-targets", default, skip_serializing_if = "Option::is_none")]
    pub tap_targets: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<Value>,
    #[serde(rename = "structured-data", default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Value>,
    #[serde(rename = "crawlable-anchors", default, skip_serializing_if = "Option::is_none")]
    pub crawlable_anchors: Option<Value>,
    #[serde(rename = "document-title", default, skip_serializing_if = "Option::is_none")]
    pub document_title: Option<Value>,
    #[serde(rename = "meta-description", default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<Value>,
    #[serde(rename = "http-status-code", default, skip_serializing_if = "Option::is_none")]
    pub http_status_code: Option<Value>,
    #[serde(rename = "image-alt", default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<Value>,
    #[serde(rename = "link-text", default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<Value>,
}

impl SeoAudits {
    /// Select the SEO keys from a report's `audits` map
    pub fn from_audits(audits: &Map<String, Value>) -> Self {
        let pick = |key: &str| audits.get(key).cloned();
        Self {
            is_crawlable: pick("is-crawlable"),
            robots_txt: pick("robots-txt"),
            font_size: pick("font-size"),
            tap_targets: pick("tap-targets"),
            hreflang: pick("hreflang"),
            canonical: pick("canonical"),
            structured_data: pick("structured-data"),
            crawlable_anchors: pick("crawlable-anchors"),
            document_title: pick("document-title"),
            meta_description: pick("meta-description"),
            http_status_code: pick("http-status-code"),
            image_alt: pick("image-alt"),
            link_text: pick("link-text"),
        }
    }

    /// Look up an audit by its report key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            "is-crawlable" => self.is_crawlable.as_ref(),
            "robots-txt" => self.robots_txt.as_ref(),
            "font-size" => self.font_size.as_ref(),
            "tap-targets" => self.tap_targets.as_ref(),
            "hreflang" => self.hreflang.as_ref(),
            "canonical" => self.canonical.as_ref(),
            "structured-data" => self.structured_data.as_ref(),
            "crawlable-anchors" => self.crawlable_anchors.as_ref(),
            "document-title" => self.document_title.as_ref(),
            "meta-description" => self.meta_description.as_ref(),
            "http-status-code" => self.http_status_code.as_ref(),
            "image-alt" => self.image_alt.as_ref(),
            "link-text" => self.link_text.as_ref(),
            _ => None,
        }
    }
}

/// Metrics extracted from one PageSpeed run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditMetrics {
    #[serde(default)]
    pub performance: PerformanceAudits,
    #[serde(default)]
    pub seo: SeoAudits,
}

impl AuditMetrics {
    /// Select the fixed key set from a report's `audits` map
    pub fn from_audits(audits: &Map<String, Value>) -> Self {
        Self {
            performance: PerformanceAudits::from_audits(audits),
            seo: SeoAudits::from_audits(audits),
        }
    }

    /// Number of keys present out of the fixed 18
    pub fn present_count(&self) -> usize {
        let performance = PERFORMANCE_AUDIT_KEYS
            .iter()
            .filter(|key| self.performance.get(key).is_some())
            .count();
        let seo = SEO_AUDIT_KEYS.iter().filter(|key| self.seo.get(key).is_some()).count();
        performance + seo
    }
}
