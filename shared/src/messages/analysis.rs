//! Generated analysis and the per-strategy result held by the dashboard

use serde::{Deserialize, Serialize};

use super::metrics::AuditMetrics;

/// Markdown tables and summary produced by the text-generation API
///
/// All three fields are required and nothing else is accepted, so a model
/// reply with a different shape fails to parse as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    pub performance: String,
    pub seo: String,
    pub summary: String,
}

/// Cached outcome of one strategy's audit and analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub metrics: AuditMetrics,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_requires_all_three_fields() {
        let missing = serde_json::from_value::<AnalysisResult>(json!({
            "performance": "|A|B|",
            "seo": "|C|D|"
        }));
        assert!(missing.is_err());

        let wrong_type = serde_json::from_value::<AnalysisResult>(json!({
            "performance": "|A|B|",
            "seo": "|C|D|",
            "summary": 42
        }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_analysis_rejects_extra_fields() {
        let extra = serde_json::from_value::<AnalysisResult>(json!({
            "performance": "|A|B|",
            "seo": "|C|D|",
            "summary": "ok",
            "accessibility": "|E|F|"
        }));
        assert!(extra.is_err());
    }

    #[test]
    fn test_strategy_result_uses_camel_case() {
        let result = StrategyResult {
            metrics: AuditMetrics::default(),
            is_active: true,
            analysis: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({ "metrics": { "performance": {}, "seo": {} }, "isActive": true }));
    }
}
