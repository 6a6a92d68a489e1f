//! OpenAI chat-completions client for metric analysis

use async_trait::async_trait;
use serde_json::{Value, json};

use shared::{AnalysisResult, ComponentId, component_debug, component_info};
use crate::error::{WebServerError, WebServerResult};
use crate::services::api_keys::OPENAI_API_KEY;
use crate::services::prompt::{SYSTEM_PROMPT, build_analysis_prompt};
use crate::traits::AnalysisProvider;

const SERVICE: &str = "openai";

/// Real analysis client backed by reqwest
pub struct RealOpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl RealOpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Strip one surrounding markdown code fence, if present
fn unwrap_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line
    match body.split_once('\n') {
        Some((info, inner)) if !info.contains('{') => inner.trim(),
        _ => body.trim(),
    }
}

/// Parse the model's text as the three-field analysis object
///
/// Anything other than a JSON object with exactly `performance`, `seo` and
/// `summary` strings is rejected as a whole.
pub fn parse_analysis(text: &str) -> WebServerResult<AnalysisResult> {
    serde_json::from_str(unwrap_code_fence(text))
        .map_err(|e| WebServerError::MalformedAnalysis { message: e.to_string() })
}

#[async_trait]
impl AnalysisProvider for RealOpenAiClient {
    async fn analyze(&self, metrics: &Value) -> WebServerResult<AnalysisResult> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WebServerError::ApiKeyMissing { key_name: OPENAI_API_KEY })?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_analysis_prompt(metrics) }
            ]
        });

        component_debug!(ComponentId::current(), "🤖 Requesting analysis from {}", self.model);
        let request_start = std::time::Instant::now();

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| WebServerError::upstream(SERVICE, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebServerError::upstream(SERVICE, format!("HTTP {status}: {body}")));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| WebServerError::upstream(SERVICE, format!("Failed to parse response: {e}")))?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| WebServerError::MalformedAnalysis { message: "No content in response".to_string() })?;

        let analysis = parse_analysis(content)?;
        component_info!(
            ComponentId::current(),
            "✅ Analysis from {} parsed in {:?}",
            self.model,
            request_start.elapsed()
        );
        Ok(analysis)
    }
}
