//! End-to-end tests: router plus real upstream clients against stubbed APIs

mod helpers;

use axum::Router;
use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use webserver::{RealOpenAiClient, RealPageSpeedClient, WebServer};

use helpers::post_json;

fn router_against(pagespeed: &MockServer, openai: &MockServer) -> Router {
    WebServer::new(
        "127.0.0.1:0".parse().unwrap(),
        RealPageSpeedClient::new(pagespeed.uri(), Some("ps-key".to_string())),
        RealOpenAiClient::new(openai.uri(), Some("sk-test".to_string()), "gpt-5"),
    )
    .build_router()
}

async fn openai_replying(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_mobile_audit_with_partial_report() {
    let pagespeed = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pagespeedonline/v5/runPagespeed"))
        .and(query_param("strategy", "mobile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lighthouseResult": {
                "audits": {
                    "cumulative-layout-shift": { "id": "cumulative-layout-shift", "score": 1, "displayValue": "0" },
                    "is-crawlable": { "id": "is-crawlable", "score": 1 }
                }
            }
        })))
        .expect(1)
        .mount(&pagespeed)
        .await;
    let openai = MockServer::start().await;

    let (status, body) = post_json(
        router_against(&pagespeed, &openai),
        "/api/pagespeed",
        &json!({ "url": "https://example.com", "strategy": "mobile" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["performance"]["cumulative-layout-shift"]["displayValue"], "0");
    assert!(body["performance"].get("largest-contentful-paint").is_none());
    assert_eq!(body["seo"]["is-crawlable"]["score"], 1);
    assert!(body["seo"].get("robots-txt").is_none());
}

#[tokio::test]
async fn test_audit_without_audits_map_fails() {
    let pagespeed = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pagespeedonline/v5/runPagespeed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lighthouseResult": {} })))
        .mount(&pagespeed)
        .await;
    let openai = MockServer::start().await;

    let (status, body) = post_json(
        router_against(&pagespeed, &openai),
        "/api/pagespeed",
        &json!({ "url": "https://example.com", "strategy": "desktop" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_analysis_returns_parsed_model_output() {
    let pagespeed = MockServer::start().await;
    let openai = openai_replying(r#"{"performance":"|A|B|","seo":"|C|D|","summary":"ok"}"#).await;

    let (status, body) = post_json(
        router_against(&pagespeed, &openai),
        "/api/ai-analysis",
        &json!({ "performance": {}, "seo": {} }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "performance": "|A|B|", "seo": "|C|D|", "summary": "ok" }));
}

#[tokio::test]
async fn test_analysis_of_non_json_model_output_is_500() {
    let pagespeed = MockServer::start().await;
    let openai = openai_replying("not json").await;

    let (status, body) = post_json(
        router_against(&pagespeed, &openai),
        "/api/ai-analysis",
        &json!({ "performance": {}, "seo": {} }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
}
