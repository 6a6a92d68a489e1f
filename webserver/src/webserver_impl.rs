//! Main webserver implementation
//!
//! The WebServer struct wires the upstream clients into an axum router using
//! dependency injection, so tests can swap in mocks.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use shared::{AnalysisResult, AuditMetrics, AuditRequest, ComponentId, Strategy, component_info};
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::{AnalysisProvider, AuditProvider};

/// Message returned when endpoint A is called without both fields
pub const MISSING_FIELDS_MESSAGE: &str = "Missing url or strategy";

/// Main webserver struct with dependency injection
pub struct WebServer<A, P>
where
    A: AuditProvider,
    P: AnalysisProvider,
{
    state: Arc<WebServerState>,
    audit_provider: Arc<A>,
    analysis_provider: Arc<P>,
}

impl<A, P> Clone for WebServer<A, P>
where
    A: AuditProvider,
    P: AnalysisProvider,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            audit_provider: self.audit_provider.clone(),
            analysis_provider: self.analysis_provider.clone(),
        }
    }
}

impl<A, P> WebServer<A, P>
where
    A: AuditProvider + 'static,
    P: AnalysisProvider + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(bind_address: SocketAddr, audit_provider: A, analysis_provider: P) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address)),
            audit_provider: Arc::new(audit_provider),
            analysis_provider: Arc::new(analysis_provider),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Endpoint A: audit
            .route("/api/pagespeed", post(pagespeed_handler::<A, P>))
            // Endpoint B: analysis
            .route("/api/ai-analysis", post(ai_analysis_handler::<A, P>))
            // Health check
            .route("/health", get(health_check::<A, P>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    // The dashboard is served from the page builder's origin
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        component_info!(ComponentId::current(), "🌐 Web server listening on http://{}", bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {e}")))?;

        Ok(())
    }
}

/// Validate an audit request into a non-empty URL and a known strategy
pub fn validate_audit_request(request: AuditRequest) -> WebServerResult<(String, Strategy)> {
    let url = request.url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
    let strategy = request.strategy.filter(|s| !s.is_empty());

    match (url, strategy) {
        (Some(url), Some(strategy)) => Ok((url, strategy.parse()?)),
        _ => Err(WebServerError::invalid_request(MISSING_FIELDS_MESSAGE)),
    }
}

// HTTP Handlers

/// Run an audit and return the selected metrics
async fn pagespeed_handler<A, P>(
    State(webserver): State<WebServer<A, P>>,
    payload: Result<Json<AuditRequest>, JsonRejection>,
) -> WebServerResult<Json<AuditMetrics>>
where
    A: AuditProvider + 'static,
    P: AnalysisProvider + 'static,
{
    webserver.state.record_audit_request();

    let result = async {
        let Json(request) = payload.map_err(|e| WebServerError::UnreadableBody { details: e.body_text() })?;
        let (url, strategy) = validate_audit_request(request)?;
        webserver.audit_provider.run_audit(&url, strategy).await
    }
    .await;

    match result {
        Ok(metrics) => Ok(Json(metrics)),
        Err(e) => {
            webserver.state.record_failure();
            Err(e)
        }
    }
}

/// Generate tables and summary for the posted metrics
async fn ai_analysis_handler<A, P>(
    State(webserver): State<WebServer<A, P>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> WebServerResult<Json<AnalysisResult>>
where
    A: AuditProvider + 'static,
    P: AnalysisProvider + 'static,
{
    webserver.state.record_analysis_request();

    let result = async {
        let Json(data) = payload.map_err(|e| WebServerError::UnreadableBody { details: e.body_text() })?;
        webserver.analysis_provider.analyze(&data).await
    }
    .await;

    match result {
        Ok(analysis) => Ok(Json(analysis)),
        Err(e) => {
            webserver.state.record_failure();
            Err(e)
        }
    }
}

/// Health check endpoint
async fn health_check<A, P>(State(webserver): State<WebServer<A, P>>) -> Json<Value>
where
    A: AuditProvider + 'static,
    P: AnalysisProvider + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "uptime": webserver.state.get_uptime_seconds(),
        "requests": {
            "audit": webserver.state.audit_count(),
            "analysis": webserver.state.analysis_count(),
            "failed": webserver.state.failure_count()
        }
    }))
}
