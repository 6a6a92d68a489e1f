//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use shared::{ComponentId, ErrorResponse, SharedError, component_error, component_warn};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Request body could not be read: {details}")]
    UnreadableBody { details: String },

    #[error("API key not set: {key_name}")]
    ApiKeyMissing { key_name: &'static str },

    #[error("Upstream {service} request failed: {message}")]
    UpstreamError { service: &'static str, message: String },

    #[error("PageSpeed response contained no audits")]
    MissingAudits,

    #[error("Analysis response was not the expected JSON: {message}")]
    MalformedAnalysis { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl WebServerError {
    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest { details: details.into() }
    }

    pub fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        Self::UpstreamError { service, message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } | Self::SharedError(SharedError::InvalidStrategy { .. }) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `{error}` body; upstream details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidRequest { details } => details.clone(),
            Self::SharedError(SharedError::InvalidStrategy { input }) => {
                format!("Unknown strategy '{input}', expected desktop or mobile")
            }
            Self::ApiKeyMissing { .. } => "API key not set".to_string(),
            Self::MissingAudits => "No audits returned for this URL".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            component_error!(ComponentId::current(), error = %self, "❌ Request failed");
        } else {
            component_warn!(ComponentId::current(), error = %self, "Rejected request");
        }
        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
