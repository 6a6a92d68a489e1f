//! Type definitions for webserver configuration

use std::net::SocketAddr;

use crate::error::{WebServerError, WebServerResult};

/// Default PageSpeed API origin
pub const DEFAULT_PAGESPEED_BASE_URL: &str = "https://www.googleapis.com";

/// Default OpenAI-compatible API base
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model used for analysis
pub const DEFAULT_ANALYSIS_MODEL: &str = "gpt-5";

/// Runtime configuration assembled from command line arguments
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub pagespeed_base_url: String,
    pub openai_base_url: String,
    pub model: String,
}

impl ServerConfig {
    /// Address the HTTP listener binds to
    ///
    /// `host` may be an IP literal or a name such as `localhost`; the first
    /// resolved address is used.
    pub async fn bind_address(&self) -> WebServerResult<SocketAddr> {
        let invalid = |reason: String| {
            WebServerError::config(format!("Invalid bind address {}:{}: {}", self.host, self.port, reason))
        };
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host did not resolve".to_string()))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            pagespeed_base_url: DEFAULT_PAGESPEED_BASE_URL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_ANALYSIS_MODEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address().await.unwrap(), "127.0.0.1:3000".parse().unwrap());
    }

    #[tokio::test]
    async fn test_host_name_resolves() {
        let config = ServerConfig { host: "localhost".to_string(), port: 8080, ..ServerConfig::default() };
        let address = config.bind_address().await.unwrap();
        assert!(address.ip().is_loopback());
        assert_eq!(address.port(), 8080);
    }

    #[tokio::test]
    async fn test_invalid_host_is_a_config_error() {
        let config = ServerConfig { host: "not a host".to_string(), ..ServerConfig::default() };
        assert!(matches!(config.bind_address().await, Err(WebServerError::ConfigError { .. })));
    }
}
