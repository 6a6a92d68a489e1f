//! API key loading for the upstream services
//!
//! Keys are read from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values. Neither key is
//! required at start-up; a missing key is reported by the endpoint that needs
//! it as a configuration error.
//!
//! - `PAGESPEED_API_KEY`: PageSpeed Insights key (audit endpoint)
//! - `OPENAI_API_KEY`: OpenAI key (analysis endpoint)

use shared::{ComponentId, component_info, component_warn};

/// Environment variable holding the PageSpeed key
pub const PAGESPEED_API_KEY: &str = "PAGESPEED_API_KEY";

/// Environment variable holding the OpenAI key
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Keys available to the upstream clients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    pub pagespeed: Option<String>,
    pub openai: Option<String>,
}

impl ApiKeys {
    /// Load keys from the process environment, seeding it from `.env` first
    pub fn from_env() -> Self {
        // Silently ignored when there is no .env file
        let _ = dotenv::dotenv();
        let keys = Self::from_lookup(|name| std::env::var(name).ok());
        keys.log_availability();
        keys
    }

    /// Load keys through an arbitrary lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            pagespeed: read(PAGESPEED_API_KEY),
            openai: read(OPENAI_API_KEY),
        }
    }

    fn log_availability(&self) {
        for (name, value) in [(PAGESPEED_API_KEY, &self.pagespeed), (OPENAI_API_KEY, &self.openai)] {
            if value.is_some() {
                component_info!(ComponentId::current(), "🔑 {} loaded", name);
            } else {
                component_warn!(ComponentId::current(), "{} is not set; requests needing it will fail", name);
            }
        }
    }
}
