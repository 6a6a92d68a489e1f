//! Core types used throughout the page insights system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::SharedError;

/// Global component ID singleton - set once at startup
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Identifier for the component emitting log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// HTTP process hosting the audit and analysis endpoints
    WebServer,
    /// Page-details orchestration embedded in the page builder
    Dashboard,
}

impl ComponentId {
    /// Initialize the global component ID for the webserver
    pub fn init_webserver() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::WebServer)
    }

    /// Initialize the global component ID for the dashboard
    pub fn init_dashboard() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Dashboard)
    }

    /// Get the global component ID, falling back to the dashboard when the
    /// embedder never initialized one
    pub fn current() -> &'static ComponentId {
        COMPONENT_ID.get().unwrap_or(&ComponentId::Dashboard)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::WebServer => write!(f, "webserver"),
            ComponentId::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// Device class the audit is run for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Desktop,
    Mobile,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Desktop, Strategy::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Desktop => "desktop",
            Strategy::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Strategy::Desktop),
            "mobile" => Ok(Strategy::Mobile),
            _ => Err(SharedError::InvalidStrategy { input: s.to_string() }),
        }
    }
}

/// Snapshot of the page currently open in the page builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub id: String,
    pub path: String,
}

/// Live URL of a published item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedUrl {
    pub url: String,
}

/// Live, publicly addressable rendition of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedItem {
    pub id: String,
    pub name: String,
    pub path: String,
    pub display_name: String,
    pub url: PublishedUrl,
}

impl PublishedItem {
    /// Published URL, if the content API returned a usable one
    pub fn live_url(&self) -> Option<&str> {
        let url = self.url.url.trim();
        (!url.is_empty()).then_some(url)
    }
}
