//! Dashboard-specific types and host query keys

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared::{PageContext, PublishedItem};

/// Query key for the application context (holds the live context id)
pub const APPLICATION_CONTEXT_KEY: &str = "application.context";

/// Query and subscription key for the page currently open in the editor
pub const PAGES_CONTEXT_KEY: &str = "pages.context";

/// Mutation key for GraphQL requests against the live delivery endpoint
pub const LIVE_GRAPHQL_KEY: &str = "xmc.live.graphql";

pub const DEFAULT_INSIGHTS_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LANGUAGE: &str = "en";

/// GraphQL document used to look up the published version of a page
pub const PUBLISHED_ITEM_QUERY: &str = r#"query GetPublishedItem($itemId: String!, $language: String!) {
  item(path: $itemId, language: $language) {
    id
    name
    path
    displayName
    url {
      url
    }
  }
}"#;

/// Public page analysis UI; the published URL goes in the `url` parameter
pub const PAGESPEED_WEB_URL: &str = "https://pagespeed.web.dev/analysis";

/// Event pushed by a host subscription
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionEvent {
    Data(Value),
    Error(String),
}

/// Latest known page context
///
/// Held in a single-slot channel: consumers always see the newest value and
/// intermediate pushes may be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextState {
    Loading,
    Ready(PageContext),
    Failed(String),
}

impl ContextState {
    pub fn page(&self) -> Option<&PageContext> {
        match self {
            ContextState::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ContextState::Failed(_))
    }
}

/// Publication status of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStatus {
    Resolving,
    Published(PublishedItem),
    NotPublished,
    Failed(String),
}

impl PublishStatus {
    /// Published URL usable for audits, if any
    pub fn live_url(&self) -> Option<&str> {
        match self {
            PublishStatus::Published(item) => item.live_url(),
            _ => None,
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL of the webserver exposing `/api/pagespeed` and `/api/ai-analysis`
    pub insights_base_url: String,
    /// Language passed to the published-item lookup
    pub language: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            insights_base_url: DEFAULT_INSIGHTS_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
