//! Serializable snapshot of the page-details panel

use serde::Serialize;
use url::Url;

use shared::{AnalysisResult, Strategy};
use crate::core::page_details::PageDetailsState;
use crate::types::{ContextState, PublishStatus, PAGESPEED_WEB_URL};

/// Publication badge shown next to the page path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishBadge {
    Published,
    NotPublished,
    FetchFailed,
}

impl PublishBadge {
    pub fn label(&self) -> &'static str {
        match self {
            PublishBadge::Published => "Published",
            PublishBadge::NotPublished => "Not Published",
            PublishBadge::FetchFailed => "Failed to fetch item",
        }
    }
}

/// Link to the public analysis UI for a published URL
pub fn pagespeed_web_link(published_url: &str) -> Option<String> {
    Url::parse_with_params(PAGESPEED_WEB_URL, &[("url", published_url)])
        .ok()
        .map(String::from)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetailsView {
    pub context_error: Option<String>,
    pub page_id: Option<String>,
    pub page_path: Option<String>,
    /// `None` while the publication status is being resolved
    pub badge: Option<PublishBadge>,
    pub published_url: Option<String>,
    pub pagespeed_link: Option<String>,
    pub controls_enabled: bool,
    pub loading_strategy: Option<Strategy>,
    pub active_strategy: Option<Strategy>,
    /// Analysis of the active strategy; hidden while a fetch is running
    pub analysis: Option<AnalysisResult>,
    pub last_error: Option<String>,
}

impl PageDetailsView {
    pub fn from_state(state: &PageDetailsState) -> Self {
        let context_error = match &state.context {
            ContextState::Failed(message) => Some(message.clone()),
            _ => None,
        };
        let page = state.context.page();

        let badge = match &state.publish_status {
            PublishStatus::Resolving => None,
            PublishStatus::Published(_) => Some(PublishBadge::Published),
            PublishStatus::NotPublished => Some(PublishBadge::NotPublished),
            PublishStatus::Failed(_) => Some(PublishBadge::FetchFailed),
        };
        let published_url = state.publish_status.live_url().map(str::to_string);
        let loading_strategy = state.cache.loading();

        let analysis = match (loading_strategy, state.cache.active_result()) {
            (None, Some((_, _, analysis))) => Some(analysis.clone()),
            _ => None,
        };

        Self {
            controls_enabled: context_error.is_none() && published_url.is_some() && loading_strategy.is_none(),
            pagespeed_link: published_url.as_deref().and_then(pagespeed_web_link),
            context_error,
            page_id: page.map(|p| p.id.clone()),
            page_path: page.map(|p| p.path.clone()),
            badge,
            published_url,
            loading_strategy,
            active_strategy: state.cache.active(),
            analysis,
            last_error: state.last_error.clone(),
        }
    }
}
