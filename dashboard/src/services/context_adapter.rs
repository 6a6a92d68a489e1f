//! Page context adapter
//!
//! Turns the host's `pages.context` query and subscription into a single-slot
//! channel holding the latest [`ContextState`].

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::{mpsc, watch};

use shared::{component_debug, component_info, component_warn, ComponentId, PageContext};
use crate::error::{DashboardError, DashboardResult};
use crate::traits::HostClient;
use crate::types::{ContextState, SubscriptionEvent, PAGES_CONTEXT_KEY};

#[derive(Debug, Deserialize)]
struct PagesContext {
    #[serde(rename = "pageInfo", default)]
    page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    id: String,
    #[serde(default)]
    path: String,
}

/// Extract the page snapshot from a `pages.context` payload
///
/// `Ok(None)` means the host has no page open yet.
pub fn parse_page_context(data: &Value) -> DashboardResult<Option<PageContext>> {
    if data.is_null() {
        return Ok(None);
    }
    let context: PagesContext = serde_json::from_value(data.clone())?;
    Ok(context.page_info.map(|info| PageContext { id: info.id, path: info.path }))
}

pub struct ContextAdapter<H: HostClient> {
    host: Arc<H>,
}

impl<H: HostClient> Clone for ContextAdapter<H> {
    fn clone(&self) -> Self {
        Self { host: self.host.clone() }
    }
}

impl<H: HostClient + 'static> ContextAdapter<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    /// One-shot read of the current page
    pub async fn current_context(&self) -> DashboardResult<Option<PageContext>> {
        let data = self.host.query(PAGES_CONTEXT_KEY).await?;
        parse_page_context(&data)
    }

    /// Start watching the page context
    ///
    /// Subscribes before issuing the initial query so no push is lost in
    /// between. The returned receiver starts at `Loading` and then tracks the
    /// newest value; a failed query or subscription shows up as `Failed`.
    pub async fn watch(&self) -> watch::Receiver<ContextState> {
        let (tx, rx) = watch::channel(ContextState::Loading);

        let events = match self.host.subscribe(PAGES_CONTEXT_KEY).await {
            Ok(events) => Some(events),
            Err(e) => {
                component_warn!(ComponentId::current(), "Page context subscription failed: {}", e);
                tx.send_replace(ContextState::Failed(e.to_string()));
                None
            }
        };

        match self.current_context().await {
            Ok(Some(page)) => {
                component_info!(ComponentId::current(), "Current page {} ({})", page.id, page.path);
                tx.send_replace(ContextState::Ready(page));
            }
            Ok(None) => component_debug!(ComponentId::current(), "No page open yet"),
            Err(e) => {
                component_warn!(ComponentId::current(), "Initial page context query failed: {}", e);
                tx.send_replace(ContextState::Failed(e.to_string()));
            }
        }

        if let Some(events) = events {
            tokio::spawn(forward_events(events, tx));
        }
        rx
    }
}

async fn forward_events(mut events: mpsc::Receiver<SubscriptionEvent>, tx: watch::Sender<ContextState>) {
    while let Some(event) = events.recv().await {
        let next = match event {
            SubscriptionEvent::Data(data) => match parse_page_context(&data) {
                Ok(Some(page)) => ContextState::Ready(page),
                Ok(None) => continue,
                Err(e) => ContextState::Failed(format!("Malformed page context: {}", e)),
            },
            SubscriptionEvent::Error(message) => {
                let error = DashboardError::Subscription { message };
                component_warn!(ComponentId::current(), "{}", error);
                ContextState::Failed(error.to_string())
            }
        };

        // Same-page pushes (path edits, re-sends) replace the value silently
        let changed = tx.send_if_modified(|current| {
            let notify = current.page().map(|p| &p.id) != next.page().map(|p| &p.id)
                || current.is_failed() != next.is_failed();
            *current = next;
            notify
        });
        if changed {
            component_debug!(ComponentId::current(), "Page context updated");
        }
        if tx.is_closed() {
            break;
        }
    }
    component_debug!(ComponentId::current(), "Page context subscription closed");
}
