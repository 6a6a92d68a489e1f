//! Published-item resolver
//!
//! Looks up the live rendition of a page through the host's GraphQL mutation
//! against the live delivery endpoint. Lookup failures are reported as "not
//! published" rather than errors; only a missing live context is an error.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use shared::{component_debug, component_info, component_warn, ComponentId, PublishedItem};
use crate::error::{DashboardError, DashboardResult};
use crate::traits::HostClient;
use crate::types::{APPLICATION_CONTEXT_KEY, LIVE_GRAPHQL_KEY, PUBLISHED_ITEM_QUERY};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationContext {
    #[serde(default)]
    resource_access: Vec<ResourceAccess>,
}

#[derive(Debug, Default, Deserialize)]
struct ResourceAccess {
    #[serde(default)]
    context: Option<ResourceContext>,
}

#[derive(Debug, Default, Deserialize)]
struct ResourceContext {
    #[serde(default)]
    live: Option<String>,
}

/// Live context id from an `application.context` payload
///
/// Only the first resource is consulted. Blank ids count as missing.
pub fn live_context_id(data: &Value) -> Option<String> {
    let context = ApplicationContext::deserialize(data).ok()?;
    context
        .resource_access
        .into_iter()
        .next()?
        .context?
        .live
        .filter(|id| !id.trim().is_empty())
}

pub struct PublishedItemResolver<H: HostClient> {
    host: Arc<H>,
    live_context_id: Option<String>,
}

impl<H: HostClient> PublishedItemResolver<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self { host, live_context_id: None }
    }

    pub fn live_context_id(&self) -> Option<&str> {
        self.live_context_id.as_deref()
    }

    /// Read the application context and remember its live context id
    ///
    /// A context without a live id is not an error here; `resolve` reports it.
    pub async fn initialize(&mut self) -> DashboardResult<()> {
        let data = self.host.query(APPLICATION_CONTEXT_KEY).await?;
        self.live_context_id = live_context_id(&data);
        match &self.live_context_id {
            Some(id) => component_info!(ComponentId::current(), "Live context {}", id),
            None => component_warn!(ComponentId::current(), "Application context has no live context id"),
        }
        Ok(())
    }

    /// Look up the published version of `page_id`
    ///
    /// Returns `Ok(None)` when the item is absent or the lookup fails.
    pub async fn resolve(&self, page_id: &str, language: &str) -> DashboardResult<Option<PublishedItem>> {
        let live_id = self.live_context_id.as_deref().ok_or(DashboardError::NotInitialized)?;

        let params = json!({
            "params": {
                "query": { "sitecoreContextId": live_id },
                "body": {
                    "query": PUBLISHED_ITEM_QUERY,
                    "variables": { "itemId": page_id, "language": language }
                }
            }
        });

        let data = match self.host.mutate(LIVE_GRAPHQL_KEY, params).await {
            Ok(data) => data,
            Err(e) => {
                component_warn!(ComponentId::current(), "Published item lookup for {} failed: {}", page_id, e);
                return Ok(None);
            }
        };

        let item = match data.pointer("/data/item") {
            Some(item) if !item.is_null() => item,
            _ => {
                component_debug!(ComponentId::current(), "Page {} has no published item", page_id);
                return Ok(None);
            }
        };

        match PublishedItem::deserialize(item) {
            Ok(item) => Ok(Some(item)),
            Err(e) => {
                component_warn!(ComponentId::current(), "Malformed published item for {}: {}", page_id, e);
                Ok(None)
            }
        }
    }
}
