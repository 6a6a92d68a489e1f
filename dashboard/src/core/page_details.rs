//! Page-details controller
//!
//! Follows the page open in the host, keeps its publication status, and
//! serves strategy selections from the result cache. Every write that follows
//! an await is checked against the page generation captured before it, so
//! results for a page the user has left are dropped, even after returning to it.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use shared::{
    component_debug, component_info, component_warn, AnalysisResult, AuditMetrics, ComponentId,
    Strategy,
};
use crate::core::result_cache::ResultCache;
use crate::core::view::PageDetailsView;
use crate::error::{DashboardError, DashboardResult};
use crate::services::{ContextAdapter, PublishedItemResolver};
use crate::traits::{HostClient, InsightsApi};
use crate::types::{ContextState, DashboardConfig, PublishStatus};

/// Outcome of a strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Served from the cache without any request
    CacheHit,
    /// Audit and analysis fetched and stored
    Fetched,
    /// Fetch finished after the page changed; nothing was written
    Discarded,
}

#[derive(Debug, Clone)]
pub struct PageDetailsState {
    pub context: ContextState,
    /// Page the cache and publication status belong to
    pub page_id: Option<String>,
    /// Bumped on every page id change
    pub generation: u64,
    pub publish_status: PublishStatus,
    pub cache: ResultCache,
    /// Message of the most recent failed selection
    pub last_error: Option<String>,
}

impl Default for PageDetailsState {
    fn default() -> Self {
        Self {
            context: ContextState::Loading,
            page_id: None,
            generation: 0,
            publish_status: PublishStatus::Resolving,
            cache: ResultCache::new(),
            last_error: None,
        }
    }
}

pub struct PageDetails<H: HostClient, I: InsightsApi> {
    host: Arc<H>,
    insights: Arc<I>,
    config: DashboardConfig,
    state: Arc<RwLock<PageDetailsState>>,
}

impl<H: HostClient, I: InsightsApi> Clone for PageDetails<H, I> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            insights: self.insights.clone(),
            config: self.config.clone(),
            state: self.state.clone(),
        }
    }
}

impl<H: HostClient + 'static, I: InsightsApi + 'static> PageDetails<H, I> {
    pub fn new(host: Arc<H>, insights: Arc<I>, config: DashboardConfig) -> Self {
        Self {
            host,
            insights,
            config,
            state: Arc::new(RwLock::new(PageDetailsState::default())),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub async fn state(&self) -> PageDetailsState {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> PageDetailsView {
        PageDetailsView::from_state(&*self.state.read().await)
    }

    /// Follow the host's page context until the subscription ends
    pub async fn watch_context(&self) {
        let contexts = ContextAdapter::new(self.host.clone()).watch().await;
        self.run(contexts).await;
    }

    /// Apply every context change from `contexts`, always acting on the newest value
    pub async fn run(&self, mut contexts: watch::Receiver<ContextState>) {
        loop {
            let next = contexts.borrow_and_update().clone();
            self.apply_context(next).await;
            if contexts.changed().await.is_err() {
                break;
            }
        }
        component_debug!(ComponentId::current(), "Page context stream ended");
    }

    /// Apply one page context value
    ///
    /// A new page id clears the cache and re-resolves publication. The same id
    /// only refreshes the snapshot. A failed context blocks selections until
    /// a page is reported again.
    pub async fn apply_context(&self, next: ContextState) {
        let (page_id, generation) = {
            let mut state = self.state.write().await;
            let page = match &next {
                ContextState::Ready(page) => page.clone(),
                ContextState::Loading => return,
                ContextState::Failed(message) => {
                    component_warn!(ComponentId::current(), "Page context error: {}", message);
                    state.context = ContextState::Failed(message.clone());
                    return;
                }
            };
            state.context = next;
            if state.page_id.as_deref() == Some(page.id.as_str()) {
                return;
            }

            component_info!(ComponentId::current(), "Page changed to {} ({})", page.id, page.path);
            state.page_id = Some(page.id.clone());
            state.generation += 1;
            state.publish_status = PublishStatus::Resolving;
            state.cache.clear();
            state.last_error = None;
            (page.id, state.generation)
        };

        let status = self.resolve_publish_status(&page_id).await;

        let mut state = self.state.write().await;
        if state.generation == generation {
            state.publish_status = status;
        } else {
            component_debug!(ComponentId::current(), "Dropping publication status of {}", page_id);
        }
    }

    async fn resolve_publish_status(&self, page_id: &str) -> PublishStatus {
        let mut resolver = PublishedItemResolver::new(self.host.clone());
        let resolved = match resolver.initialize().await {
            Ok(()) => resolver.resolve(page_id, &self.config.language).await,
            Err(e) => Err(e),
        };
        match resolved {
            Ok(Some(item)) => PublishStatus::Published(item),
            Ok(None) => PublishStatus::NotPublished,
            Err(e) => {
                component_warn!(ComponentId::current(), "Could not resolve published item for {}: {}", page_id, e);
                PublishStatus::Failed(e.to_string())
            }
        }
    }

    /// Select a strategy for the current page
    ///
    /// Cached strategies only switch the active view. Otherwise the audit runs,
    /// then the analysis of its metrics, and both are stored together. A
    /// failure leaves the cache as it was before the call.
    pub async fn run_page_speed(&self, strategy: Strategy) -> DashboardResult<Selection> {
        let (page_id, generation, url) = {
            let mut state = self.state.write().await;
            if let ContextState::Failed(message) = &state.context {
                return Err(DashboardError::ContextUnavailable { message: message.clone() });
            }
            if let Some(loading) = state.cache.loading() {
                return Err(DashboardError::Busy { strategy: loading });
            }
            let url = state
                .publish_status
                .live_url()
                .map(str::to_string)
                .ok_or(DashboardError::NotPublished)?;
            let page_id = state.page_id.clone().ok_or(DashboardError::NotPublished)?;

            if state.cache.activate(strategy) {
                component_debug!(ComponentId::current(), "Serving cached {} result", strategy);
                state.last_error = None;
                return Ok(Selection::CacheHit);
            }
            state.cache.begin_loading(strategy);
            state.last_error = None;
            (page_id, state.generation, url)
        };

        let outcome = self.fetch(&url, strategy).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            component_debug!(ComponentId::current(), "Discarding {} result for {}", strategy, page_id);
            return Ok(Selection::Discarded);
        }
        match outcome {
            Ok((metrics, analysis)) => {
                state.cache.complete(strategy, metrics, analysis);
                component_info!(ComponentId::current(), "Stored {} result for {}", strategy, page_id);
                Ok(Selection::Fetched)
            }
            Err(e) => {
                state.cache.abort_loading(strategy);
                state.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch(&self, url: &str, strategy: Strategy) -> DashboardResult<(AuditMetrics, AnalysisResult)> {
        let metrics = self.insights.run_audit(url, strategy).await?;
        let analysis = self.insights.analyze(&metrics).await?;
        Ok((metrics, analysis))
    }
}
