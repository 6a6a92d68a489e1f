//! Builders for mocked hosts and a gated insights client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, Notify};

use dashboard::traits::MockHostClient;
use dashboard::*;
use shared::{AnalysisResult, AuditMetrics, Strategy};
use super::fixtures::TestFixtures;

/// Builder for a host that knows the live context and the published pages
pub struct HostBuilder {
    host: MockHostClient,
}

impl HostBuilder {
    /// Host answering `application.context` and live GraphQL lookups any number of times
    pub fn new() -> Self {
        let mut host = MockHostClient::new();
        host.expect_query()
            .withf(|key| key == APPLICATION_CONTEXT_KEY)
            .returning(|_| Ok(TestFixtures::application_context()))
            .times(0..);
        host.expect_mutate()
            .withf(|key, _| key == LIVE_GRAPHQL_KEY)
            .returning(|_, params| {
                let page_id = params["params"]["body"]["variables"]["itemId"].as_str().unwrap_or_default();
                Ok(TestFixtures::published_item_response(page_id))
            })
            .times(0..);
        Self { host }
    }

    /// Host whose live lookups are counted exactly
    pub fn with_lookups(times: usize) -> Self {
        let mut host = MockHostClient::new();
        host.expect_query()
            .withf(|key| key == APPLICATION_CONTEXT_KEY)
            .returning(|_| Ok(TestFixtures::application_context()))
            .times(0..);
        host.expect_mutate()
            .returning(|_, params| {
                let page_id = params["params"]["body"]["variables"]["itemId"].as_str().unwrap_or_default();
                Ok(TestFixtures::published_item_response(page_id))
            })
            .times(times);
        Self { host }
    }

    /// Host without a live context id
    pub fn without_live_context() -> Self {
        let mut host = MockHostClient::new();
        host.expect_query()
            .returning(|_| Ok(serde_json::json!({ "resourceAccess": [] })))
            .times(0..);
        host.expect_mutate().times(0);
        Self { host }
    }

    /// Serve the page context query and subscription from `events`
    pub fn with_page_context(mut self, initial: &str, events: mpsc::Receiver<SubscriptionEvent>) -> Self {
        let initial = serde_json::json!({ "pageInfo": TestFixtures::page(initial) });
        self.host
            .expect_query()
            .withf(|key| key == PAGES_CONTEXT_KEY)
            .returning(move |_| Ok(initial.clone()))
            .times(1);
        self.host
            .expect_subscribe()
            .withf(|key| key == PAGES_CONTEXT_KEY)
            .return_once(move |_| Ok(events))
            .times(1);
        self
    }

    pub fn build(self) -> Arc<MockHostClient> {
        Arc::new(self.host)
    }
}

/// Insights client that holds audits until released
///
/// Lets tests change the page while a fetch is in flight.
pub struct GatedInsights {
    gate: Notify,
    started: Notify,
}

impl GatedInsights {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { gate: Notify::new(), started: Notify::new() })
    }

    /// Wait until an audit is parked at the gate
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl InsightsApi for GatedInsights {
    async fn run_audit(&self, url: &str, _strategy: Strategy) -> DashboardResult<AuditMetrics> {
        self.started.notify_one();
        self.gate.notified().await;
        Ok(TestFixtures::metrics_for(url))
    }

    async fn analyze(&self, _metrics: &AuditMetrics) -> DashboardResult<AnalysisResult> {
        Ok(TestFixtures::analysis("gated"))
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Controller already showing `page_id`
    pub async fn page_details_on<I: InsightsApi + 'static>(
        host: Arc<MockHostClient>,
        insights: Arc<I>,
        page_id: &str,
    ) -> PageDetails<MockHostClient, I> {
        init_logging(Some("debug"));
        let details = PageDetails::new(host, insights, DashboardConfig::default());
        details.apply_context(ContextState::Ready(TestFixtures::page(page_id))).await;
        details
    }

    /// Poll until `page_id` is current and its publication status is resolved
    pub async fn wait_for_page<I: InsightsApi + 'static>(details: &PageDetails<MockHostClient, I>, page_id: &str) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            let state = details.state().await;
            if state.page_id.as_deref() == Some(page_id) && state.publish_status != PublishStatus::Resolving {
                return;
            }
            assert!(tokio::time::Instant::now() < deadline, "timed out waiting for page {}", page_id);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    pub async fn assert_slots<I: InsightsApi + 'static>(
        details: &PageDetails<MockHostClient, I>,
        desktop: SlotState,
        mobile: SlotState,
    ) {
        let state = details.state().await;
        assert_eq!(state.cache.state(Strategy::Desktop), desktop, "desktop slot");
        assert_eq!(state.cache.state(Strategy::Mobile), mobile, "mobile slot");
    }
}
