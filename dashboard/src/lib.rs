//! Page-details orchestration for the page insights dashboard
//!
//! Resolves the published URL of the page open in the page builder, runs
//! desktop or mobile audits through the webserver endpoints, and caches one
//! result per strategy until the page changes. The host SDK and the webserver
//! are injected through traits so the whole flow runs without a live host.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use crate::core::{PageDetails, PageDetailsView, PublishBadge, ResultCache, Selection, SlotState, StrategySlot};
pub use error::{DashboardError, DashboardResult};
pub use services::{ContextAdapter, PublishedItemResolver, RealInsightsClient};
pub use traits::{HostClient, InsightsApi};
pub use types::*;

/// Tag log events as coming from the dashboard and install the tracing subscriber
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(log_level: Option<&str>) {
    shared::ComponentId::init_dashboard();
    shared::logging::init_tracing_with_level(log_level);
}
