//! Service implementations behind the host and insights seams

pub mod context_adapter;
pub mod insights_client;
pub mod published_item;

#[cfg(test)]
pub mod tests;

pub use context_adapter::{parse_page_context, ContextAdapter};
pub use insights_client::RealInsightsClient;
pub use published_item::{live_context_id, PublishedItemResolver};
