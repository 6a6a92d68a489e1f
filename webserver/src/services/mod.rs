//! Service implementations
//!
//! Real implementations of the upstream API traits for production use

pub mod api_keys;
pub mod openai_client;
pub mod pagespeed_client;
pub mod prompt;

#[cfg(test)]
pub mod tests;

// Re-export service implementations
pub use api_keys::ApiKeys;
pub use openai_client::RealOpenAiClient;
pub use pagespeed_client::RealPageSpeedClient;
