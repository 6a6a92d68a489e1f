//! Webserver library for page insights
//!
//! Hosts the two endpoints the dashboard calls: a PageSpeed audit proxy that
//! extracts a fixed set of metrics, and an analysis endpoint that turns those
//! metrics into markdown tables and a summary through a text-generation API.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{AnalysisProvider, AuditProvider};

// Re-export service implementations
pub use services::{ApiKeys, RealOpenAiClient, RealPageSpeedClient};
