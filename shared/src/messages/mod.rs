//! Payloads exchanged with the webserver endpoints
//!
//! - `metrics`: audit metrics extracted from the PageSpeed report (endpoint A)
//! - `analysis`: generated tables and summary (endpoint B), per-strategy results
//! - `api`: request and error bodies

pub mod metrics;
pub mod analysis;
pub mod api;

pub use metrics::{AuditMetrics, PerformanceAudits, SeoAudits, PERFORMANCE_AUDIT_KEYS, SEO_AUDIT_KEYS};

pub use analysis::{AnalysisResult, StrategyResult};

pub use api::{AuditRequest, ErrorResponse};
