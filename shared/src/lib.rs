//! Shared types for the page insights system
//!
//! Contains the wire types exchanged between the dashboard and the webserver
//! endpoints, plus the tracing setup used by both components.

pub mod types;
pub mod errors;
pub mod logging;
pub mod messages;

pub use types::*;
pub use errors::*;

pub use messages::{
    // Endpoint A (audit) payloads
    AuditMetrics, PerformanceAudits, SeoAudits, AuditRequest,
    PERFORMANCE_AUDIT_KEYS, SEO_AUDIT_KEYS,

    // Endpoint B (analysis) payloads
    AnalysisResult, StrategyResult,

    // Error body shared by both endpoints
    ErrorResponse,
};
