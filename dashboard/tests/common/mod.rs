//! Common test utilities for the dashboard test suites

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{GatedInsights, HostBuilder, TestHelpers};
