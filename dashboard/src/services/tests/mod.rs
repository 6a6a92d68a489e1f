//! Service tests for the dashboard
//!
//! The host SDK is mocked with mockall; the webserver endpoints are stubbed
//! with wiremock.
