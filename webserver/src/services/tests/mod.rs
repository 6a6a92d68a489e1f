//! Service tests for webserver
//!
//! Upstream APIs are stubbed with wiremock.
