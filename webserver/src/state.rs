//! Webserver state management

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub server_start_time: Instant,

    // Request counters
    pub audit_requests: AtomicU64,
    pub analysis_requests: AtomicU64,
    pub failed_requests: AtomicU64,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            server_start_time: Instant::now(),
            audit_requests: AtomicU64::new(0),
            analysis_requests: AtomicU64::new(0),
            failed_requests: AtomicU64::new(0),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    pub fn record_audit_request(&self) -> u64 {
        self.audit_requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_analysis_request(&self) -> u64 {
        self.analysis_requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_failure(&self) -> u64 {
        self.failed_requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn audit_count(&self) -> u64 {
        self.audit_requests.load(Ordering::Relaxed)
    }

    pub fn analysis_count(&self) -> u64 {
        self.analysis_requests.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self) -> u64 {
        self.failed_requests.load(Ordering::Relaxed)
    }
}
