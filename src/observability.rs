//! In-process counters for tracking saves and displays

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    tracking_saved: AtomicU64,
    tracking_rejected: AtomicU64,
    tracking_displayed: AtomicU64,
    tracking_absent: AtomicU64,
    settings_saved: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracking_saved(&self) {
        self.tracking_saved.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "tracking_saved", "Metric incremented");
    }

    pub fn tracking_rejected(&self) {
        self.tracking_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "tracking_rejected", "Metric incremented");
    }

    pub fn tracking_displayed(&self) {
        self.tracking_displayed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "tracking_displayed", "Metric incremented");
    }

    pub fn tracking_absent(&self) {
        self.tracking_absent.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "tracking_absent", "Metric incremented");
    }

    pub fn settings_saved(&self) {
        self.settings_saved.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "settings_saved", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            tracking_saved: self.tracking_saved.load(Ordering::Relaxed),
            tracking_rejected: self.tracking_rejected.load(Ordering::Relaxed),
            tracking_displayed: self.tracking_displayed.load(Ordering::Relaxed),
            tracking_absent: self.tracking_absent.load(Ordering::Relaxed),
            settings_saved: self.settings_saved.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub tracking_saved: u64,
    pub tracking_rejected: u64,
    pub tracking_displayed: u64,
    pub tracking_absent: u64,
    pub settings_saved: u64,
}
