//! Metrics registry for the inventory service
//!
//! - Counters only, plus the current item count
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Metrics registry containing all operational counters
///
/// All counters use atomic operations with Relaxed ordering; readers only
/// need eventually consistent values.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful creates
    items_created: AtomicU64,
    /// Successful updates
    items_updated: AtomicU64,
    /// Successful deletes
    items_deleted: AtomicU64,
    /// Payloads rejected by validation
    validation_failures: AtomicU64,
    /// Requests that referenced an unknown id
    not_found: AtomicU64,
    /// Items currently in the store
    items: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful create
    pub fn increment_created(&self) {
        self.items_created.fetch_add(1, Ordering::Relaxed);
        self.items.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful update
    pub fn increment_updated(&self) {
        self.items_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful delete
    pub fn increment_deleted(&self) {
        self.items_deleted.fetch_add(1, Ordering::Relaxed);
        self.items.fetch_sub(1, Ordering::Relaxed);
    }

    /// Record a rejected payload
    pub fn increment_validation_failures(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup of an unknown id
    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            items_created: self.items_created.load(Ordering::Relaxed),
            items_updated: self.items_updated.load(Ordering::Relaxed),
            items_deleted: self.items_deleted.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            items: self.items.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub items_created: u64,
    pub items_updated: u64,
    pub items_deleted: u64,
    pub validation_failures: u64,
    pub not_found: u64,
    pub items: u64,
}
