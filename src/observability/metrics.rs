//! Thread-safe metrics collection
//!
//! Atomic counters for high-frequency events and a mutex-protected map for
//! per-category counts.

use crate::classifier::{ClassificationResult, TaskCategory};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Global metrics collector instance
pub static METRICS: Lazy<MetricsCollector> = Lazy::new(MetricsCollector::new);

/// Get reference to global metrics collector
pub fn metrics() -> &'static MetricsCollector {
    &METRICS
}

/// Thread-safe metrics collector using atomics and a mutex
pub struct MetricsCollector {
    classifications: AtomicU64,
    task_requests: AtomicU64,
    inputs_truncated: AtomicU64,
    inputs_rejected: AtomicU64,
    per_category: Mutex<BTreeMap<TaskCategory, u64>>,
    started_at: AtomicU64,
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSnapshot {
    pub classifications: u64,
    pub task_requests: u64,
    pub inputs_truncated: u64,
    pub inputs_rejected: u64,
    pub per_category: BTreeMap<String, u64>,
    pub uptime_seconds: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            classifications: AtomicU64::new(0),
            task_requests: AtomicU64::new(0),
            inputs_truncated: AtomicU64::new(0),
            inputs_rejected: AtomicU64::new(0),
            per_category: Mutex::new(BTreeMap::new()),
            started_at: AtomicU64::new(current_timestamp()),
        }
    }

    /// Record one classification outcome
    pub fn record_classification(&self, result: &ClassificationResult) {
        self.classifications.fetch_add(1, Ordering::Relaxed);
        if result.is_task_request() {
            self.task_requests.fetch_add(1, Ordering::Relaxed);
        }
        if let Ok(mut per_category) = self.per_category.lock() {
            *per_category.entry(result.category).or_insert(0) += 1;
        }
    }

    pub fn input_truncated(&self) {
        self.inputs_truncated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn input_rejected(&self) {
        self.inputs_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_metrics(&self) -> MetricsSnapshot {
        let per_category = self
            .per_category
            .lock()
            .map(|map| {
                map.iter()
                    .map(|(category, count)| (category.to_string(), *count))
                    .collect()
            })
            .unwrap_or_default();

        MetricsSnapshot {
            classifications: self.classifications.load(Ordering::Relaxed),
            task_requests: self.task_requests.load(Ordering::Relaxed),
            inputs_truncated: self.inputs_truncated.load(Ordering::Relaxed),
            inputs_rejected: self.inputs_rejected.load(Ordering::Relaxed),
            per_category,
            uptime_seconds: current_timestamp()
                .saturating_sub(self.started_at.load(Ordering::Relaxed)),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
