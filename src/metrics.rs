use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub items_registered: Arc<AtomicU64>,
    pub items_updated: Arc<AtomicU64>,
    pub items_deleted: Arc<AtomicU64>,
    pub photos_stored: Arc<AtomicU64>,
    pub bytes_uploaded: Arc<AtomicU64>,
    pub searches: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            items_registered: Arc::new(AtomicU64::new(0)),
            items_updated: Arc::new(AtomicU64::new(0)),
            items_deleted: Arc::new(AtomicU64::new(0)),
            photos_stored: Arc::new(AtomicU64::new(0)),
            bytes_uploaded: Arc::new(AtomicU64::new(0)),
            searches: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_items_registered(&self) {
        self.items_registered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_items_updated(&self) {
        self.items_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_items_deleted(&self) {
        self.items_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_photo(&self, bytes: u64) {
        self.photos_stored.fetch_add(1, Ordering::Relaxed);
        self.bytes_uploaded.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self, item_count: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            items_current: item_count,
            items_registered: self.items_registered.load(Ordering::Relaxed),
            items_updated: self.items_updated.load(Ordering::Relaxed),
            items_deleted: self.items_deleted.load(Ordering::Relaxed),
            photos_stored: self.photos_stored.load(Ordering::Relaxed),
            bytes_uploaded: self.bytes_uploaded.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub items_current: usize,
    pub items_registered: u64,
    pub items_updated: u64,
    pub items_deleted: u64,
    pub photos_stored: u64,
    pub bytes_uploaded: u64,
    pub searches: u64,
    pub uptime_seconds: u64,
}
