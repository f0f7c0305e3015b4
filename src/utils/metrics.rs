//! Observability and Metrics
//!
//! Traffic counters for codec streams. Wrap any source or sink in
//! `stream::Metered` to have its transfers recorded here.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Metrics collector for codec stream traffic
#[derive(Debug)]
pub struct Metrics {
    /// Total read requests issued to sources
    pub reads_total: AtomicU64,
    /// Total bytes delivered by sources
    pub bytes_read: AtomicU64,
    /// Reads that delivered fewer bytes than requested
    pub short_reads: AtomicU64,
    /// Total write requests issued to sinks
    pub writes_total: AtomicU64,
    /// Total bytes accepted by sinks
    pub bytes_written: AtomicU64,
    /// Writes that accepted fewer bytes than requested
    pub short_writes: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            reads_total: AtomicU64::new(0),
            bytes_read: AtomicU64::new(0),
            short_reads: AtomicU64::new(0),
            writes_total: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            short_writes: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a read of `requested` bytes that delivered `transferred`
    pub fn record_read(&self, requested: usize, transferred: usize) {
        self.reads_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_read
            .fetch_add(transferred as u64, Ordering::Relaxed);
        if transferred < requested {
            self.short_reads.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a write of `requested` bytes that accepted `transferred`
    pub fn record_write(&self, requested: usize, transferred: usize) {
        self.writes_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_written
            .fetch_add(transferred as u64, Ordering::Relaxed);
        if transferred < requested {
            self.short_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reads_total: self.reads_total.load(Ordering::Relaxed),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            short_reads: self.short_reads.load(Ordering::Relaxed),
            writes_total: self.writes_total.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            short_writes: self.short_writes.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            reads_total = snapshot.reads_total,
            bytes_read = snapshot.bytes_read,
            short_reads = snapshot.short_reads,
            writes_total = snapshot.writes_total,
            bytes_written = snapshot.bytes_written,
            short_writes = snapshot.short_writes,
            uptime_seconds = snapshot.uptime_seconds,
            "Codec metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub reads_total: u64,
    pub bytes_read: u64,
    pub short_reads: u64,
    pub writes_total: u64,
    pub bytes_written: u64,
    pub short_writes: u64,
    pub uptime_seconds: u64,
}
