//! Logger metrics for observability
//!
//! Provides counters for monitoring logger health: messages submitted,
//! messages fanned out, and per-sink write or close failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use fanout_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_posted();
/// metrics.record_written();
///
/// assert_eq!(metrics.posted(), 1);
/// assert_eq!(metrics.written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages accepted by `post`/`post_dated`
    posted: AtomicU64,

    /// Messages that reached every attached sink without error
    written: AtomicU64,

    /// Individual sink writes that succeeded
    sink_writes: AtomicU64,

    /// Individual sink writes (or flushes) that failed or panicked
    write_failures: AtomicU64,

    /// Sink close attempts that failed
    close_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            posted: AtomicU64::new(0),
            written: AtomicU64::new(0),
            sink_writes: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            close_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn posted(&self) -> u64 {
        self.posted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_writes(&self) -> u64 {
        self.sink_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn close_failures(&self) -> u64 {
        self.close_failures.load(Ordering::Relaxed)
    }

    /// Record a submitted message, returning the previous count
    #[inline]
    pub fn record_posted(&self) -> u64 {
        self.posted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_write(&self) -> u64 {
        self.sink_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_close_failure(&self) -> u64 {
        self.close_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of individual sink writes that failed, as a percentage
    /// (0.0 - 100.0)
    ///
    /// Counted per sink, not per message: one message fanned out to two sinks
    /// with one failing is 50%. Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.sink_writes() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.posted.store(0, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        self.sink_writes.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.close_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            posted: AtomicU64::new(self.posted()),
            written: AtomicU64::new(self.written()),
            sink_writes: AtomicU64::new(self.sink_writes()),
            write_failures: AtomicU64::new(self.write_failures()),
            close_failures: AtomicU64::new(self.close_failures()),
        }
    }
}
