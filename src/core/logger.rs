//! Synchronous multi-sink logger

use super::{
    error::Result,
    metrics::LoggerMetrics,
    sink::{same_sink, shared, SharedSink},
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Prefix applied to every message until changed: a line break and an indent
pub const DEFAULT_PREFIX: &str = "\n  ";

pub const DEFAULT_SUFFIX: &str = "";

/// Separator between a dated message and its timestamp
pub const DATE_SEPARATOR: &str = " : ";

/// Prefix and suffix wrapped around every posted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
}

impl Decoration {
    pub fn apply(&self, msg: &str) -> String {
        let mut composite =
            String::with_capacity(self.prefix.len() + msg.len() + self.suffix.len());
        composite.push_str(&self.prefix);
        composite.push_str(msg);
        composite.push_str(&self.suffix);
        composite
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Logger that writes every message to all attached sinks on the calling
/// thread.
///
/// Sinks are written in the order they were added. Adding the same sink twice
/// is allowed; it then receives every message twice.
///
/// A sink that fails or panics is reported on stderr and skipped for that
/// message; the remaining sinks are still written.
///
/// # Example
///
/// ```
/// use fanout_logger::{shared, Logger, MemorySink};
///
/// let memory = MemorySink::new();
/// let logger = Logger::new();
/// logger.add_stream(shared(memory.clone()));
///
/// logger.set_prefix("> ");
/// logger.set_suffix(" <");
/// logger.post("x");
/// assert_eq!(memory.contents(), "> x <");
/// ```
pub struct Logger {
    sinks: RwLock<Vec<SharedSink>>,
    decoration: RwLock<Decoration>,
    timestamp_format: RwLock<TimestampFormat>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
            decoration: RwLock::new(Decoration::default()),
            timestamp_format: RwLock::new(TimestampFormat::default()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Logger with standard output already attached.
    #[must_use]
    pub fn with_console() -> Self {
        let logger = Self::new();
        logger.add_stream(shared(ConsoleSink::new()));
        logger
    }

    pub fn add_stream(&self, sink: SharedSink) {
        self.sinks.write().push(sink);
    }

    /// Attach `sink` only if no sink is attached, checked and pushed under one
    /// lock. Returns whether it was attached.
    pub fn add_stream_if_empty(&self, sink: SharedSink) -> bool {
        let mut sinks = self.sinks.write();
        if sinks.is_empty() {
            sinks.push(sink);
            true
        } else {
            false
        }
    }

    /// Detach the first occurrence of `sink`, then close it.
    ///
    /// The sink is closed even if it was not attached. Close failures are
    /// reported, never returned. Returns whether the sink was found.
    pub fn remove_stream(&self, sink: &SharedSink) -> bool {
        let found = {
            let mut sinks = self.sinks.write();
            match sinks.iter().position(|s| same_sink(s, sink)) {
                Some(idx) => {
                    sinks.remove(idx);
                    true
                }
                None => false,
            }
        };
        // Detached first so a concurrent fan-out never sees it closed
        self.close_sink(sink);
        found
    }

    pub fn stream_count(&self) -> usize {
        self.sinks.read().len()
    }

    /// Write `prefix + msg + suffix` to every sink.
    pub fn post(&self, msg: impl AsRef<str>) {
        let composite = self.decorate(msg.as_ref());
        self.metrics.record_posted();
        self.write(&composite, true);
    }

    /// Post `msg + " : " + <current time>`.
    pub fn post_dated(&self, msg: impl AsRef<str>) {
        let dated = self.date(msg.as_ref());
        self.post(dated);
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.decoration.write().prefix = prefix.into();
    }

    pub fn set_suffix(&self, suffix: impl Into<String>) {
        self.decoration.write().suffix = suffix.into();
    }

    pub fn prefix(&self) -> String {
        self.decoration.read().prefix.clone()
    }

    pub fn suffix(&self) -> String {
        self.decoration.read().suffix.clone()
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        *self.timestamp_format.write() = format;
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format.read().clone()
    }

    /// Close and detach every sink, then restore the default prefix and suffix.
    pub fn clear(&self) {
        let detached = std::mem::take(&mut *self.sinks.write());
        for sink in &detached {
            self.close_sink(sink);
        }
        *self.decoration.write() = Decoration::default();
    }

    /// Flush every sink, returning the first failure after trying them all.
    pub fn flush(&self) -> Result<()> {
        let sinks = self.sinks.read();
        let mut first_error = None;
        for sink in sinks.iter() {
            if let Err(e) = sink.lock().flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn decorate(&self, msg: &str) -> String {
        self.decoration.read().apply(msg)
    }

    pub(crate) fn date(&self, msg: &str) -> String {
        format!("{}{}{}", msg, DATE_SEPARATOR, self.timestamp_format.read().now())
    }

    /// Fan `text` out to every sink in order.
    ///
    /// **Per-sink isolation**: each sink call runs under `catch_unwind`, so a
    /// sink that errors or panics does not keep the message from the others.
    pub(crate) fn write(&self, text: &str, flush: bool) {
        let sinks = self.sinks.read();
        let mut has_error = false;

        for (idx, sink) in sinks.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| -> Result<()> {
                let mut sink = sink.lock();
                sink.write_str(text)?;
                if flush {
                    sink.flush()?;
                }
                Ok(())
            }));

            match result {
                Ok(Ok(())) => {
                    self.metrics.record_sink_write();
                }
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink #{} failed: {}", idx, e);
                    self.metrics.record_write_failure();
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_write_failure();
                    has_error = true;
                }
            }
        }

        if !has_error {
            self.metrics.record_written();
        }
    }

    fn close_sink(&self, sink: &SharedSink) {
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut sink = sink.lock();
            let name = sink.name().to_string();
            sink.close().map_err(|e| (name, e))
        }));

        let report = match result {
            Ok(Ok(())) => return,
            Ok(Err((name, e))) => format!("closing sink '{}' failed: {}", name, e),
            Err(panic_info) => format!(
                "sink panicked while closing: {}",
                panic_message(panic_info.as_ref())
            ),
        };
        eprintln!("[LOGGER ERROR] {}", report);
        self.metrics.record_close_failure();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.clear();
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
