//! In-memory sink, useful for capturing output in tests

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that appends everything it receives to a shared string buffer.
///
/// Clones share the same buffer, so a caller can hand one clone to a logger
/// and read the captured text through another.
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
/// logger.set_prefix("");
/// logger.post("captured");
/// assert_eq!(memory.contents(), "captured");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Return the captured text and empty the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
