//! Queued logger: submission on the caller's thread, writing on a dedicated
//! writer thread
//!
//! `post` decorates the message immediately, so each message captures the
//! prefix and suffix in effect when it was submitted, then hands the finished
//! text to a [`BlockingQueue`]. One writer thread per logger dequeues entries
//! and fans them out to the sinks, which keeps the output in global submission
//! order and means no two sink writes ever run at once.
//!
//! Sinks are resolved when a message is written, not when it is posted: a sink
//! added while messages are still queued receives those messages too.

use super::{
    blocking_queue::BlockingQueue,
    error::{LoggerError, Result},
    logger::{panic_message, Logger},
    metrics::LoggerMetrics,
    sink::{shared, SharedSink},
    timer::Timer,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Entries carried from producers to the writer thread.
///
/// Shutdown is its own variant, so no message text can ever be mistaken for
/// the stop signal.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QueueEntry {
    Message(String),
    Shutdown,
}

/// Lifecycle of the writer thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Dequeuing and writing messages
    Running,
    /// Saw the shutdown entry and exited
    Stopped,
}

/// Logger whose `post` returns as soon as the message is queued.
///
/// # Example
///
/// ```
/// use fanout_logger::{shared, MemorySink, QueuedLogger};
///
/// let memory = MemorySink::new();
/// let logger = QueuedLogger::new();
/// logger.add_stream(shared(memory.clone()));
/// logger.set_prefix("");
/// logger.set_suffix("\n");
///
/// logger.post("a").unwrap();
/// logger.post("b").unwrap();
/// logger.wait();
///
/// assert_eq!(memory.contents(), "a\nb\n");
/// ```
pub struct QueuedLogger {
    core: Arc<Logger>,
    queue: Arc<BlockingQueue<QueueEntry>>,
    /// `false` once the shutdown entry has been queued. Submissions hold this
    /// lock while enqueuing so nothing can land behind the shutdown entry.
    accepting: Mutex<bool>,
    writer: Mutex<Option<thread::JoinHandle<()>>>,
    stopped: Arc<AtomicBool>,
    timer: Mutex<Timer>,
}

impl QueuedLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::from_logger(Logger::new())
    }

    /// Queued logger with standard output already attached.
    #[must_use]
    pub fn with_console() -> Self {
        let logger = Self::new();
        logger.add_stream(shared(ConsoleSink::new()));
        logger
    }

    /// Wrap a configured synchronous logger, keeping its sinks and decoration.
    #[must_use]
    pub fn from_logger(logger: Logger) -> Self {
        let core = Arc::new(logger);
        let queue = Arc::new(BlockingQueue::new());
        let stopped = Arc::new(AtomicBool::new(false));

        let handle = {
            let core = Arc::clone(&core);
            let queue = Arc::clone(&queue);
            let stopped = Arc::clone(&stopped);
            thread::spawn(move || {
                Self::run_writer(&core, &queue);
                stopped.store(true, Ordering::Release);
            })
        };

        Self {
            core,
            queue,
            accepting: Mutex::new(true),
            writer: Mutex::new(Some(handle)),
            stopped,
            timer: Mutex::new(Timer::new()),
        }
    }

    fn run_writer(core: &Logger, queue: &BlockingQueue<QueueEntry>) {
        loop {
            let entry = match queue.dequeue() {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("[LOGGER ERROR] Writer thread lost its queue: {}", e);
                    return;
                }
            };

            match entry {
                QueueEntry::Shutdown => {
                    queue.task_done();
                    return;
                }
                QueueEntry::Message(text) => {
                    // Flush once the backlog is gone rather than per message
                    core.write(&text, queue.is_empty());
                    queue.task_done();
                }
            }
        }
    }

    fn submit(&self, text: String) -> Result<()> {
        let accepting = self.accepting.lock();
        if !*accepting {
            return Err(LoggerError::LoggerStopped);
        }
        self.queue.enqueue(QueueEntry::Message(text));
        self.core.metrics().record_posted();
        Ok(())
    }

    /// Queue `prefix + msg + suffix` for writing.
    ///
    /// Fails with [`LoggerError::LoggerStopped`] after [`shutdown`](Self::shutdown).
    pub fn post(&self, msg: impl AsRef<str>) -> Result<()> {
        let composite = self.core.decorate(msg.as_ref());
        self.submit(composite)
    }

    /// Queue `msg + " : " + <current time>`, decorated once.
    pub fn post_dated(&self, msg: impl AsRef<str>) -> Result<()> {
        let dated = self.core.date(msg.as_ref());
        self.post(dated)
    }

    /// Block until every message submitted so far has been written.
    ///
    /// Written means handed to each sink's `write_str`; it says nothing about
    /// the data reaching stable storage.
    pub fn wait(&self) {
        self.queue.wait_drained();
    }

    /// Messages queued but not yet picked up by the writer thread
    pub fn pending(&self) -> usize {
        self.queue.size()
    }

    pub fn add_stream(&self, sink: SharedSink) {
        self.core.add_stream(sink);
    }

    pub fn add_stream_if_empty(&self, sink: SharedSink) -> bool {
        self.core.add_stream_if_empty(sink)
    }

    pub fn remove_stream(&self, sink: &SharedSink) -> bool {
        self.core.remove_stream(sink)
    }

    pub fn stream_count(&self) -> usize {
        self.core.stream_count()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.core.set_prefix(prefix);
    }

    pub fn set_suffix(&self, suffix: impl Into<String>) {
        self.core.set_suffix(suffix);
    }

    pub fn prefix(&self) -> String {
        self.core.prefix()
    }

    pub fn suffix(&self) -> String {
        self.core.suffix()
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.core.set_timestamp_format(format);
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.core.timestamp_format()
    }

    /// Drain the queue, then close and detach every sink and restore the
    /// default decoration.
    pub fn clear(&self) {
        self.wait();
        self.core.clear();
    }

    /// Drain the queue, then flush every sink.
    pub fn flush(&self) -> Result<()> {
        self.wait();
        self.core.flush()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.core.metrics()
    }

    pub fn start(&self) {
        self.timer.lock().start();
    }

    pub fn stop(&self) {
        self.timer.lock().stop();
    }

    /// Microseconds between `start` and `stop` (or now, if still running).
    ///
    /// The timer is not tied to the queue: to time how long messages take to
    /// be written, call [`wait`](Self::wait) before [`stop`](Self::stop).
    pub fn elapsed_microseconds(&self) -> Result<f64> {
        self.timer.lock().elapsed_microseconds()
    }

    pub fn writer_state(&self) -> WriterState {
        if self.stopped.load(Ordering::Acquire) {
            WriterState::Stopped
        } else {
            WriterState::Running
        }
    }

    pub fn is_closed(&self) -> bool {
        !*self.accepting.lock()
    }

    /// Stop accepting messages, let the writer drain everything already
    /// queued, and join it.
    ///
    /// Calling this more than once is harmless. Sinks stay attached; they are
    /// closed when the logger is dropped or cleared.
    pub fn shutdown(&self) -> Result<()> {
        {
            let mut accepting = self.accepting.lock();
            if *accepting {
                *accepting = false;
                self.queue.enqueue(QueueEntry::Shutdown);
            }
        }

        if let Some(handle) = self.writer.lock().take() {
            if let Err(e) = handle.join() {
                let msg = panic_message(e.as_ref());
                eprintln!("[LOGGER ERROR] Writer thread panicked during shutdown: {}", msg);
                return Err(LoggerError::writer(msg));
            }
        }
        Ok(())
    }
}

impl Default for QueuedLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QueuedLogger {
    fn drop(&mut self) {
        let _ = self.shutdown();
        self.core.clear();
    }
}
