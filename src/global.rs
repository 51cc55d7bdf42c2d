//! Optional process-wide logger instances
//!
//! Explicitly constructed loggers passed to the code that uses them are the
//! primary API. These accessors exist for code that cannot thread a handle
//! through; each slot can be initialized once and is never replaced.
//!
//! Statics are not dropped at process exit, so the writer thread of a global
//! [`QueuedLogger`] is never joined: call [`QueuedLogger::wait`] before the
//! program ends to be sure every message was written.

use crate::core::{shared, Logger, LoggerError, QueuedLogger, Result};
use crate::sinks::ConsoleSink;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();
static GLOBAL_QUEUED_LOGGER: OnceLock<QueuedLogger> = OnceLock::new();

/// Install `logger` as the process-wide synchronous logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if one is already installed;
/// the rejected logger is dropped.
pub fn init_global_logger(logger: Logger) -> Result<&'static Logger> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized("logger"))?;
    GLOBAL_LOGGER
        .get()
        .ok_or(LoggerError::AlreadyInitialized("logger"))
}

pub fn global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// The process-wide synchronous logger, created on first use.
///
/// Whenever the logger has no sinks (first use, or after `clear`), standard
/// output is attached.
pub fn global_logger_or_console() -> &'static Logger {
    let logger = GLOBAL_LOGGER.get_or_init(Logger::new);
    logger.add_stream_if_empty(shared(ConsoleSink::new()));
    logger
}

/// Install `logger` as the process-wide queued logger.
pub fn init_global_queued_logger(logger: QueuedLogger) -> Result<&'static QueuedLogger> {
    GLOBAL_QUEUED_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized("queued logger"))?;
    GLOBAL_QUEUED_LOGGER
        .get()
        .ok_or(LoggerError::AlreadyInitialized("queued logger"))
}

pub fn global_queued_logger() -> Option<&'static QueuedLogger> {
    GLOBAL_QUEUED_LOGGER.get()
}

/// The process-wide queued logger, created on first use with standard output
/// attached whenever it has no sinks.
pub fn global_queued_logger_or_console() -> &'static QueuedLogger {
    let logger = GLOBAL_QUEUED_LOGGER.get_or_init(QueuedLogger::new);
    logger.add_stream_if_empty(shared(ConsoleSink::new()));
    logger
}
