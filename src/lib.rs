//! # Fanout Logger
//!
//! A multi-destination logger: every posted message is decorated with a
//! prefix and suffix (and optionally a timestamp) and written to each attached
//! sink.
//!
//! ## Features
//!
//! - **Two variants**: [`Logger`] writes on the calling thread; [`QueuedLogger`]
//!   queues messages for a single writer thread so producers never wait on I/O
//! - **Ordered**: a queued logger writes messages in submission order
//! - **Fault tolerant**: a failing sink is reported and skipped, never fatal
//! - **Thread safe**: sinks and decoration can be changed from any thread

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        create_logger, create_queued_logger, shared, LogMessage, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, MultiLogger, QueuedLogger, QueuedMultiLogger,
        Result, SharedSink, Sink, Timer, TimestampFormat, WriterState,
    };
    pub use crate::sinks::{open_file, ConsoleSink, ConsoleTarget, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    create_logger, create_queued_logger, same_sink, shared, BlockingQueue, Decoration, LogMessage,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MultiLogger, QueuedLogger,
    QueuedMultiLogger, Result, SharedSink, Sink, Timer, TimestampFormat, WriterState,
    DATE_SEPARATOR, DEFAULT_PREFIX, DEFAULT_SUFFIX,
};
pub use global::{
    global_logger, global_logger_or_console, global_queued_logger,
    global_queued_logger_or_console, init_global_logger, init_global_queued_logger,
};
pub use sinks::{open_file, ConsoleSink, ConsoleTarget, FileSink, MemorySink, WriterSink};
