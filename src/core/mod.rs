//! Core logger types and traits

pub mod blocking_queue;
pub mod config;
pub mod error;
pub mod interface;
pub mod log_message;
pub mod logger;
pub mod metrics;
pub mod queued_logger;
pub mod sink;
pub mod timer;
pub mod timestamp;

pub use blocking_queue::BlockingQueue;
pub use config::{LoggerBuilder, LoggerConfig};
pub use error::{LoggerError, Result};
pub use interface::{create_logger, create_queued_logger, MultiLogger, QueuedMultiLogger};
pub use log_message::LogMessage;
pub use logger::{Decoration, Logger, DATE_SEPARATOR, DEFAULT_PREFIX, DEFAULT_SUFFIX};
pub use metrics::LoggerMetrics;
pub use queued_logger::{QueuedLogger, WriterState};
pub use sink::{same_sink, shared, SharedSink, Sink};
pub use timer::Timer;
pub use timestamp::TimestampFormat;
