//! Trait view over both loggers, plus factories that hand out trait objects
//!
//! Code that only needs to post messages and manage sinks can take a
//! `&dyn MultiLogger` and work with either variant; code that also needs the
//! drain barrier or timing takes a `&dyn QueuedMultiLogger`.

use super::{
    error::Result,
    logger::Logger,
    queued_logger::QueuedLogger,
    sink::SharedSink,
};

pub trait MultiLogger: Send + Sync {
    fn add_stream(&self, sink: SharedSink);
    fn remove_stream(&self, sink: &SharedSink) -> bool;
    fn stream_count(&self) -> usize;
    fn post(&self, msg: &str) -> Result<()>;
    fn post_dated(&self, msg: &str) -> Result<()>;
    fn set_prefix(&self, prefix: &str);
    fn set_suffix(&self, suffix: &str);
    fn clear(&self);
}

pub trait QueuedMultiLogger: MultiLogger {
    fn wait(&self);
    fn start(&self);
    fn stop(&self);
    fn elapsed_microseconds(&self) -> Result<f64>;
}

impl MultiLogger for Logger {
    fn add_stream(&self, sink: SharedSink) {
        Logger::add_stream(self, sink);
    }

    fn remove_stream(&self, sink: &SharedSink) -> bool {
        Logger::remove_stream(self, sink)
    }

    fn stream_count(&self) -> usize {
        Logger::stream_count(self)
    }

    fn post(&self, msg: &str) -> Result<()> {
        Logger::post(self, msg);
        Ok(())
    }

    fn post_dated(&self, msg: &str) -> Result<()> {
        Logger::post_dated(self, msg);
        Ok(())
    }

    fn set_prefix(&self, prefix: &str) {
        Logger::set_prefix(self, prefix);
    }

    fn set_suffix(&self, suffix: &str) {
        Logger::set_suffix(self, suffix);
    }

    fn clear(&self) {
        Logger::clear(self);
    }
}

impl MultiLogger for QueuedLogger {
    fn add_stream(&self, sink: SharedSink) {
        QueuedLogger::add_stream(self, sink);
    }

    fn remove_stream(&self, sink: &SharedSink) -> bool {
        QueuedLogger::remove_stream(self, sink)
    }

    fn stream_count(&self) -> usize {
        QueuedLogger::stream_count(self)
    }

    fn post(&self, msg: &str) -> Result<()> {
        QueuedLogger::post(self, msg)
    }

    fn post_dated(&self, msg: &str) -> Result<()> {
        QueuedLogger::post_dated(self, msg)
    }

    fn set_prefix(&self, prefix: &str) {
        QueuedLogger::set_prefix(self, prefix);
    }

    fn set_suffix(&self, suffix: &str) {
        QueuedLogger::set_suffix(self, suffix);
    }

    fn clear(&self) {
        QueuedLogger::clear(self);
    }
}

impl QueuedMultiLogger for QueuedLogger {
    fn wait(&self) {
        QueuedLogger::wait(self);
    }

    fn start(&self) {
        QueuedLogger::start(self);
    }

    fn stop(&self) {
        QueuedLogger::stop(self);
    }

    fn elapsed_microseconds(&self) -> Result<f64> {
        QueuedLogger::elapsed_microseconds(self)
    }
}

/// New synchronous logger with `sink` attached, behind the trait interface.
pub fn create_logger(sink: SharedSink) -> Box<dyn MultiLogger> {
    let logger = Logger::new();
    logger.add_stream(sink);
    Box::new(logger)
}

/// New queued logger with `sink` attached, behind the trait interface.
pub fn create_queued_logger(sink: SharedSink) -> Box<dyn QueuedMultiLogger> {
    let logger = QueuedLogger::new();
    logger.add_stream(sink);
    Box::new(logger)
}
