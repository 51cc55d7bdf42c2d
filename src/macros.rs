//! Formatting macros for posting messages.
//!
//! These macros provide a `format!`-style interface on top of `post` and
//! `post_dated`. They expand to the method call, so with a
//! [`QueuedLogger`](crate::QueuedLogger) the result is a `Result<()>` the
//! caller should handle.
//!
//! # Examples
//!
//! ```
//! use fanout_logger::prelude::*;
//! use fanout_logger::post;
//!
//! let memory = MemorySink::new();
//! let logger = Logger::new();
//! logger.add_stream(shared(memory.clone()));
//! logger.set_prefix("");
//!
//! let port = 8080;
//! post!(logger, "listening on port {}", port);
//! assert_eq!(memory.contents(), "listening on port 8080");
//! ```

/// Post a formatted message.
///
/// # Examples
///
/// ```
/// # use fanout_logger::prelude::*;
/// use fanout_logger::post;
///
/// let logger = QueuedLogger::new();
/// post!(logger, "Processing {} items", 100).unwrap();
/// logger.wait();
/// ```
#[macro_export]
macro_rules! post {
    ($logger:expr, $($arg:tt)+) => {
        $logger.post(format!($($arg)+))
    };
}

/// Post a formatted message followed by the current time.
///
/// # Examples
///
/// ```
/// # use fanout_logger::prelude::*;
/// use fanout_logger::post_dated;
///
/// let logger = Logger::new();
/// post_dated!(logger, "Test log #{}", 1);
/// ```
#[macro_export]
macro_rules! post_dated {
    ($logger:expr, $($arg:tt)+) => {
        $logger.post_dated(format!($($arg)+))
    };
}
