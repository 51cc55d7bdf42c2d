//! Logger configuration and builder
//!
//! A [`LoggerConfig`] is plain data that can be loaded from JSON; a
//! [`LoggerBuilder`] turns it (or fluent calls) into a ready logger.

use super::{
    error::{LoggerError, Result},
    logger::{Logger, DEFAULT_PREFIX, DEFAULT_SUFFIX},
    queued_logger::QueuedLogger,
    sink::{shared, SharedSink},
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, ConsoleTarget, FileSink};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Declarative logger setup
///
/// # Example
///
/// ```
/// use fanout_logger::{ConsoleTarget, LoggerConfig, TimestampFormat};
///
/// let config = LoggerConfig::from_json_str(r#"{
///     "prefix": "\n  -- ",
///     "suffix": " --",
///     "timestamp_format": "Rfc3339",
///     "console": "stderr"
/// }"#).unwrap();
///
/// assert_eq!(config.suffix, " --");
/// assert_eq!(config.timestamp_format, TimestampFormat::Rfc3339);
/// assert_eq!(config.console, Some(ConsoleTarget::Stderr));
/// assert!(config.files.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub prefix: String,
    pub suffix: String,
    pub timestamp_format: TimestampFormat,
    /// Console stream to attach, if any
    pub console: Option<ConsoleTarget>,
    /// Log files to attach, in order
    pub files: Vec<PathBuf>,
    /// Append to existing files instead of truncating them
    pub append: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            timestamp_format: TimestampFormat::default(),
            console: None,
            files: Vec::new(),
            append: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                format!("reading '{}'", path.display()),
                "cannot read logger configuration",
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check for settings that cannot produce a working logger
    pub fn validate(&self) -> Result<()> {
        self.timestamp_format.validate()?;
        for (idx, file) in self.files.iter().enumerate() {
            if file.as_os_str().is_empty() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("files[{}] is an empty path", idx),
                ));
            }
            if self.files[..idx].contains(file) {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("'{}' is listed more than once", file.display()),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for constructing loggers with a fluent API
///
/// # Example
/// ```
/// use fanout_logger::prelude::*;
///
/// let memory = MemorySink::new();
/// let logger = Logger::builder()
///     .prefix("[")
///     .suffix("]")
///     .sink(shared(memory.clone()))
///     .build()
///     .unwrap();
///
/// logger.post("built");
/// assert_eq!(memory.contents(), "[built]");
/// ```
pub struct LoggerBuilder {
    prefix: String,
    suffix: String,
    timestamp_format: TimestampFormat,
    console: Option<ConsoleTarget>,
    files: Vec<PathBuf>,
    append: bool,
    sinks: Vec<SharedSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            prefix: config.prefix,
            suffix: config.suffix,
            timestamp_format: config.timestamp_format,
            console: config.console,
            files: config.files,
            append: config.append,
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Attach a console stream; it is added before any other sink.
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, target: ConsoleTarget) -> Self {
        self.console = Some(target);
        self
    }

    /// Attach a log file, opened when the logger is built.
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Attach an already constructed sink, after console and files.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Build a synchronous logger.
    ///
    /// Fails if any configured file cannot be opened.
    pub fn build(self) -> Result<Logger> {
        let config = LoggerConfig {
            prefix: self.prefix,
            suffix: self.suffix,
            timestamp_format: self.timestamp_format,
            console: self.console,
            files: self.files,
            append: self.append,
        };
        config.validate()?;

        let logger = Logger::new();
        logger.set_prefix(config.prefix);
        logger.set_suffix(config.suffix);
        logger.set_timestamp_format(config.timestamp_format);

        if let Some(target) = config.console {
            logger.add_stream(shared(ConsoleSink::with_target(target)));
        }
        for path in config.files {
            let sink = if config.append {
                FileSink::append(path)?
            } else {
                FileSink::create(path)?
            };
            logger.add_stream(shared(sink));
        }
        for sink in self.sinks {
            logger.add_stream(sink);
        }

        Ok(logger)
    }

    /// Build a queued logger with the same setup.
    pub fn build_queued(self) -> Result<QueuedLogger> {
        Ok(QueuedLogger::from_logger(self.build()?))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl QueuedLogger {
    /// Create a builder; finish it with [`LoggerBuilder::build_queued`]
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
