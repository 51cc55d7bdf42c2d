//! Timestamp formatting for dated messages
//!
//! `post_dated` appends `" : "` followed by the current time rendered with a
//! [`TimestampFormat`]. The default mirrors a classic ctime-style local clock
//! reading; machine-friendly formats are available for log files that are
//! parsed later.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use fanout_logger::TimestampFormat;
///
/// let format = TimestampFormat::Iso8601;
/// let stamp = format.now();
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local wall-clock time: `Wed Jan  8 10:30:45 2025`
    ///
    /// This is the default, meant for humans reading a console.
    #[default]
    Local,

    /// ISO 8601 UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 UTC with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, rendered in local time
    ///
    /// # Examples
    ///
    /// ```
    /// use fanout_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%Y-%m-%d".to_string());
    /// assert_eq!(format.now().len(), 10);
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Local => datetime
                .with_timezone(&Local)
                .format("%a %b %e %H:%M:%S %Y")
                .to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                let local = datetime.with_timezone(&Local);
                if write!(out, "{}", local.format(format_str)).is_err() {
                    // Invalid specifier
                    return datetime.to_rfc3339();
                }
                out
            }
        }
    }

    /// Reject a `Custom` format containing a specifier chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp_format",
                    format!("'{}' is not a valid strftime format", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Format the current time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
