//! Composable message text

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message assembled from parts in append order.
///
/// Parts are joined verbatim; no separator is inserted.
///
/// # Example
///
/// ```
/// use fanout_logger::LogMessage;
///
/// let mut msg = LogMessage::new("send message");
/// msg.add("/with another part").add("/and still another part");
/// assert_eq!(msg.as_str(), "send message/with another part/and still another part");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogMessage {
    text: String,
}

impl LogMessage {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            text: preamble.into(),
        }
    }

    pub fn add(&mut self, part: impl AsRef<str>) -> &mut Self {
        self.text.push_str(part.as_ref());
        self
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for LogMessage {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<LogMessage> for String {
    fn from(msg: LogMessage) -> Self {
        msg.text
    }
}
