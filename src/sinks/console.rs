//! Console sink implementation

use crate::core::{Result, Sink};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Which standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_target(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::with_target(ConsoleTarget::Stderr)
    }

    pub fn with_target(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(text.as_bytes())?,
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(text.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    // The process streams stay open; removal only flushes.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
