//! Adapter that turns any `std::io::Write` into a sink

use crate::core::{Result, Sink};
use std::io::Write;

/// Sink over an arbitrary writer such as a `Vec<u8>`, a pipe, or a
/// caller-managed file.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_name(writer, "writer")
    }

    pub fn with_name(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    /// Borrow the wrapped writer.
    ///
    /// Only reachable before the sink is handed to [`shared`](crate::shared);
    /// to read output back afterwards, wrap a writer that shares its buffer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the writer; like [`get_ref`](Self::get_ref), only before the
    /// sink is shared.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
