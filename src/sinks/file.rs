//! File sink implementation and the file-open helper

use crate::core::{shared, LoggerError, Result, SharedSink, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileSink {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| {
            LoggerError::io_operation(
                format!("creating '{}'", path.display()),
                "cannot open log file",
                e,
            )
        })?;
        Ok(Self::from_file(file, path))
    }

    /// Open the file at `path` for appending, creating it if missing.
    pub fn append(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    format!("opening '{}'", path.display()),
                    "cannot open log file",
                    e,
                )
            })?;
        Ok(Self::from_file(file, path))
    }

    fn from_file(file: File, path: PathBuf) -> Self {
        Self {
            writer: Some(BufWriter::new(file)),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

impl Sink for FileSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::sink_closed(self.path.display().to_string()))?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flush and release the file handle. Closing twice is harmless.
    fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(writer) => {
                writer.into_inner().map_err(|e| {
                    LoggerError::file_sink(self.path.display().to_string(), e.error().to_string())
                })?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.flush();
    }
}

/// Create the file at `path` and return it as a sink handle ready to attach.
///
/// # Example
///
/// ```no_run
/// use fanout_logger::{open_file, Logger};
///
/// let logger = Logger::new();
/// match open_file("test.log") {
///     Ok(sink) => logger.add_stream(sink),
///     Err(e) => eprintln!("could not open log file: {}", e),
/// }
/// ```
pub fn open_file(path: impl AsRef<Path>) -> Result<SharedSink> {
    Ok(shared(FileSink::create(path.as_ref())?))
}
