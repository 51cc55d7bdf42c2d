//! Sink trait for log output destinations

use super::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A writable destination for decorated log text.
///
/// Text is written verbatim: loggers put any line breaks in the prefix or
/// suffix, so sinks must not add their own.
pub trait Sink: Send {
    fn write_str(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Release the underlying resource. Called when the sink is removed from a
    /// logger. Sinks that do not own a resource only flush.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}

/// Handle through which loggers and callers share a sink.
///
/// A logger keeps a clone of the handle; the caller keeps another to remove
/// the sink later or to inspect it.
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap a sink in a [`SharedSink`] handle.
pub fn shared<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}

/// Whether two handles refer to the same sink allocation.
pub fn same_sink(a: &SharedSink, b: &SharedSink) -> bool {
    // Compare data pointers only; vtable pointers may differ between
    // codegen units for the same type.
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}
