//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::{open_file, FileSink};
pub use memory::MemorySink;
pub use writer::WriterSink;

pub use crate::core::Sink;
