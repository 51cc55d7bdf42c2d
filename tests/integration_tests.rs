//! Integration tests for the fanout logger
//!
//! These tests verify:
//! - Ordered delivery through the queued logger
//! - Fan-out to several sinks, including failing ones
//! - Decoration and dated messages
//! - Clearing and sink removal
//! - File sinks and the file-open helper
//! - Timing instrumentation

use fanout_logger::prelude::*;
use fanout_logger::{DEFAULT_PREFIX, LoggerError};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

struct FailingSink;

impl Sink for FailingSink {
    fn write_str(&mut self, _text: &str) -> Result<()> {
        Err(LoggerError::other("Simulated failure"))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "FailingSink"
    }
}

#[test]
fn test_dated_then_plain_messages_in_order() {
    let memory = MemorySink::new();
    let logger = QueuedLogger::new();
    logger.add_stream(shared(memory.clone()));

    logger.post_dated("ready").expect("post_dated");
    logger.post("a").expect("post");
    logger.post("b").expect("post");
    logger.wait();

    let content = memory.contents();
    let ready = content.find("\n  ready : ").expect("dated message present");
    let a = content.find("\n  a").expect("a present");
    let b = content.find("\n  b").expect("b present");
    assert!(ready < a && a < b, "unexpected order: {:?}", content);

    // Three messages, each starting with the default prefix
    assert_eq!(content.matches(DEFAULT_PREFIX).count(), 3);
}

#[test]
fn test_decoration_applied_exactly_once() {
    let first = MemorySink::new();
    let second = MemorySink::new();
    let logger = QueuedLogger::new();
    logger.add_stream(shared(first.clone()));
    logger.add_stream(shared(second.clone()));
    logger.set_prefix("> ");
    logger.set_suffix(" <");

    logger.post("x").unwrap();
    logger.wait();

    assert_eq!(first.contents(), "> x <");
    assert_eq!(second.contents(), "> x <");
}

#[test]
fn test_fan_out_survives_failing_sink() {
    let sinks: Vec<MemorySink> = (0..3).map(|_| MemorySink::new()).collect();
    let logger = QueuedLogger::new();
    logger.set_prefix("");
    logger.set_suffix(";");
    logger.add_stream(shared(sinks[0].clone()));
    logger.add_stream(shared(FailingSink));
    logger.add_stream(shared(sinks[1].clone()));
    logger.add_stream(shared(sinks[2].clone()));

    for i in 0..10 {
        logger.post(i.to_string()).unwrap();
    }
    logger.wait();

    for sink in &sinks {
        assert_eq!(sink.contents(), "0;1;2;3;4;5;6;7;8;9;");
    }
    assert_eq!(logger.metrics().write_failures(), 10);
    assert_eq!(logger.metrics().posted(), 10);
}

#[test]
fn test_clear_detaches_all_sinks() {
    let first = MemorySink::new();
    let second = MemorySink::new();
    let logger = QueuedLogger::new();
    logger.add_stream(shared(first.clone()));
    logger.add_stream(shared(second.clone()));

    logger.clear();
    assert_eq!(logger.stream_count(), 0);

    logger.post("x").unwrap();
    logger.wait();
    assert!(first.is_empty());
    assert!(second.is_empty());
}

#[test]
fn test_remove_stream_stops_delivery() {
    let kept = MemorySink::new();
    let removed = MemorySink::new();
    let removed_handle = shared(removed.clone());

    let logger = Logger::new();
    logger.set_prefix("");
    logger.add_stream(shared(kept.clone()));
    logger.add_stream(Arc::clone(&removed_handle));

    logger.post("both ");
    assert!(logger.remove_stream(&removed_handle));
    assert!(!logger.remove_stream(&removed_handle));
    logger.post("one");

    assert_eq!(kept.contents(), "both one");
    assert_eq!(removed.contents(), "both ");
}

#[test]
fn test_log_message_parts() {
    let memory = MemorySink::new();
    let logger = QueuedLogger::new();
    logger.add_stream(shared(memory.clone()));
    logger.set_prefix("");
    logger.set_suffix("|");

    let mut msg = LogMessage::new("send message");
    msg.add("/with another part").add("/and still another part");
    logger.post(&msg).unwrap();
    msg.clear();
    logger.post(&msg).unwrap();
    logger.wait();

    assert_eq!(
        memory.contents(),
        "send message/with another part/and still another part||"
    );
}

#[test]
fn test_file_sink_via_open_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("test.log");

    let logger = QueuedLogger::new();
    logger.set_prefix("");
    logger.set_suffix("\n");
    let file = open_file(&log_file).expect("Failed to open log file");
    logger.add_stream(Arc::clone(&file));

    logger.post("logging to file").unwrap();
    logger.post("end of test log").unwrap();
    logger.wait();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "logging to file\nend of test log\n");

    // Removing the sink closes the file; later posts do not reach it
    assert!(logger.remove_stream(&file));
    logger.post("after removal").unwrap();
    logger.wait();
    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(!content.contains("after removal"));
}

#[test]
fn test_closed_file_does_not_block_other_sinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = open_file(temp_dir.path().join("closed.log")).unwrap();
    file.lock().close().unwrap();

    let memory = MemorySink::new();
    let logger = Logger::new();
    logger.set_prefix("");
    logger.add_stream(file);
    logger.add_stream(shared(memory.clone()));

    logger.post("still delivered");

    assert_eq!(memory.contents(), "still delivered");
    assert_eq!(logger.metrics().write_failures(), 1);
}

#[test]
fn test_drop_closes_file_after_draining() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("drop.log");

    {
        let logger = QueuedLogger::new();
        logger.set_prefix("");
        logger.add_stream(open_file(&log_file).unwrap());
        for i in 0..500 {
            logger.post(format!("{},", i)).unwrap();
        }
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let expected: String = (0..500).map(|i| format!("{},", i)).collect();
    assert_eq!(content, expected);
}

#[test]
fn test_timer_measures_processing() {
    let logger = QueuedLogger::new();
    logger.add_stream(shared(MemorySink::new()));

    logger.start();
    logger.post("measured").unwrap();
    logger.wait();
    logger.stop();

    let micros = logger.elapsed_microseconds().expect("timer was started");
    assert!(micros >= 0.0);
    assert!(micros < 1_000_000.0, "elapsed was {}", micros);
}

#[test]
fn test_timer_read_before_start() {
    let logger = QueuedLogger::new();
    assert!(matches!(
        logger.elapsed_microseconds(),
        Err(LoggerError::TimerNotStarted)
    ));
}

#[test]
fn test_timestamp_formats() {
    let memory = MemorySink::new();
    let logger = Logger::builder()
        .prefix("")
        .timestamp_format(TimestampFormat::Unix)
        .sink(shared(memory.clone()))
        .build()
        .unwrap();

    logger.post_dated("at");
    let content = memory.contents();
    let (msg, stamp) = content.split_once(" : ").expect("separator present");
    assert_eq!(msg, "at");
    assert!(stamp.parse::<i64>().expect("numeric timestamp") > 0);
}

#[test]
fn test_writer_sink_adapter() {
    let buffer = Arc::new(parking_lot::Mutex::new(Vec::<u8>::new()));

    struct SharedVec(Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedVec {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let logger = QueuedLogger::new();
    logger.set_prefix("");
    logger.add_stream(shared(WriterSink::new(SharedVec(Arc::clone(&buffer)))));
    logger.post("bytes").unwrap();
    logger.wait();

    assert_eq!(buffer.lock().as_slice(), b"bytes");
}

#[test]
fn test_trait_objects_share_contract() {
    let memory = MemorySink::new();
    let loggers: Vec<Box<dyn MultiLogger>> = vec![
        create_logger(shared(memory.clone())),
        create_queued_logger(shared(memory.clone())),
    ];

    for logger in &loggers {
        logger.set_prefix("");
        logger.set_suffix(".");
        logger.post("m").unwrap();
    }
    drop(loggers);

    assert_eq!(memory.contents(), "m.m.");
}
