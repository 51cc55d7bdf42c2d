//! Stress tests for the queued logger
//!
//! These tests verify:
//! - Per-producer ordering under many concurrent producers
//! - No loss when the logger is dropped with a full backlog
//! - Sink-set mutation while messages are in flight
//! - Shutdown racing with producers

use fanout_logger::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Sink that sleeps on every write to simulate slow I/O
struct SlowSink {
    inner: MemorySink,
    delay: Duration,
}

impl Sink for SlowSink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        thread::sleep(self.delay);
        self.inner.write_str(text)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

fn parse_lines(content: &str) -> Vec<(usize, usize)> {
    content
        .lines()
        .map(|line| {
            let (producer, seq) = line.split_once(':').expect("producer:seq");
            (producer.parse().unwrap(), seq.parse().unwrap())
        })
        .collect()
}

#[test]
fn test_concurrent_producers_keep_their_order() {
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 500;

    let memory = MemorySink::new();
    let logger = Arc::new(QueuedLogger::new());
    logger.add_stream(shared(memory.clone()));
    logger.set_prefix("");
    logger.set_suffix("\n");

    let handles: Vec<_> = (0..PRODUCERS)
        .map(|producer| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for seq in 0..PER_PRODUCER {
                    logger.post(format!("{}:{}", producer, seq)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer panicked");
    }
    logger.wait();

    let lines = parse_lines(&memory.contents());
    assert_eq!(lines.len(), PRODUCERS * PER_PRODUCER);

    let mut next: HashMap<usize, usize> = HashMap::new();
    for (producer, seq) in lines {
        let expected = next.entry(producer).or_insert(0);
        assert_eq!(seq, *expected, "producer {} out of order", producer);
        *expected += 1;
    }
    assert!(next.values().all(|&count| count == PER_PRODUCER));
}

#[test]
fn test_post_does_not_wait_for_slow_sink() {
    let memory = MemorySink::new();
    let logger = QueuedLogger::new();
    logger.set_prefix("");
    logger.add_stream(shared(SlowSink {
        inner: memory.clone(),
        delay: Duration::from_millis(20),
    }));

    let started = std::time::Instant::now();
    for i in 0..20 {
        logger.post(format!("{} ", i)).unwrap();
    }
    // 20 writes take at least 400ms; submission must not
    assert!(started.elapsed() < Duration::from_millis(200));

    logger.wait();
    assert_eq!(memory.contents().split_whitespace().count(), 20);
}

#[test]
fn test_drop_with_backlog_loses_nothing() {
    let memory = MemorySink::new();
    {
        let logger = QueuedLogger::new();
        logger.set_prefix("");
        logger.set_suffix("\n");
        logger.add_stream(shared(SlowSink {
            inner: memory.clone(),
            delay: Duration::from_micros(200),
        }));
        for i in 0..300 {
            logger.post(format!("0:{}", i)).unwrap();
        }
    }

    let seqs: Vec<usize> = parse_lines(&memory.contents())
        .into_iter()
        .map(|(_, seq)| seq)
        .collect();
    assert_eq!(seqs, (0..300).collect::<Vec<_>>());
}

#[test]
fn test_sink_churn_while_posting() {
    let stable = MemorySink::new();
    let logger = Arc::new(QueuedLogger::new());
    logger.set_prefix("");
    logger.set_suffix("\n");
    logger.add_stream(shared(stable.clone()));

    let churner = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            let mut transient = Vec::new();
            for _ in 0..200 {
                let memory = MemorySink::new();
                let handle = shared(memory.clone());
                logger.add_stream(Arc::clone(&handle));
                thread::yield_now();
                assert!(logger.remove_stream(&handle));
                transient.push(memory);
            }
            transient
        })
    };

    for i in 0..2000 {
        logger.post(format!("0:{}", i)).unwrap();
    }
    let transient = churner.join().expect("churner panicked");
    logger.wait();

    // The stable sink saw every message exactly once, in order
    let seqs: Vec<usize> = parse_lines(&stable.contents())
        .into_iter()
        .map(|(_, seq)| seq)
        .collect();
    assert_eq!(seqs, (0..2000).collect::<Vec<_>>());

    // Transient sinks only ever received whole messages
    for memory in transient {
        for line in memory.contents().lines() {
            assert!(line.starts_with("0:"), "partial write: {:?}", line);
        }
    }
    assert_eq!(logger.stream_count(), 1);
}

#[test]
fn test_shutdown_races_with_producers() {
    let memory = MemorySink::new();
    let logger = Arc::new(QueuedLogger::new());
    logger.set_prefix("");
    logger.set_suffix("\n");
    logger.add_stream(shared(memory.clone()));

    let accepted = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..4)
        .map(|producer| {
            let logger = Arc::clone(&logger);
            let accepted = Arc::clone(&accepted);
            thread::spawn(move || {
                for seq in 0..1000 {
                    match logger.post(format!("{}:{}", producer, seq)) {
                        Ok(()) => {
                            accepted.fetch_add(1, Ordering::SeqCst);
                        }
                        Err(LoggerError::LoggerStopped) => break,
                        Err(e) => panic!("unexpected error: {}", e),
                    }
                }
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(2));
    logger.shutdown().expect("clean shutdown");
    for handle in handles {
        handle.join().expect("producer panicked");
    }

    // Everything accepted before shutdown was written; nothing after
    assert_eq!(logger.writer_state(), WriterState::Stopped);
    assert_eq!(
        memory.contents().lines().count(),
        accepted.load(Ordering::SeqCst)
    );
}

#[test]
fn test_concurrent_decoration_changes() {
    let memory = MemorySink::new();
    let logger = Arc::new(QueuedLogger::new());
    logger.add_stream(shared(memory.clone()));
    logger.set_suffix("\n");

    let decorator = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..500 {
                logger.set_prefix(if i % 2 == 0 { "A|" } else { "B|" });
            }
        })
    };

    for _ in 0..500 {
        logger.post("msg").unwrap();
    }
    decorator.join().expect("decorator panicked");
    logger.wait();

    let content = memory.contents();
    // Every message carries one complete prefix, whichever was current
    for line in content.lines().filter(|line| !line.is_empty()) {
        let body = line
            .trim_start()
            .trim_start_matches("A|")
            .trim_start_matches("B|");
        assert_eq!(body, "msg", "bad line {:?}", line);
    }
    assert_eq!(content.matches("msg").count(), 500);
}
