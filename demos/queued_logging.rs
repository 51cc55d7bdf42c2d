//! Queued logging example
//!
//! Demonstrates the queued logger with console and file sinks, multi-threaded
//! producers, dated messages, and timing.
//!
//! Run with: cargo run --example queued_logging

use fanout_logger::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Fanout Logger - Queued Logging Example ===");

    let logger = QueuedLogger::with_console();

    println!("\n1. Logging to the console:");
    logger.post_dated("Test log #1")?;
    logger.post("first message")?;
    logger.post("second message")?;

    logger.set_prefix("\n  -- ");
    logger.set_suffix(" --");
    logger.post_dated("Test log #2")?;
    logger.post("a message")?;
    logger.wait();

    println!("\n\n2. Composed messages:");
    logger.set_prefix("\n  ");
    logger.set_suffix("");
    let mut msg = LogMessage::new("send message");
    msg.add("/with another part").add("/and still another part");
    logger.post(&msg)?;
    logger.wait();

    println!("\n\n3. Console plus file:");
    let file = open_file("queued_test.log")?;
    logger.add_stream(Arc::clone(&file));
    logger.post_dated("logging to console and queued_test.log")?;
    logger.post("end of file log")?;
    logger.wait();
    logger.remove_stream(&file);
    println!("\n   streams after removing the file: {}", logger.stream_count());

    println!("\n4. Multi-threaded producers:");
    let logger = Arc::new(logger);
    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || -> Result<()> {
                for i in 0..3 {
                    logger.post(format!("Thread {} - Message {}", thread_id, i))?;
                }
                Ok(())
            })
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .map_err(|_| LoggerError::other("producer thread panicked"))??;
    }
    logger.wait();

    println!("\n\n5. Timing:");
    logger.start();
    logger.post("measuring time for this post")?;
    logger.wait();
    logger.stop();
    println!("\n   elapsed microsecs = {:.0}", logger.elapsed_microseconds()?);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'queued_test.log' for file output");

    Ok(())
}
