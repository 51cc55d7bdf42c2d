//! Thread-safe FIFO hand-off between producer threads and a single consumer
//!
//! Items travel through an unbounded `crossbeam-channel`, which keeps
//! `enqueue` non-blocking and gives a single global order across producers.
//! On top of the channel the queue tracks how many items are still
//! *unfinished*: an item counts from the moment it is enqueued until the
//! consumer reports it with [`BlockingQueue::task_done`]. That count backs
//! [`BlockingQueue::wait_drained`], which lets any thread block until the
//! consumer has fully processed everything submitted so far.

use super::error::{LoggerError, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Condvar, Mutex};

pub struct BlockingQueue<T> {
    sender: Sender<T>,
    receiver: Receiver<T>,
    unfinished: Mutex<usize>,
    drained: Condvar,
}

impl<T> BlockingQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            unfinished: Mutex::new(0),
            drained: Condvar::new(),
        }
    }

    /// Append an item to the back of the queue. Never blocks.
    pub fn enqueue(&self, item: T) {
        // Count first so a fast consumer can never observe the item
        // before it is accounted for.
        *self.unfinished.lock() += 1;
        // Both channel ends live as long as `self`, so the send cannot fail
        if self.sender.send(item).is_err() {
            self.task_done();
        }
    }

    /// Remove and return the item at the front, blocking until one exists.
    pub fn dequeue(&self) -> Result<T> {
        self.receiver
            .recv()
            .map_err(|_| LoggerError::ChannelReceiveError)
    }

    /// Remove and return the front item if one is immediately available.
    pub fn try_dequeue(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    /// Number of items waiting to be dequeued.
    ///
    /// Momentarily consistent only; intended for diagnostics.
    pub fn size(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Items enqueued but not yet reported with [`task_done`](Self::task_done).
    pub fn unfinished(&self) -> usize {
        *self.unfinished.lock()
    }

    /// Mark one previously dequeued item as fully processed.
    pub fn task_done(&self) {
        let mut unfinished = self.unfinished.lock();
        *unfinished = unfinished.saturating_sub(1);
        if *unfinished == 0 {
            self.drained.notify_all();
        }
    }

    /// Block until every enqueued item has been dequeued and marked done.
    pub fn wait_drained(&self) {
        let mut unfinished = self.unfinished.lock();
        while *unfinished > 0 {
            self.drained.wait(&mut unfinished);
        }
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
