use core::error::Error;
use core::fmt;

/// Returned by [`crate::queue::fifo::Queue::dequeue`] on an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dequeue from an empty queue")
    }
}

impl Error for EmptyQueueError {}
