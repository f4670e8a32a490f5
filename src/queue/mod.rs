//! # FIFO Queue
//!
//! An unbounded first-in-first-out queue of integers backed by a singly
//! linked chain of [`crate::linked_list::node::Node`]s.
//!
//! # Examples
//!
//! ```
//! use chain_collections::queue::fifo::Queue;
//!
//! let mut q = Queue::new();
//! q.enqueue(2);
//! q.enqueue(3);
//!
//! assert_eq!(q.dequeue(), Ok(2));
//! assert_eq!(q.dequeue(), Ok(3));
//! assert!(q.is_empty());
//! ```

pub mod error;
pub mod fifo;
