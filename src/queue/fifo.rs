use core::fmt;
use core::ptr::NonNull;

use crate::linked_list::{iter::Iter, node::Node};

use super::error::EmptyQueueError;

/// An unbounded FIFO queue of integers over a singly linked chain.
///
/// `front` owns the chain; `rear` aliases the last node of the same chain
/// and is only dereferenced while the chain is non-empty. Either both
/// pointers are set or both are unset, and `rear`'s next link is always
/// `None`.
pub struct Queue {
    front: Option<NonNull<Node>>,
    rear: Option<NonNull<Node>>,
    size: usize,
}

impl Queue {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Queue {
            front: None,
            rear: None,
            size: 0,
        }
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Always false: the queue has no capacity bound. Kept for symmetry
    /// with bounded queue interfaces.
    pub const fn is_full(&self) -> bool {
        false
    }

    /// Get the number of values currently held
    pub fn count(&self) -> usize {
        self.size
    }

    /// The value at the front of the queue, if any.
    pub fn front(&self) -> Option<i32> {
        self.front.map(|ptr| unsafe { ptr.as_ref().data() })
    }

    /// The value at the rear of the queue, if any.
    pub fn rear(&self) -> Option<i32> {
        self.rear.map(|ptr| unsafe { ptr.as_ref().data() })
    }

    /// Appends `data` at the rear of the queue.
    ///
    /// Allocation failure aborts the process through the global allocator;
    /// see [`Node::alloc`].
    pub fn enqueue(&mut self, data: i32) {
        let node = Node::alloc(data);
        match self.rear {
            Some(mut rear) => unsafe { rear.as_mut().set_next(Some(node)) },
            None => self.front = Some(node),
        }
        self.rear = Some(node);
        self.size += 1;
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// Returns [`EmptyQueueError`] if the queue holds nothing.
    pub fn dequeue(&mut self) -> Result<i32, EmptyQueueError> {
        let ptr = self.front.ok_or(EmptyQueueError)?;
        unsafe {
            self.front = ptr.as_ref().next();
            if self.front.is_none() {
                self.rear = None;
            }
            self.size -= 1;
            Ok(Node::consume(ptr))
        }
    }

    /// Get an iterator over the held values, front to rear.
    pub fn iter(&self) -> Iter<'_> {
        unsafe { Iter::new(self.front) }
    }

    /// Releases every node, returning the queue to its initial state.
    pub fn clear(&mut self) {
        let head = self.front.take();
        self.rear = None;
        self.size = 0;
        unsafe { Node::release_chain(head) };
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for Queue {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for data in iter {
            self.enqueue(data);
        }
    }
}

impl FromIterator<i32> for Queue {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}
