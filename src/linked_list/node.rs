use core::ptr::NonNull;

use alloc::boxed::Box;

/// A cell in a singly linked chain.
///
/// Holds one value and the owning link to the next cell. A node belongs to
/// exactly one chain at a time; whoever holds the head of a chain is
/// responsible for releasing every node reachable from it.
#[derive(Debug)]
pub struct Node {
    data: i32,
    next: Option<NonNull<Node>>,
}

impl Node {
    /// Allocates a detached node holding `data`, with no next link.
    ///
    /// Allocation failure aborts the process through the global allocator;
    /// there is no recoverable out-of-memory path.
    pub fn alloc(data: i32) -> NonNull<Node> {
        NonNull::from(Box::leak(Box::new(Node { data, next: None })))
    }

    /// The value stored in the node.
    pub fn data(&self) -> i32 {
        self.data
    }

    /// The next pointer in the chain.
    pub fn next(&self) -> Option<NonNull<Node>> {
        self.next
    }

    /// Sets the next pointer in the chain.
    pub fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.next = next;
    }

    /// Takes the value out of the node and releases its memory.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Node::alloc`] and no chain may still link to
    /// it. The pointer is dangling after this call.
    pub unsafe fn consume(ptr: NonNull<Node>) -> i32 {
        unsafe { Box::from_raw(ptr.as_ptr()).data }
    }

    /// Releases every node reachable from `head` through next links.
    ///
    /// # Safety
    ///
    /// The caller must exclusively own the chain, and no pointer into it may
    /// be used after this call.
    pub unsafe fn release_chain(mut head: Option<NonNull<Node>>) {
        while let Some(ptr) = head {
            unsafe {
                head = ptr.as_ref().next();
                Node::consume(ptr);
            }
        }
    }
}
