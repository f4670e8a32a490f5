use core::fmt;
use core::ptr::NonNull;

use super::{iter::Iter, node::Node, sort};

/// An owning singly linked list of integers.
///
/// The list owns the chain hanging off `head` and releases it on drop.
pub struct LinkedList {
    head: Option<NonNull<Node>>,
    count: usize,
}

impl LinkedList {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            count: 0,
        }
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the number of nodes in the list
    pub fn count(&self) -> usize {
        self.count
    }

    /// Inserts `data` at the front of the list.
    pub fn push_front(&mut self, data: i32) {
        let mut node = Node::alloc(data);
        unsafe { node.as_mut().set_next(self.head) };
        self.head = Some(node);
        self.count += 1;
    }

    /// Get an iterator over the stored values, front to back.
    pub fn iter(&self) -> Iter<'_> {
        unsafe { Iter::new(self.head) }
    }

    /// Reorders the chain into non-decreasing order by relinking its nodes.
    ///
    /// Nothing is allocated or released; see [`sort::sort`].
    pub fn sort(&mut self) {
        let head = self.head.take();
        self.head = unsafe { sort::sort(head) };
    }

    /// Releases every node, leaving the list empty.
    pub fn clear(&mut self) {
        let head = self.head.take();
        self.count = 0;
        unsafe { Node::release_chain(head) };
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear()
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for LinkedList {
    /// Appends the values at the back of the list, in iteration order.
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut tail = self.head.map(|mut ptr| {
            while let Some(next) = unsafe { ptr.as_ref().next() } {
                ptr = next;
            }
            ptr
        });

        for data in iter {
            let node = Node::alloc(data);
            match tail {
                Some(mut prev) => unsafe { prev.as_mut().set_next(Some(node)) },
                None => self.head = Some(node),
            }
            tail = Some(node);
            self.count += 1;
        }
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl Send for LinkedList {}
unsafe impl Sync for LinkedList {}
