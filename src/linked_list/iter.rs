use core::marker::PhantomData;
use core::ptr::NonNull;

use super::node::Node;

/// A front-to-back iterator over a chain, yielding the stored values.
pub struct Iter<'a> {
    current: Option<NonNull<Node>>,
    _chain: PhantomData<&'a Node>,
}

impl Iter<'_> {
    /// Creates an iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// The chain must stay unmodified and alive while the iterator is alive.
    pub unsafe fn new(head: Option<NonNull<Node>>) -> Self {
        Self {
            current: head,
            _chain: PhantomData,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.current.map(|ptr| unsafe {
            self.current = ptr.as_ref().next();
            ptr.as_ref().data()
        })
    }
}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
