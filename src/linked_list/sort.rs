use core::ptr::NonNull;

use super::node::Node;

/// Insertion sort over a detached chain.
///
/// Takes ownership of the chain starting at `head` and returns the head of
/// the same nodes relinked into non-decreasing order. No node is allocated
/// or released. Each node is spliced in before the first sorted node whose
/// value is greater than or equal to its own, so equal values keep their
/// original relative order.
///
/// `None` is a no-op. Runs in O(n²) worst case, O(n) on already-ascending
/// input.
///
/// # Safety
///
/// `head` must be the head of a well-formed chain (terminated by `None`)
/// exclusively owned by the caller. Every pointer into the chain other than
/// the returned head is invalidated by the relinking.
pub unsafe fn sort(head: Option<NonNull<Node>>) -> Option<NonNull<Node>> {
    let mut sorted: Option<NonNull<Node>> = None;
    let mut remaining = head;

    while let Some(node) = remaining {
        unsafe {
            remaining = node.as_ref().next();
            sorted = insert(sorted, node);
        }
    }

    sorted
}

// Splices a detached node into a sorted chain, keeping it sorted.
unsafe fn insert(sorted: Option<NonNull<Node>>, mut node: NonNull<Node>) -> Option<NonNull<Node>> {
    unsafe {
        let data = node.as_ref().data();
        match sorted {
            Some(head) if head.as_ref().data() < data => {
                let mut prev = head;
                while let Some(next) = prev.as_ref().next() {
                    if next.as_ref().data() >= data {
                        break;
                    }
                    prev = next;
                }
                node.as_mut().set_next(prev.as_ref().next());
                prev.as_mut().set_next(Some(node));
                Some(head)
            }
            _ => {
                node.as_mut().set_next(sorted);
                Some(node)
            }
        }
    }
}
