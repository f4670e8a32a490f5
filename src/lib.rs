//! Singly linked chain collections.
//!
//! Provides a FIFO queue backed by a singly linked chain of heap nodes and
//! an insertion sort that reorders a chain by relinking its nodes in place.

#![no_std]

extern crate alloc;

pub mod linked_list;
pub mod queue;
