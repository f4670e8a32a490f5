//! # Singly Linked Chains
//!
//! A chain is a sequence of heap-allocated [`node::Node`]s connected through
//! owning `next` links. Each node is owned by exactly one structure at a
//! time; removing a node transfers it to the caller.
//!
//! ## Core Components
//!
//! - [`node::Node`]: a single chain cell holding one `i32` and the link to
//!   the next cell.
//! - [`list::LinkedList`]: a safe owning wrapper over a chain.
//! - [`iter::Iter`]: front-to-back iteration over a chain.
//! - [`sort::sort`]: insertion sort that reorders a chain by relinking its
//!   nodes, without allocating or releasing any of them.
//!
//! # Examples
//!
//! ```
//! use chain_collections::linked_list::list::LinkedList;
//!
//! let mut list: LinkedList = [5, 22, 11, 33, 3, 2, 1].into_iter().collect();
//! list.sort();
//!
//! assert_eq!(list.count(), 7);
//! assert!(list.iter().eq([1, 2, 3, 5, 11, 22, 33]));
//! ```

pub mod iter;
pub mod list;
pub mod node;
pub mod sort;

#[cfg(test)]
mod tests;
