//! Value-semantic singly-linked list over index-linked storage.
//!
//! [`ForwardList`] is a sequential container with O(1) insertion at both
//! ends and O(1) removal at the front. It owns a chain of nodes where each
//! node stores one payload and the index of its successor; a tracked tail
//! index makes back-insertion constant-time even though links only point
//! forward.
//!
//! # Design Philosophy
//!
//! Pointer-chained lists pay for their flexibility twice: per-node
//! allocations, and a non-owning tail pointer that dangles the moment an
//! operation forgets to maintain it. This crate stores nodes in slab-like
//! slot storage and links them by index instead:
//!
//! ```text
//! Arena (slots)   - owns the nodes, recycles removed slots
//! ForwardList     - head/tail/len over the chain of indices
//! ```
//!
//! Benefits:
//! - **No dangling tail**: a stale index cannot point into freed memory
//! - **Slot reuse**: steady push/pop churn allocates nothing
//! - **Compact links**: `u32` indices by default, half the size of pointers
//! - **Iterative everywhere**: destruction and reverse traversal never
//!   recurse, so depth is independent of list length
//!
//! # Quick Start
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut list: ForwardList<u64> = ForwardList::new();
//!
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.back(), Some(&3));
//!
//! // Deep copy - mutating the clone never touches the source
//! let mut copy = list.clone();
//! copy.pop_front();
//! assert_eq!(list.len(), 3);
//!
//! // Diagnostic rendering, front to back
//! assert_eq!(list.to_string(), "1,2,3,");
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `push_back` / `push_front` | O(1) | amortized when storage grows |
//! | `pop_front` | O(1) | `None` on empty, resets tail on last node |
//! | `front` / `back` / `len` | O(1) | |
//! | `clear` / drop | O(len) | each payload dropped exactly once |
//! | `clone` | O(len) | deep copy, node by node, in order |
//!
//! Empty-list access returns `None` rather than being undefined, and the
//! zero-length constructors (`with_len(0)`, empty iterators) produce the
//! empty list. A moved-from list obtained via `std::mem::take` is empty and
//! reusable.
//!
//! # Feature Flags
//!
//! - `slab` - Use `slab::Slab` as the node storage backend via the
//!   `SlabNodes` alias

#![warn(missing_docs)]

pub mod index;
pub mod list;
pub mod storage;

pub use index::Index;
pub use list::{ArenaNodes, ForwardList, IntoIter, Iter, IterMut, Node};
pub use storage::{Arena, Storage};

#[cfg(feature = "slab")]
pub use list::SlabNodes;
