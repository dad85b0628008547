//! A self-adjusting ordered multiset for Rust.
//!
//! This crate provides [`SplayTree`], an ordered collection over any item type: the
//! ordering comes from a [`Comparator`] supplied at construction instead of an `Ord`
//! bound on the container, duplicates are kept, and every stored occurrence is
//! addressed by a stable [`NodeId`] handle. Lookups that expect to be repeated go
//! through [`find`](SplayTree::find), which splays the item to the root so that
//! repeated and clustered accesses get cheaper as they happen.
//!
//! # Example
//!
//! ```
//! use splay_tree::SplayTree;
//!
//! let mut tree = SplayTree::new();
//!
//! tree.insert("cod");
//! tree.insert("herring");
//! tree.insert("cod"); // duplicates are kept
//! tree.insert("anchovy");
//!
//! // items come back in order, duplicates and all.
//! assert_eq!(
//!     tree.iter().collect::<Vec<_>>(),
//!     [&"anchovy", &"cod", &"cod", &"herring"],
//! );
//!
//! // finding an item splays it to the root.
//! let id = tree.find(&"herring").unwrap();
//! assert_eq!(tree.root(), Some(id));
//!
//! // the smallest item pops first.
//! assert_eq!(tree.pop(), Some("anchovy"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Multiset semantics** - Duplicates are kept, in stable insertion order among equals
//! - **Caller-supplied ordering** - A [`Comparator`] fixed at construction; [`Ord`] by default
//! - **Stable node handles** - [`NodeId`]s survive restructuring and drive neighbor walks
//! - **Self-adjusting** - Amortized O(log n) operations with no balancing metadata
//!
//! # Implementation
//!
//! The tree is a top-down splay tree after Sleator and Tarjan. Every searching
//! operation splays: it walks a single path from the root, hanging the nodes it
//! passes onto two accumulator chains, and one assembly step at the bottom stitches
//! the chains back together under the target node, which becomes the new root. The
//! pass is iterative and needs no parent pointers, so a node is just an item and two
//! child ids. Nodes live in a slab arena addressed by niche-compressed ids, which
//! keeps links at half the size of pointers and removals at O(1) slot reuse.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod raw;

pub mod splay_tree;

pub use comparator::{Comparator, NaturalOrder};
pub use raw::NodeId;
pub use splay_tree::SplayTree;
