//! A library containing a `no_std` [Red-Black Tree](Rbt) whose nodes live in a growable arena owned by the tree.
//! Every leaf and the parent of the root point at a single permanently black sentinel node (arena slot `0`), so the
//! balancing code never has to branch on a missing child.
//!
//! Duplicate keys are allowed. An element equal to existing elements is placed after them in order, and every
//! element is addressed by the [NodeRef] handle returned from [insert](Rbt::insert). Handles are generation checked,
//! so a handle to a node that has since been deleted is rejected with [InvalidNode](Error::InvalidNode) instead of
//! silently touching whichever node reused the slot.
//!
//! We use a custom `NodeKey` trait for ordering the elements in the tree. A blanket implementation is provided for
//! all types that implement the `Ord` trait, however the user can implement the trait for their own types to order
//! by a key other than the type itself, which turns the tree into an ordered multimap.
//!
//! ## Benchmarks
//!
//! There are currently some benchmarks available in the `benches` directory. These benchmarks test the performance
//! of the tree with 4096 entries of 32bit, 128bit, and 384bit key sizes respectively. The tests are as follows:
//!
//! - Insertion: Time to completely fill the tree with random numbers.
//! - Search: Time it takes to search for every element in the tree once.
//! - Delete: Time it takes to delete every element in the tree.
//!
//! ## Examples
//!
//! ```rust
//! use rbt_collections::Rbt;
//!
//! let mut rbt: Rbt<u32> = Rbt::with_capacity(16);
//! for num in [1, 2, 3, 2, 1, 4, 7, 6, 5, 5, 8, 9, 0] {
//!     rbt.insert(num);
//! }
//! assert!(rbt.inorder().copied().eq([0, 1, 1, 2, 2, 3, 4, 5, 5, 6, 7, 8, 9]));
//!
//! let six = rbt.find(&6).unwrap();
//! assert_eq!(rbt.delete(six), Ok(6));
//! assert!(rbt.find(&6).is_none());
//! assert!(rbt.validate().is_ok());
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![no_std]
extern crate alloc;

mod iter;
mod node;
mod rbt;

pub use iter::{Iter, Nodes, Postorder, Preorder};
pub use node::{Color, NodeRef};
pub use rbt::Rbt;

/// Public result type for the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Public error types for the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No element with the given key exists in the tree.
    NotFound,
    /// The node handle does not name a live node of this tree.
    InvalidNode,
    /// The tree no longer satisfies one of the red-black properties.
    InvariantViolated(Violation),
}

/// The red-black or search tree property that [validate](Rbt::validate) found broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The root is red.
    RedRoot,
    /// The sentinel is red.
    RedSentinel,
    /// A red node has a red child.
    RedRedAdjacency,
    /// Two paths from the same node down to the sentinel pass through a different number of black nodes.
    BlackHeightMismatch,
    /// An in-order neighbour has a smaller key than its predecessor.
    OutOfOrder,
    /// A child does not point back at its parent.
    BrokenParentLink,
    /// The number of reachable nodes differs from the recorded length.
    LengthMismatch,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NotFound => write!(f, "no element with the given key"),
            Error::InvalidNode => write!(f, "node handle is stale or belongs to another tree"),
            Error::InvariantViolated(violation) => write!(f, "red-black invariant violated: {violation:?}"),
        }
    }
}

/// A trait to allow a type to use a different key than `self` for ordering.
pub trait NodeKey {
    /// The type used for ordering the elements in the tree.
    type Key: Ord;

    /// Returns the key.
    fn key(&self) -> &Self::Key;
}

impl<T> NodeKey for T
where
    T: Ord,
{
    type Key = Self;
    fn key(&self) -> &T {
        self
    }
}
