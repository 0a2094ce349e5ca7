//! Arena Collections - Red-Black Tree traversals
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::node::{Dir, NIL, NodeRef, Storage};

/// Two in-order cursors walking towards each other by successor and predecessor steps.
struct Cursor {
    front: usize,
    back: usize,
    remaining: usize,
}

impl Cursor {
    fn new<D>(storage: &Storage<D>, root: usize) -> Self {
        if root == NIL {
            return Cursor { front: NIL, back: NIL, remaining: 0 };
        }
        Cursor {
            front: storage.extreme(root, Dir::Left),
            back: storage.extreme(root, Dir::Right),
            remaining: storage.len(),
        }
    }

    fn next<D>(&mut self, storage: &Storage<D>) -> Option<usize> {
        if self.remaining == 0 || self.front == NIL {
            return None;
        }
        let idx = self.front;
        self.front = storage.step(idx, Dir::Right);
        self.remaining -= 1;
        Some(idx)
    }

    fn next_back<D>(&mut self, storage: &Storage<D>) -> Option<usize> {
        if self.remaining == 0 || self.back == NIL {
            return None;
        }
        let idx = self.back;
        self.back = storage.step(idx, Dir::Left);
        self.remaining -= 1;
        Some(idx)
    }
}

/// In-order iterator over the values of a [Rbt](crate::Rbt).
///
/// Walks successor links, so no stack is allocated. Iterating from both ends meets in the middle.
pub struct Iter<'a, D> {
    storage: &'a Storage<D>,
    cursor: Cursor,
}

impl<'a, D> Iter<'a, D> {
    pub(crate) fn new(storage: &'a Storage<D>, root: usize) -> Self {
        Iter { storage, cursor: Cursor::new(storage, root) }
    }
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor.next(self.storage)?;
        self.storage.data(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<D> DoubleEndedIterator for Iter<'_, D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let idx = self.cursor.next_back(self.storage)?;
        self.storage.data(idx)
    }
}

impl<D> ExactSizeIterator for Iter<'_, D> {}

impl<D> FusedIterator for Iter<'_, D> {}

/// In-order iterator over the node handles of a [Rbt](crate::Rbt).
pub struct Nodes<'a, D> {
    storage: &'a Storage<D>,
    cursor: Cursor,
}

impl<'a, D> Nodes<'a, D> {
    pub(crate) fn new(storage: &'a Storage<D>, root: usize) -> Self {
        Nodes { storage, cursor: Cursor::new(storage, root) }
    }
}

impl<D> Iterator for Nodes<'_, D> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next(self.storage).map(|idx| self.storage.handle(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<D> DoubleEndedIterator for Nodes<'_, D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back(self.storage).map(|idx| self.storage.handle(idx))
    }
}

impl<D> ExactSizeIterator for Nodes<'_, D> {}

impl<D> FusedIterator for Nodes<'_, D> {}

/// Pre-order iterator over the values of a [Rbt](crate::Rbt): each node, then its left and right subtrees.
pub struct Preorder<'a, D> {
    storage: &'a Storage<D>,
    stack: Vec<usize>,
}

impl<'a, D> Preorder<'a, D> {
    pub(crate) fn new(storage: &'a Storage<D>, root: usize) -> Self {
        let mut stack = Vec::new();
        if root != NIL {
            stack.push(root);
        }
        Preorder { storage, stack }
    }
}

impl<'a, D> Iterator for Preorder<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        for dir in [Dir::Right, Dir::Left] {
            let child = self.storage.child(idx, dir);
            if child != NIL {
                self.stack.push(child);
            }
        }
        self.storage.data(idx)
    }
}

impl<D> FusedIterator for Preorder<'_, D> {}

/// Post-order iterator over the values of a [Rbt](crate::Rbt): the left and right subtrees, then the node.
pub struct Postorder<'a, D> {
    storage: &'a Storage<D>,
    /// Pending nodes, flagged once their children have been pushed.
    stack: Vec<(usize, bool)>,
}

impl<'a, D> Postorder<'a, D> {
    pub(crate) fn new(storage: &'a Storage<D>, root: usize) -> Self {
        let mut stack = Vec::new();
        if root != NIL {
            stack.push((root, false));
        }
        Postorder { storage, stack }
    }
}

impl<'a, D> Iterator for Postorder<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, expanded)) = self.stack.pop() {
            if expanded {
                return self.storage.data(idx);
            }
            self.stack.push((idx, true));
            for dir in [Dir::Right, Dir::Left] {
                let child = self.storage.child(idx, dir);
                if child != NIL {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

impl<D> FusedIterator for Postorder<'_, D> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::Rbt;
    use std::vec::Vec;

    fn build(keys: &[i32]) -> Rbt<i32> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_empty_tree() {
        let rbt: Rbt<i32> = Rbt::new();
        assert_eq!(rbt.iter().next(), None);
        assert_eq!(rbt.iter().next_back(), None);
        assert_eq!(rbt.iter().len(), 0);
        assert_eq!(rbt.nodes().next(), None);
        assert_eq!(rbt.preorder().next(), None);
        assert_eq!(rbt.postorder().next(), None);
    }

    #[test]
    fn test_traversal_orders() {
        let rbt = build(&[1, 2, 3]);
        assert_eq!(rbt.inorder().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(rbt.preorder().copied().collect::<Vec<_>>(), [2, 1, 3]);
        assert_eq!(rbt.postorder().copied().collect::<Vec<_>>(), [1, 3, 2]);

        let rbt = build(&[1, 2, 3, 2, 1, 4, 7, 6, 5]);
        assert_eq!(rbt.inorder().copied().collect::<Vec<_>>(), [1, 1, 2, 2, 3, 4, 5, 6, 7]);
        assert_eq!(rbt.preorder().copied().collect::<Vec<_>>(), [4, 2, 1, 1, 3, 2, 6, 5, 7]);
        assert_eq!(rbt.postorder().copied().collect::<Vec<_>>(), [1, 1, 2, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn test_double_ended() {
        let rbt = build(&[1, 2, 3, 2, 1, 4, 7, 6, 5, 5, 8, 9, 0]);

        let reversed: Vec<i32> = rbt.iter().rev().copied().collect();
        assert_eq!(reversed, [9, 8, 7, 6, 5, 5, 4, 3, 2, 2, 1, 1, 0]);

        // Alternating ends never yields an element twice.
        let mut iter = rbt.iter();
        assert_eq!(iter.len(), 13);
        let mut seen = Vec::new();
        loop {
            match (iter.next(), iter.next_back()) {
                (Some(a), Some(b)) => {
                    seen.push(*a);
                    seen.push(*b);
                }
                (Some(a), None) => seen.push(*a),
                (None, _) => break,
            }
        }
        seen.sort();
        assert_eq!(seen, [0, 1, 1, 2, 2, 3, 4, 5, 5, 6, 7, 8, 9]);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_nodes_match_values() {
        let mut rbt = build(&[5, 3, 8, 1, 4, 7, 9]);
        let handles: Vec<_> = rbt.nodes().collect();
        assert_eq!(handles.len(), rbt.len());
        assert_eq!(handles.first().copied(), rbt.min_node());
        assert_eq!(handles.last().copied(), rbt.max_node());

        let values: Vec<i32> = handles.iter().map(|node| *rbt.get(*node).unwrap()).collect();
        assert_eq!(values, [1, 3, 4, 5, 7, 8, 9]);

        for pair in handles.windows(2) {
            assert_eq!(rbt.successor(pair[0]), Some(pair[1]));
            assert_eq!(rbt.predecessor(pair[1]), Some(pair[0]));
        }

        // Deleting every odd position through collected handles leaves the rest in order.
        for node in handles.iter().step_by(2) {
            assert!(rbt.delete(*node).is_ok());
        }
        assert_eq!(rbt.iter().copied().collect::<Vec<_>>(), [3, 5, 8]);
        assert_eq!(rbt.nodes().rev().count(), 3);
    }

    #[test]
    fn test_traversals_restart() {
        let rbt = build(&[10, 20, 30, 40]);
        let first: Vec<_> = (&rbt).into_iter().collect();
        let second: Vec<_> = (&rbt).into_iter().collect();
        assert_eq!(first, second);

        let mut count = 0;
        for value in &rbt {
            assert_eq!(*value, (count + 1) * 10);
            count += 1;
        }
        assert_eq!(count, 4);
        assert_eq!(rbt.preorder().count(), 4);
        assert_eq!(rbt.postorder().count(), 4);
    }
}
