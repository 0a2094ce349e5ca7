//! Arena Collections - Red-Black Tree
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::cmp::Ordering;

use crate::{
    Error, NodeKey, Result, Violation,
    iter::{Iter, Nodes, Postorder, Preorder},
    node::{Color, Dir, NIL, NodeRef, Storage},
};

/// A red-black tree that stores its nodes in a growable arena.
///
/// Duplicate keys are accepted; an element equal to existing elements is ordered after them.
pub struct Rbt<D>
where
    D: NodeKey,
{
    storage: Storage<D>,
    root: usize,
}

impl<D> Rbt<D>
where
    D: NodeKey,
{
    /// Creates an empty red-black tree.
    pub fn new() -> Self {
        Rbt { storage: Storage::new(), root: NIL }
    }

    /// Creates an empty red-black tree with room for `capacity` elements before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Rbt { storage: Storage::with_capacity(capacity), root: NIL }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Indicates whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Returns the number of elements the tree can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the height of the tree, the number of nodes on the longest root to leaf path.
    pub fn height(&self) -> usize {
        self.height_from(self.root)
    }

    fn height_from(&self, idx: usize) -> usize {
        if idx == NIL {
            return 0;
        }
        let left = self.height_from(self.storage.left(idx));
        let right = self.height_from(self.storage.right(idx));
        core::cmp::max(left, right) + 1
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> Option<NodeRef> {
        self.handle_of(self.root)
    }

    fn handle_of(&self, idx: usize) -> Option<NodeRef> {
        (idx != NIL).then(|| self.storage.handle(idx))
    }

    /// Adds a value into the tree, returning a handle to its node.
    ///
    /// Values equal to ones already in the tree are accepted and ordered after them.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    pub fn insert(&mut self, data: D) -> NodeRef {
        let node = self.storage.add(data);

        let mut parent = NIL;
        let mut side = Dir::Left;
        let mut current = self.root;
        while current != NIL {
            parent = current;
            side = match self.storage.key(node).cmp(self.storage.key(current)) {
                Ordering::Less => Dir::Left,
                Ordering::Equal | Ordering::Greater => Dir::Right,
            };
            current = self.storage.child(current, side);
        }

        self.storage.set_parent(node, parent);
        if parent == NIL {
            self.root = node;
        } else {
            self.storage.set_child(parent, side, node);
        }

        self.fixup_insert(node);
        self.storage.handle(node)
    }

    /// Adds many values into the tree, returning the handle of the last one added.
    ///
    /// # Time Complexity
    ///
    /// O(m log n), where m is the number of values to add.
    ///
    pub fn insert_many<I>(&mut self, data: I) -> Option<NodeRef>
    where
        I: IntoIterator<Item = D>,
    {
        let data = data.into_iter();
        self.storage.reserve(data.size_hint().0);
        let mut last = None;
        for d in data {
            last = Some(self.insert(d));
        }
        last
    }

    /// Searches for a node whose key equals `key`.
    ///
    /// When several elements share the key, the one closest to the root is returned.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    pub fn find(&self, key: &D::Key) -> Option<NodeRef> {
        self.find_from(self.root, key)
    }

    /// Searches the subtree rooted at `node` for a node whose key equals `key`.
    ///
    /// Returns `None` if no such node is in the subtree, or if the handle no longer names a node of this tree.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    pub fn find_in(&self, node: NodeRef, key: &D::Key) -> Option<NodeRef> {
        let idx = self.storage.resolve(node)?;
        self.find_from(idx, key)
    }

    fn find_from(&self, mut current: usize, key: &D::Key) -> Option<NodeRef> {
        while current != NIL {
            match key.cmp(self.storage.key(current)) {
                Ordering::Equal => return Some(self.storage.handle(current)),
                Ordering::Less => current = self.storage.left(current),
                Ordering::Greater => current = self.storage.right(current),
            }
        }
        None
    }

    /// Indicates whether an element with the given key is in the tree.
    pub fn contains(&self, key: &D::Key) -> bool {
        self.find(key).is_some()
    }

    /// Returns the value held by a node.
    ///
    /// Returns `None` if the handle no longer names a node of this tree.
    ///
    /// # Time Complexity
    ///
    /// O(1)
    ///
    pub fn get(&self, node: NodeRef) -> Option<&D> {
        let idx = self.storage.resolve(node)?;
        self.storage.data(idx)
    }

    /// Returns a mutable reference to the value held by a node.
    ///
    /// Returns `None` if the handle no longer names a node of this tree.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the mutable reference is not used to modify any value that
    /// affects the value of the key.
    ///
    pub unsafe fn get_mut(&mut self, node: NodeRef) -> Option<&mut D> {
        let idx = self.storage.resolve(node)?;
        self.storage.data_mut(idx)
    }

    /// Returns the color of a node, or `None` if the handle no longer names a node of this tree.
    pub fn color(&self, node: NodeRef) -> Option<Color> {
        self.storage.resolve(node).map(|idx| self.storage.color(idx))
    }

    /// Returns the first ordered value in the tree.
    pub fn first(&self) -> Option<&D> {
        self.storage.data(self.storage.extreme(self.root, Dir::Left))
    }

    /// Returns the last ordered value in the tree.
    pub fn last(&self) -> Option<&D> {
        self.storage.data(self.storage.extreme(self.root, Dir::Right))
    }

    /// Returns the node holding the smallest key, or `None` if the tree is empty.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    pub fn min_node(&self) -> Option<NodeRef> {
        self.handle_of(self.storage.extreme(self.root, Dir::Left))
    }

    /// Returns the node holding the largest key, or `None` if the tree is empty.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    pub fn max_node(&self) -> Option<NodeRef> {
        self.handle_of(self.storage.extreme(self.root, Dir::Right))
    }

    /// Returns the node holding the smallest key in the subtree rooted at `node`.
    pub fn subtree_min(&self, node: NodeRef) -> Option<NodeRef> {
        let idx = self.storage.resolve(node)?;
        self.handle_of(self.storage.extreme(idx, Dir::Left))
    }

    /// Returns the node holding the largest key in the subtree rooted at `node`.
    pub fn subtree_max(&self, node: NodeRef) -> Option<NodeRef> {
        let idx = self.storage.resolve(node)?;
        self.handle_of(self.storage.extreme(idx, Dir::Right))
    }

    /// Returns the next node under in-order traversal.
    ///
    /// Returns `None` if `node` holds the last element or the handle is stale.
    ///
    /// # Time Complexity
    ///
    /// O(1) ~ O(log n)
    ///
    pub fn successor(&self, node: NodeRef) -> Option<NodeRef> {
        let idx = self.storage.resolve(node)?;
        self.handle_of(self.storage.step(idx, Dir::Right))
    }

    /// Returns the previous node under in-order traversal.
    ///
    /// Returns `None` if `node` holds the first element or the handle is stale.
    ///
    /// # Time Complexity
    ///
    /// O(1) ~ O(log n)
    ///
    pub fn predecessor(&self, node: NodeRef) -> Option<NodeRef> {
        let idx = self.storage.resolve(node)?;
        self.handle_of(self.storage.step(idx, Dir::Left))
    }

    /// Iterates over the values in key order.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter::new(&self.storage, self.root)
    }

    /// Iterates over the values in key order. Same as [iter](Self::iter).
    pub fn inorder(&self) -> Iter<'_, D> {
        self.iter()
    }

    /// Iterates over the node handles in key order.
    pub fn nodes(&self) -> Nodes<'_, D> {
        Nodes::new(&self.storage, self.root)
    }

    /// Iterates over the values, visiting each node before its subtrees.
    pub fn preorder(&self) -> Preorder<'_, D> {
        Preorder::new(&self.storage, self.root)
    }

    /// Iterates over the values, visiting each node after its subtrees.
    pub fn postorder(&self) -> Postorder<'_, D> {
        Postorder::new(&self.storage, self.root)
    }

    /// Removes a node from the tree, returning its value.
    ///
    /// If the node has two children its in-order successor takes its place. The successor keeps its handle; only
    /// the handle passed in becomes invalid.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    /// # Errors
    ///
    /// Returns [InvalidNode](Error::InvalidNode) if the handle does not name a node of this tree. The tree is left
    /// untouched in that case.
    ///
    pub fn delete(&mut self, node: NodeRef) -> Result<D> {
        let target = self.storage.resolve(node).ok_or(Error::InvalidNode)?;

        let mut removed_color = self.storage.color(target);
        let moved_up = if self.storage.left(target) == NIL {
            let child = self.storage.right(target);
            self.transplant(target, child);
            child
        } else if self.storage.right(target) == NIL {
            let child = self.storage.left(target);
            self.transplant(target, child);
            child
        } else {
            let successor = self.storage.extreme(self.storage.right(target), Dir::Left);
            removed_color = self.storage.color(successor);
            let child = self.storage.right(successor);

            if self.storage.parent(successor) == target {
                // The child may be the sentinel, whose parent link the fixup reads.
                self.storage.set_parent(child, successor);
            } else {
                self.transplant(successor, child);
                let right = self.storage.right(target);
                self.storage.set_child(successor, Dir::Right, right);
                self.storage.set_parent(right, successor);
            }

            self.transplant(target, successor);
            let left = self.storage.left(target);
            self.storage.set_child(successor, Dir::Left, left);
            self.storage.set_parent(left, successor);
            let color = self.storage.color(target);
            self.storage.set_color(successor, color);
            child
        };

        if removed_color == Color::Black {
            self.fixup_delete(moved_up);
        }
        self.storage.set_parent(NIL, NIL);

        self.storage.delete(target).ok_or(Error::InvalidNode)
    }

    /// Removes an element with the given key, returning its value.
    ///
    /// When several elements share the key, the one [find](Self::find) returns is removed.
    ///
    /// # Time Complexity
    ///
    /// O(log n)
    ///
    /// # Errors
    ///
    /// Returns [NotFound](Error::NotFound) if no element has the key.
    ///
    pub fn remove(&mut self, key: &D::Key) -> Result<D> {
        let node = self.find(key).ok_or(Error::NotFound)?;
        self.delete(node)
    }

    /// Removes every element. Handles to removed nodes become invalid.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = NIL;
    }

    /// Checks every red-black and search tree property.
    ///
    /// Returns the number of black nodes on each path from the root down to the sentinel, counting the root, which
    /// is `0` for an empty tree.
    ///
    /// # Time Complexity
    ///
    /// O(n)
    ///
    /// # Errors
    ///
    /// Returns [InvariantViolated](Error::InvariantViolated) naming the first property found broken.
    ///
    pub fn validate(&self) -> Result<usize> {
        if self.storage.is_red(NIL) {
            return Err(Error::InvariantViolated(Violation::RedSentinel));
        }
        if self.storage.is_red(self.root) {
            return Err(Error::InvariantViolated(Violation::RedRoot));
        }
        if self.root != NIL && self.storage.parent(self.root) != NIL {
            return Err(Error::InvariantViolated(Violation::BrokenParentLink));
        }

        let mut count = 0;
        let black_height = self.validate_subtree(self.root, &mut count)?;
        if count != self.len() {
            return Err(Error::InvariantViolated(Violation::LengthMismatch));
        }

        let mut ordered = self.iter();
        if let Some(mut previous) = ordered.next() {
            for current in ordered {
                if current.key() < previous.key() {
                    return Err(Error::InvariantViolated(Violation::OutOfOrder));
                }
                previous = current;
            }
        }

        Ok(black_height)
    }

    /// Validates the subtree at `idx`, returning its black height counting `idx` itself.
    fn validate_subtree(&self, idx: usize, count: &mut usize) -> Result<usize> {
        if idx == NIL {
            return Ok(0);
        }
        *count += 1;
        if *count > self.len() {
            return Err(Error::InvariantViolated(Violation::LengthMismatch));
        }

        let mut heights = [0; 2];
        for dir in [Dir::Left, Dir::Right] {
            let child = self.storage.child(idx, dir);
            if child != NIL {
                if self.storage.parent(child) != idx {
                    return Err(Error::InvariantViolated(Violation::BrokenParentLink));
                }
                if self.storage.is_red(idx) && self.storage.is_red(child) {
                    return Err(Error::InvariantViolated(Violation::RedRedAdjacency));
                }
            }
            heights[dir as usize] = self.validate_subtree(child, count)?;
        }

        if heights[0] != heights[1] {
            return Err(Error::InvariantViolated(Violation::BlackHeightMismatch));
        }
        Ok(heights[0] + usize::from(self.storage.is_black(idx)))
    }

    /// Replaces the subtree at `old` with the subtree at `new` in `old`'s parent.
    ///
    /// `new` may be the sentinel, in which case the sentinel's parent link records where it was placed.
    fn transplant(&mut self, old: usize, new: usize) {
        let parent = self.storage.parent(old);
        if parent == NIL {
            self.root = new;
        } else {
            let side = self.storage.side_of(old);
            self.storage.set_child(parent, side, new);
        }
        self.storage.set_parent(new, parent);
    }

    /// Rotates the subtree at `node` in the direction of `dir` and returns the new subtree root.
    ///
    /// The child opposite `dir` is promoted into `node`'s position and `node` becomes its `dir` child.
    fn rotate(&mut self, node: usize, dir: Dir) -> usize {
        let pivot = self.storage.child(node, dir.opposite());
        if node == NIL || pivot == NIL {
            log::error!("Rotation {dir:?} of node {node} has no pivot");
            panic!("Cannot rotate around the sentinel");
        }

        let inner = self.storage.child(pivot, dir);
        self.storage.set_child(node, dir.opposite(), inner);
        if inner != NIL {
            self.storage.set_parent(inner, node);
        }

        let parent = self.storage.parent(node);
        self.storage.set_parent(pivot, parent);
        if parent == NIL {
            self.root = pivot;
        } else {
            let side = self.storage.side_of(node);
            self.storage.set_child(parent, side, pivot);
        }

        self.storage.set_child(pivot, dir, node);
        self.storage.set_parent(node, pivot);
        pivot
    }

    /// Rotate the subtree to the left and return the new root.
    fn rotate_left(&mut self, node: usize) -> usize {
        self.rotate(node, Dir::Left)
    }

    /// Rotate the subtree to the right and return the new root.
    fn rotate_right(&mut self, node: usize) -> usize {
        self.rotate(node, Dir::Right)
    }

    /// Rotates the left child to the left, then the subtree to the right, returning the new root.
    fn rotate_left_then_right(&mut self, node: usize) -> usize {
        let left = self.storage.left(node);
        self.rotate_left(left);
        self.rotate_right(node)
    }

    /// Rotates the right child to the right, then the subtree to the left, returning the new root.
    fn rotate_right_then_left(&mut self, node: usize) -> usize {
        let right = self.storage.right(node);
        self.rotate_right(right);
        self.rotate_left(node)
    }

    /// Double rotation ending with a rotation of `node` in the direction of `dir`.
    fn rotate_double(&mut self, node: usize, dir: Dir) -> usize {
        match dir {
            Dir::Left => self.rotate_right_then_left(node),
            Dir::Right => self.rotate_left_then_right(node),
        }
    }

    /// Updates the tree after a red node has been attached, to meet the red-black tree properties.
    fn fixup_insert(&mut self, mut node: usize) {
        while self.storage.is_red(self.storage.parent(node)) {
            let parent = self.storage.parent(node);
            let grandparent = self.storage.parent(parent);
            if self.storage.is_red(grandparent) {
                log::error!("Node {parent} and its parent {grandparent} are both red before insertion fixup");
                panic!("Red node has a red parent, the tree is corrupted");
            }

            // Rotate the red pair up so its top takes the grandparent's place. The top stays red and both of its
            // children end up black: the old grandparent already is, `node` is painted below.
            let parent_side = self.storage.side_of(parent);
            if self.storage.side_of(node) == parent_side {
                log::trace!("insert fixup: outer grandchild {node}, single rotation at {grandparent}");
                self.rotate(grandparent, parent_side.opposite());
            } else {
                log::trace!("insert fixup: inner grandchild {node}, double rotation at {grandparent}");
                self.rotate_double(grandparent, parent_side.opposite());
                node = parent;
            }

            self.storage.set_color(node, Color::Black);
            node = self.storage.parent(node);
        }
        self.storage.set_color(self.root, Color::Black);
    }

    /// Updates the tree after a black node has been removed, to meet the red-black tree properties.
    ///
    /// `node` occupies the vacated slot and is short one black node on all of its paths.
    fn fixup_delete(&mut self, mut node: usize) {
        while node != self.root && self.storage.is_black(node) {
            let parent = self.storage.parent(node);
            let side = self.storage.side_of(node);
            let sibling = self.storage.sibling(node);

            // Red sibling: rotate it above the parent so the new sibling is black.
            if self.storage.is_red(sibling) {
                log::trace!("delete fixup: red sibling {sibling}");
                self.rotate(parent, side);
                self.storage.set_color(parent, Color::Red);
                self.storage.set_color(sibling, Color::Black);
                continue;
            }

            let parent_color = self.storage.color(parent);
            let near_nephew = self.storage.child(sibling, side);
            let far_nephew = self.storage.child(sibling, side.opposite());

            if self.storage.is_red(near_nephew) {
                log::trace!("delete fixup: red near nephew {near_nephew}");
                self.rotate_double(parent, side);
                self.storage.set_color(parent, Color::Black);
                self.storage.set_color(near_nephew, parent_color);
                break;
            }

            if self.storage.is_red(far_nephew) {
                log::trace!("delete fixup: red far nephew {far_nephew}");
                self.rotate(parent, side);
                self.storage.set_color(parent, Color::Black);
                self.storage.set_color(far_nephew, Color::Black);
                self.storage.set_color(sibling, parent_color);
                break;
            }

            // Black sibling with black children: push the missing black up to the parent.
            self.storage.set_color(sibling, Color::Red);
            self.storage.set_color(parent, Color::Black);
            if parent_color == Color::Red {
                break;
            }
            node = parent;
        }
        self.storage.set_color(node, Color::Black);
    }
}

impl<D> Default for Rbt<D>
where
    D: NodeKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D> core::fmt::Debug for Rbt<D>
where
    D: NodeKey,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rbt")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("height", &self.height())
            .finish()
    }
}

/// Formats the values in key order, as a list.
impl<D> core::fmt::Display for Rbt<D>
where
    D: NodeKey + core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{data}")?;
        }
        write!(f, "]")
    }
}

impl<D> Extend<D> for Rbt<D>
where
    D: NodeKey,
{
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<D> FromIterator<D> for Rbt<D>
where
    D: NodeKey,
{
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut rbt = Rbt::new();
        rbt.insert_many(iter);
        rbt
    }
}

impl<'a, D> IntoIterator for &'a Rbt<D>
where
    D: NodeKey,
{
    type Item = &'a D;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod fuzz_tests {
    extern crate std;
    use crate::{NodeRef, Rbt};
    use rand::{Rng, seq::SliceRandom};
    use std::{collections::BTreeMap, vec::Vec};

    const RBT_MAX_SIZE: usize = 0x1000;

    /// 2 * ceil(log2(n + 1))
    fn height_bound(n: usize) -> usize {
        2 * (usize::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn fuzz_add() {
        for _ in 0..20 {
            let mut rbt: Rbt<u32> = Rbt::new();
            let mut rng = rand::thread_rng();

            // A narrow range forces plenty of duplicates.
            let mut random_numbers: Vec<u32> = (0..RBT_MAX_SIZE).map(|_| rng.gen_range(1..=1_000)).collect();
            for num in random_numbers.iter() {
                rbt.insert(*num);
            }
            assert_eq!(rbt.len(), RBT_MAX_SIZE);
            assert!(rbt.height() <= height_bound(rbt.len()));
            assert!(rbt.validate().is_ok());

            random_numbers.sort();
            let ordered_numbers: Vec<u32> = rbt.iter().copied().collect();
            assert_eq!(ordered_numbers, random_numbers);
        }
    }

    #[test]
    fn fuzz_add_sorted() {
        // Monotonic input is the worst case for an unbalanced tree.
        let rbt: Rbt<usize> = (0..RBT_MAX_SIZE).collect();
        assert!(rbt.height() <= height_bound(RBT_MAX_SIZE));
        assert!(rbt.validate().is_ok());

        let rbt: Rbt<usize> = (0..RBT_MAX_SIZE).rev().collect();
        assert!(rbt.height() <= height_bound(RBT_MAX_SIZE));
        assert!(rbt.validate().is_ok());
    }

    #[test]
    fn fuzz_delete() {
        for _ in 0..20 {
            let mut rbt: Rbt<u32> = Rbt::new();
            let mut rng = rand::thread_rng();

            let mut handles: Vec<NodeRef> =
                (0..RBT_MAX_SIZE).map(|_| rbt.insert(rng.gen_range(1..=1_000))).collect();

            // Delete all the nodes
            handles.shuffle(&mut rng);
            while let Some(node) = handles.pop() {
                assert!(rbt.delete(node).is_ok());
                if handles.len() % 512 == 0 {
                    assert!(rbt.validate().is_ok());
                    assert!(rbt.height() <= height_bound(rbt.len()));
                }
            }
            assert_eq!(rbt.len(), 0);
            assert!(rbt.root().is_none());
        }
    }

    #[test]
    fn fuzz_mixed_against_model() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut rbt: Rbt<i32> = Rbt::new();
            let mut model: BTreeMap<i32, usize> = BTreeMap::new();
            let steps = rng.gen_range(100..=400);

            for _ in 0..steps {
                let num = rng.gen_range(-50..=50);
                rbt.insert(num);
                *model.entry(num).or_default() += 1;

                if rng.gen_range(0..5) == 0 {
                    let num = rng.gen_range(-50..=50);
                    match model.get_mut(&num) {
                        Some(count) => {
                            let node = rbt.find(&num).unwrap();
                            assert_eq!(rbt.delete(node), Ok(num));
                            *count -= 1;
                            if *count == 0 {
                                model.remove(&num);
                            }
                        }
                        None => assert!(rbt.find(&num).is_none()),
                    }
                }

                assert!(rbt.validate().is_ok());
                assert!(rbt.height() <= height_bound(rbt.len()));
            }

            let expected: Vec<i32> =
                model.iter().flat_map(|(num, count)| core::iter::repeat(*num).take(*count)).collect();
            let actual: Vec<i32> = rbt.iter().copied().collect();
            assert_eq!(actual, expected);
            assert_eq!(rbt.len(), expected.len());
        }
    }

    #[test]
    fn fuzz_search() {
        let mut rbt: Rbt<u32> = Rbt::new();
        let mut rng = rand::thread_rng();
        let min = 1;
        let max = 100_000;

        let random_numbers: Vec<u32> = (0..RBT_MAX_SIZE).map(|_| rng.gen_range(min..=max)).collect();
        rbt.insert_many(random_numbers.iter().copied());

        // Search for numbers that exist in the tree
        for _ in 0..100_000 {
            let num = random_numbers.choose(&mut rng).unwrap();
            let node = rbt.find(num).unwrap();
            assert_eq!(rbt.get(node), Some(num));
        }

        // Search for numbers that do not exist in the tree
        for _ in 0..100_000 {
            let to_search = rng.gen_bool(0.5);
            let random_number =
                if to_search { rng.gen_range(0..=min - 1) } else { rng.gen_range(max + 1..=max + 50_000) };
            assert!(rbt.find(&random_number).is_none());
        }
    }
}
