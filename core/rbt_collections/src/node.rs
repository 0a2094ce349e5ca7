//! Arena Collections - Node storage for a Red-Black Tree
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use alloc::vec::Vec;
use core::sync::atomic::{self, AtomicU32};

use crate::NodeKey;

/// Source of the identity stamped into every handle, unique per storage container.
static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

/// Index of the sentinel node. It terminates every leaf and is the parent of the root.
pub(crate) const NIL: usize = 0;

/// The color of a node in a red-black tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child of a node a link refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Dir {
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// A handle to a node owned by a [Rbt](crate::Rbt).
///
/// The handle stays valid until the node it names is deleted. Deleting a node with two children moves its in-order
/// successor into its place; the successor keeps its identity, so handles to it remain valid. A handle is only
/// accepted by the tree that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    tree: u32,
    index: usize,
    generation: u32,
}

impl NodeRef {
    /// Returns the arena slot this handle points at.
    ///
    /// Slots are recycled after a delete, so the index alone does not identify a node over time.
    pub fn index(&self) -> usize {
        self.index
    }
}

pub(crate) struct Node<D> {
    pub data: Option<D>,
    color: Color,
    parent: usize,
    children: [usize; 2],
    generation: u32,
}

impl<D> Node<D> {
    fn new(data: D, generation: u32) -> Self {
        Node { data: Some(data), color: Color::Red, parent: NIL, children: [NIL, NIL], generation }
    }

    fn sentinel() -> Self {
        Node { data: None, color: Color::Black, parent: NIL, children: [NIL, NIL], generation: 0 }
    }
}

/// A growable storage container for the nodes of a red-black tree.
///
/// Slot `0` always holds the sentinel. Deleted slots are kept on a free list and reused by later additions.
pub(crate) struct Storage<D> {
    /// The storage container for the nodes, including the sentinel.
    nodes: Vec<Node<D>>,
    /// The number of live nodes.
    length: usize,
    /// Slots freed by deletes, reused before the container grows.
    available: Vec<usize>,
    /// Identity shared by every handle this container hands out.
    id: u32,
}

impl<D> Storage<D> {
    /// Create a new storage container holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new storage container with room for `capacity` nodes before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        let id = NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed);
        Storage { nodes, length: 0, available: Vec::new(), id }
    }

    /// Get the number of live nodes in the storage container.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Get the number of nodes the container can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    /// Make room for at least `additional` more nodes, counting free slots.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional.saturating_sub(self.available.len()));
    }

    /// Add a new red node with no links, returning its slot.
    ///
    /// # Time Complexity
    ///
    /// O(1) amortized
    ///
    pub fn add(&mut self, data: D) -> usize {
        self.length += 1;
        if let Some(idx) = self.available.pop() {
            let generation = self.nodes[idx].generation;
            self.nodes[idx] = Node::new(data, generation);
            return idx;
        }

        if self.nodes.len() == self.nodes.capacity() {
            log::debug!("node storage full at {} nodes, growing", self.nodes.len() - 1);
        }
        self.nodes.push(Node::new(data, 0));
        self.nodes.len() - 1
    }

    /// Release a slot back to the free list, returning the data it held.
    ///
    /// The slot's generation is bumped so outstanding handles to it stop resolving.
    ///
    /// # Time Complexity
    ///
    /// O(1)
    ///
    pub fn delete(&mut self, idx: usize) -> Option<D> {
        if idx == NIL {
            return None;
        }
        let node = self.nodes.get_mut(idx)?;
        let data = node.data.take()?;
        node.generation = node.generation.wrapping_add(1);
        node.parent = NIL;
        node.children = [NIL, NIL];
        node.color = Color::Red;
        self.available.push(idx);
        self.length -= 1;
        Some(data)
    }

    /// Release every live slot and reset the sentinel, keeping the allocation.
    pub fn clear(&mut self) {
        for idx in 1..self.nodes.len() {
            if self.nodes[idx].data.is_some() {
                self.delete(idx);
            }
        }
        self.nodes[NIL] = Node::sentinel();
    }

    /// Translates a handle into a slot, if the handle still names a live node of this container.
    pub fn resolve(&self, node: NodeRef) -> Option<usize> {
        if node.tree != self.id || node.index == NIL {
            return None;
        }
        let slot = self.nodes.get(node.index)?;
        (slot.data.is_some() && slot.generation == node.generation).then_some(node.index)
    }

    /// Creates a handle for a live slot.
    pub fn handle(&self, idx: usize) -> NodeRef {
        NodeRef { tree: self.id, index: idx, generation: self.nodes[idx].generation }
    }

    pub fn data(&self, idx: usize) -> Option<&D> {
        self.nodes.get(idx)?.data.as_ref()
    }

    pub fn data_mut(&mut self, idx: usize) -> Option<&mut D> {
        self.nodes.get_mut(idx)?.data.as_mut()
    }

    pub fn color(&self, idx: usize) -> Color {
        self.nodes[idx].color
    }

    pub fn set_color(&mut self, idx: usize, color: Color) {
        debug_assert!(idx != NIL || color == Color::Black, "the sentinel must stay black");
        self.nodes[idx].color = color;
    }

    pub fn is_red(&self, idx: usize) -> bool {
        self.nodes[idx].color == Color::Red
    }

    pub fn is_black(&self, idx: usize) -> bool {
        self.nodes[idx].color == Color::Black
    }

    pub fn parent(&self, idx: usize) -> usize {
        self.nodes[idx].parent
    }

    /// Sets the parent link. Writing the sentinel's parent is allowed; deletion uses it as scratch space.
    pub fn set_parent(&mut self, idx: usize, parent: usize) {
        self.nodes[idx].parent = parent;
    }

    pub fn child(&self, idx: usize, dir: Dir) -> usize {
        self.nodes[idx].children[dir as usize]
    }

    pub fn set_child(&mut self, idx: usize, dir: Dir, child: usize) {
        self.nodes[idx].children[dir as usize] = child;
    }

    pub fn left(&self, idx: usize) -> usize {
        self.child(idx, Dir::Left)
    }

    pub fn right(&self, idx: usize) -> usize {
        self.child(idx, Dir::Right)
    }

    /// Returns which child of its parent `idx` is. The root counts as a right child.
    pub fn side_of(&self, idx: usize) -> Dir {
        if self.left(self.parent(idx)) == idx { Dir::Left } else { Dir::Right }
    }

    /// Returns the other child of `idx`'s parent.
    pub fn sibling(&self, idx: usize) -> usize {
        let parent = self.parent(idx);
        if parent == NIL {
            return NIL;
        }
        self.child(parent, self.side_of(idx).opposite())
    }

    /// Follows `dir` links from `idx` until the next one is the sentinel.
    pub fn extreme(&self, mut idx: usize, dir: Dir) -> usize {
        while self.child(idx, dir) != NIL {
            idx = self.child(idx, dir);
        }
        idx
    }

    /// Returns the next node in the direction of `dir` under in-order traversal, or the sentinel at the end.
    pub fn step(&self, idx: usize, dir: Dir) -> usize {
        if self.child(idx, dir) != NIL {
            return self.extreme(self.child(idx, dir), dir.opposite());
        }

        let mut current = idx;
        let mut parent = self.parent(current);
        while parent != NIL && self.child(parent, dir) == current {
            current = parent;
            parent = self.parent(current);
        }
        parent
    }
}

impl<D: NodeKey> Storage<D> {
    /// Returns the key of a live node.
    ///
    /// Panics when `idx` is the sentinel or a freed slot; the tree never links either in a position where a key is
    /// read.
    pub fn key(&self, idx: usize) -> &D::Key {
        match self.data(idx) {
            Some(data) => data.key(),
            None => {
                log::error!("Read the key of empty slot {idx}");
                panic!("Node {idx} holds no key, the tree is corrupted");
            }
        }
    }
}
