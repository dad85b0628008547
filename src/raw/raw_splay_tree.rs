use alloc::vec::Vec;
use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::comparator::Comparator;

use super::arena::Arena;
use super::handle::NodeId;
use super::node::Node;

/// Stack of node ids for iterative descents (no recursion anywhere).
pub(crate) type Spine = SmallVec<[NodeId; 16]>;

/// The core splay tree implementation backing `SplayTree`.
///
/// A self-adjusting binary search tree with duplicate items allowed. Nodes
/// live in a slot arena and carry no parent links; every restructuring walk
/// is a single top-down pass.
#[derive(Clone)]
pub(crate) struct RawSplayTree<T, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Id of the root node, if the tree is non-empty.
    root: Option<NodeId>,
    /// The total order every operation consults. Fixed at construction.
    comparator: C,
}

/// Key driving a splay descent. The key either lives outside the tree or is
/// the item of a node currently attached to it (rotations move nodes around
/// but never move an item out of its slot, so an attached key stays readable
/// throughout the descent).
enum SplayKey<'a, T> {
    External(&'a T),
    Attached(NodeId),
}

// Derives would bound `T: Clone`/`T: Copy`, but no variant stores a `T`.
impl<T> Clone for SplayKey<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SplayKey<'_, T> {}

impl<T, C> RawSplayTree<T, C> {
    /// Creates a new, empty tree ordered by `comparator`.
    pub(crate) const fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Creates a new, empty tree with room for `capacity` items.
    pub(crate) fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            comparator,
        }
    }

    /// Returns the number of items in the tree.
    ///
    /// Derived from the arena's live-slot count, so a node accidentally
    /// detached from the tree still shows up here (and trips the test
    /// invariant checks) instead of leaking silently.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no items.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the capacity of the node arena.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the id of the root node, if any.
    pub(crate) const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node behind `id`.
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(id)
    }

    /// Returns the item stored in the node behind `id`.
    pub(crate) fn item(&self, id: NodeId) -> &T {
        &self.nodes.get(id).item
    }

    /// Removes all items from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the id of the smallest node in the subtree rooted at `from`.
    pub(crate) fn subtree_min(&self, from: NodeId) -> NodeId {
        let mut current = from;
        while let Some(left) = self.nodes.get(current).left {
            current = left;
        }
        current
    }

    /// Returns the id of the largest node in the subtree rooted at `from`.
    pub(crate) fn subtree_max(&self, from: NodeId) -> NodeId {
        let mut current = from;
        while let Some(right) = self.nodes.get(current).right {
            current = right;
        }
        current
    }

    /// Returns the smallest item, if any. Does not splay.
    pub(crate) fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes.get(self.subtree_min(root)).item)
    }

    /// Returns the largest item, if any. Does not splay.
    pub(crate) fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes.get(self.subtree_max(root)).item)
    }

    /// Drains all items from the tree in order.
    /// This is O(n): a plain in-order walk, no splaying along the way.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        let mut stack = Spine::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes.get(id).left;
            }
            if let Some(id) = stack.pop() {
                // The node's right link is still needed, so take the whole
                // node out of the arena rather than just its item.
                let node = self.nodes.take(id);
                items.push(node.item);
                current = node.right;
            }
        }

        self.root = None;
        self.nodes.clear();
        items
    }
}

impl<T, C: Comparator<T>> RawSplayTree<T, C> {
    /// Compares a splay key against the item of `node`.
    fn key_order(&self, key: SplayKey<'_, T>, node: NodeId) -> Ordering {
        let probe = match key {
            SplayKey::External(item) => item,
            SplayKey::Attached(id) => &self.nodes.get(id).item,
        };
        self.comparator.compare(probe, &self.nodes.get(node).item)
    }

    /// Top-down splay: moves the node matching `key`, or the last node on its
    /// search path, to the top of the subtree rooted at `subtree` and returns
    /// its id. Callers must re-link the returned id (usually into
    /// `self.root`).
    ///
    /// Single pass, no recursion. Nodes passed on the way down are hung onto
    /// one of two accumulator chains: everything smaller than the key ends up
    /// on the left chain, everything larger on the right chain. A zig-zig
    /// step rotates before linking; a zig-zag step needs no rotation because
    /// the two links land on opposite chains. One assembly step at the end
    /// stitches both chains under the new root.
    fn splay(&mut self, key: SplayKey<'_, T>, subtree: NodeId) -> NodeId {
        let mut current = subtree;
        // Chain heads become the new root's children; tails are where the
        // next link attaches. The classic dummy header node becomes these
        // two head/tail pairs.
        let mut left_head: Option<NodeId> = None;
        let mut left_tail: Option<NodeId> = None;
        let mut right_head: Option<NodeId> = None;
        let mut right_tail: Option<NodeId> = None;

        loop {
            match self.key_order(key, current) {
                Ordering::Less => {
                    let Some(mut next) = self.nodes.get(current).left else { break };
                    if self.key_order(key, next) == Ordering::Less {
                        // Zig-zig: rotate right at `current` before linking.
                        let next_right = self.nodes.get(next).right;
                        self.nodes.get_mut(current).left = next_right;
                        self.nodes.get_mut(next).right = Some(current);
                        current = next;
                        match self.nodes.get(current).left {
                            Some(left) => next = left,
                            None => break,
                        }
                    }
                    // Link `current` onto the right chain, descend left.
                    match right_tail {
                        Some(tail) => self.nodes.get_mut(tail).left = Some(current),
                        None => right_head = Some(current),
                    }
                    right_tail = Some(current);
                    current = next;
                }
                Ordering::Greater => {
                    let Some(mut next) = self.nodes.get(current).right else { break };
                    if self.key_order(key, next) == Ordering::Greater {
                        // Zig-zig: rotate left at `current` before linking.
                        let next_left = self.nodes.get(next).left;
                        self.nodes.get_mut(current).right = next_left;
                        self.nodes.get_mut(next).left = Some(current);
                        current = next;
                        match self.nodes.get(current).right {
                            Some(right) => next = right,
                            None => break,
                        }
                    }
                    // Link `current` onto the left chain, descend right.
                    match left_tail {
                        Some(tail) => self.nodes.get_mut(tail).right = Some(current),
                        None => left_head = Some(current),
                    }
                    left_tail = Some(current);
                    current = next;
                }
                Ordering::Equal => break,
            }
        }

        // Assembly: the final node's children move to the chain tails, then
        // the chains become its children.
        let detached_left = self.nodes.get(current).left;
        let detached_right = self.nodes.get(current).right;
        match left_tail {
            Some(tail) => self.nodes.get_mut(tail).right = detached_left,
            None => left_head = detached_left,
        }
        match right_tail {
            Some(tail) => self.nodes.get_mut(tail).left = detached_right,
            None => right_head = detached_right,
        }
        let root = self.nodes.get_mut(current);
        root.left = left_head;
        root.right = right_head;
        current
    }

    /// Top-down splay to the largest node of the subtree rooted at `subtree`.
    /// Same single-pass scheme as [`Self::splay`], but the descent always
    /// goes right, so only the left chain grows and the returned root has a
    /// vacant right child. No comparisons are made; duplicates cannot cut
    /// the descent short.
    fn splay_max(&mut self, subtree: NodeId) -> NodeId {
        let mut current = subtree;
        let mut left_head: Option<NodeId> = None;
        let mut left_tail: Option<NodeId> = None;

        loop {
            let Some(mut next) = self.nodes.get(current).right else { break };
            if let Some(after) = self.nodes.get(next).right {
                // Zig-zig: rotate left at `current` before linking.
                let next_left = self.nodes.get(next).left;
                self.nodes.get_mut(current).right = next_left;
                self.nodes.get_mut(next).left = Some(current);
                current = next;
                next = after;
            }
            // Link `current` onto the left chain, descend right.
            match left_tail {
                Some(tail) => self.nodes.get_mut(tail).right = Some(current),
                None => left_head = Some(current),
            }
            left_tail = Some(current);
            current = next;
        }

        let detached_left = self.nodes.get(current).left;
        match left_tail {
            Some(tail) => self.nodes.get_mut(tail).right = detached_left,
            None => left_head = detached_left,
        }
        self.nodes.get_mut(current).left = left_head;
        current
    }

    /// Links a fresh node holding `item` directly above `splayed`, which must
    /// be the already-splayed root of the whole tree. The new node becomes
    /// the root.
    fn link_above(&mut self, item: T, splayed: NodeId) -> NodeId {
        let order = self.comparator.compare(&item, &self.nodes.get(splayed).item);
        let id = if order == Ordering::Less {
            let left = self.nodes.get_mut(splayed).left.take();
            self.nodes.alloc(Node {
                item,
                left,
                right: Some(splayed),
            })
        } else {
            // Ties go right: an equal item lands after its duplicates in
            // order, so repeated inserts keep a stable first-come ordering.
            let right = self.nodes.get_mut(splayed).right.take();
            self.nodes.alloc(Node {
                item,
                left: Some(splayed),
                right,
            })
        };
        self.root = Some(id);
        id
    }

    /// Inserts `item`, keeping any duplicates already present. The new node
    /// becomes the root; its id is returned.
    pub(crate) fn insert(&mut self, item: T) -> NodeId {
        match self.root {
            None => {
                let id = self.nodes.alloc(Node::new(item));
                self.root = Some(id);
                id
            }
            Some(root) => {
                let splayed = self.splay(SplayKey::External(&item), root);
                self.link_above(item, splayed)
            }
        }
    }

    /// Inserts `item` unless an equal item is already present. Returns the id
    /// of the inserted node, or of the existing equal node (in which case
    /// `item` is dropped and the tree only changes shape, not content).
    pub(crate) fn add(&mut self, item: T) -> NodeId {
        match self.root {
            None => self.insert(item),
            Some(root) => {
                let splayed = self.splay(SplayKey::External(&item), root);
                self.root = Some(splayed);
                if self.comparator.compare(&item, &self.nodes.get(splayed).item) == Ordering::Equal {
                    splayed
                } else {
                    self.link_above(item, splayed)
                }
            }
        }
    }

    /// Removes one item comparing equal to `key` and returns it, or `None`
    /// if there is none. Either way the tree is left splayed around `key`.
    pub(crate) fn remove(&mut self, key: &T) -> Option<T> {
        let root = self.root?;
        let splayed = self.splay(SplayKey::External(key), root);
        self.root = Some(splayed);
        if self.comparator.compare(key, &self.nodes.get(splayed).item) != Ordering::Equal {
            return None;
        }
        Some(self.unlink_root(splayed))
    }

    /// Removes and returns the smallest item, or `None` if the tree is empty.
    pub(crate) fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        // Full descent to the leftmost node, then splay on its key. The
        // splay may surface a different node holding an equal item; that one
        // is removed, which is indistinguishable under the comparator.
        let min = self.subtree_min(root);
        let splayed = self.splay(SplayKey::Attached(min), root);
        Some(self.unlink_root(splayed))
    }

    /// Unlinks the node `root`, which must be the splayed root of the whole
    /// tree, and returns its item.
    fn unlink_root(&mut self, root: NodeId) -> T {
        let node = self.nodes.take(root);
        self.root = match node.left {
            None => node.right,
            Some(left) => {
                // Join: the left subtree's maximum has no right child once
                // splayed up, so the old right subtree hangs there.
                let left_root = self.splay_max(left);
                self.nodes.get_mut(left_root).right = node.right;
                Some(left_root)
            }
        };
        node.item
    }

    /// Splaying lookup: moves the closest node to the root and returns the
    /// root's id if it compares equal to `key`. An empty tree is untouched.
    pub(crate) fn find(&mut self, key: &T) -> Option<NodeId> {
        let root = self.root?;
        let splayed = self.splay(SplayKey::External(key), root);
        self.root = Some(splayed);
        if self.comparator.compare(key, &self.nodes.get(splayed).item) == Ordering::Equal {
            Some(splayed)
        } else {
            None
        }
    }

    /// Returns a reference to an item comparing equal to `key` without
    /// restructuring the tree.
    pub(crate) fn get(&self, key: &T) -> Option<&T> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.nodes.get(id);
            match self.comparator.compare(key, &node.item) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(&node.item),
            }
        }
        None
    }

    /// Returns true if an item comparing equal to `key` is present. Plain
    /// descent, no restructuring.
    pub(crate) fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns the id of the in-order successor of `id`, or `None` if it
    /// holds the last item. `id` must refer to a node currently in the tree.
    ///
    /// The fallback walk is key-driven, so a run of equal items acts as a
    /// single position: stepping from inside the run can land past it.
    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id);
        if let Some(right) = node.right {
            return Some(self.subtree_min(right));
        }
        // No right subtree: walk down from the root toward this node's key,
        // remembering the last time we went left.
        let mut successor = None;
        let mut current = self.root;
        while let Some(cur) = current {
            match self.comparator.compare(&node.item, &self.nodes.get(cur).item) {
                Ordering::Less => {
                    successor = Some(cur);
                    current = self.nodes.get(cur).left;
                }
                Ordering::Greater => current = self.nodes.get(cur).right,
                Ordering::Equal => break,
            }
        }
        successor
    }

    /// Returns the id of the in-order predecessor of `id`, or `None` if it
    /// holds the first item. `id` must refer to a node currently in the tree.
    pub(crate) fn prev(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id);
        if let Some(left) = node.left {
            return Some(self.subtree_max(left));
        }
        let mut predecessor = None;
        let mut current = self.root;
        while let Some(cur) = current {
            match self.comparator.compare(&node.item, &self.nodes.get(cur).item) {
                Ordering::Greater => {
                    predecessor = Some(cur);
                    current = self.nodes.get(cur).right;
                }
                Ordering::Less => current = self.nodes.get(cur).left,
                Ordering::Equal => break,
            }
        }
        predecessor
    }
}
