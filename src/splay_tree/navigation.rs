use super::SplayTree;
use crate::comparator::Comparator;
use crate::raw::NodeId;

impl<T, C> SplayTree<T, C> {
    /// Returns a reference to the smallest item in the tree, or `None` if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.raw.min()
    }

    /// Returns a reference to the largest item in the tree, or `None` if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.raw.max()
    }

    /// Returns the handle of the node holding the smallest item, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// let min = tree.min_node().unwrap();
    /// assert_eq!(tree.item(min), &1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    #[must_use]
    pub fn min_node(&self) -> Option<NodeId> {
        self.raw.root().map(|root| self.raw.subtree_min(root))
    }

    /// Returns the handle of the node holding the largest item, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// let max = tree.max_node().unwrap();
    /// assert_eq!(tree.item(max), &3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    #[must_use]
    pub fn max_node(&self) -> Option<NodeId> {
        self.raw.root().map(|root| self.raw.subtree_max(root))
    }

    /// Returns the handle of the smallest node within the subtree rooted at `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([2, 1, 3]);
    ///
    /// // the found item becomes the root, so its subtree is the whole tree.
    /// let root = tree.find(&2).unwrap();
    /// assert_eq!(tree.subtree_min(root), tree.min_node().unwrap());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `from` has been invalidated by the removal of its item.
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    pub fn subtree_min(&self, from: NodeId) -> NodeId {
        self.raw.subtree_min(from)
    }

    /// Returns the handle of the largest node within the subtree rooted at `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([2, 1, 3]);
    ///
    /// let root = tree.find(&2).unwrap();
    /// assert_eq!(tree.item(tree.subtree_max(root)), &3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `from` has been invalidated by the removal of its item.
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    pub fn subtree_max(&self, from: NodeId) -> NodeId {
        self.raw.subtree_max(from)
    }

    /// Returns the handle of the node holding the next larger item, or `None`
    /// if `node` holds the largest one.
    ///
    /// Neighbor queries do not splay. When the tree holds several items equal
    /// to the one addressed by `node`, the resolving walk cannot tell the
    /// occurrences apart and may step over them or come up empty; with distinct
    /// items the neighbor is always exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([2, 12, 1, -6, 4, -8]);
    ///
    /// let four = tree.find(&4).unwrap();
    /// let up = tree.next(four).unwrap();
    ///
    /// assert_eq!(tree.item(up), &12);
    /// assert_eq!(tree.next(tree.max_node().unwrap()), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has been invalidated by the removal of its item.
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    pub fn next(&self, node: NodeId) -> Option<NodeId>
    where
        C: Comparator<T>,
    {
        self.raw.next(node)
    }

    /// Returns the handle of the node holding the next smaller item, or `None`
    /// if `node` holds the smallest one.
    ///
    /// Neighbor queries do not splay. When the tree holds several items equal
    /// to the one addressed by `node`, the resolving walk cannot tell the
    /// occurrences apart and may step over them or come up empty; with distinct
    /// items the neighbor is always exact.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([2, 12, 1, -6, 4, -8]);
    ///
    /// let four = tree.find(&4).unwrap();
    /// let down = tree.prev(four).unwrap();
    ///
    /// assert_eq!(tree.item(down), &2);
    /// assert_eq!(tree.prev(tree.min_node().unwrap()), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has been invalidated by the removal of its item.
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    pub fn prev(&self, node: NodeId) -> Option<NodeId>
    where
        C: Comparator<T>,
    {
        self.raw.prev(node)
    }
}
