use alloc::vec::Vec;
use core::fmt;

use super::SplayTree;
use crate::raw::NodeId;

/// A view that renders the current shape of a [`SplayTree`], line by line.
///
/// This `struct` is created by the [`dump`] method on [`SplayTree`].
/// See its documentation for more.
///
/// [`dump`]: SplayTree::dump
pub struct Dump<'a, T, C> {
    tree: &'a SplayTree<T, C>,
}

impl<T, C> SplayTree<T, C> {
    /// Returns a view that implements [`Display`](fmt::Display) by rendering the
    /// tree's current shape.
    ///
    /// Nodes are printed pre-order, one per line, indented two spaces per level and
    /// prefixed with `l: ` or `r: ` for the side they hang off. The root carries no
    /// prefix. An empty tree renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// for item in [2, 1, 3] {
    ///     tree.insert(item);
    /// }
    /// tree.find(&2);
    ///
    /// assert_eq!(tree.dump().to_string(), "2\n  l: 1\n  r: 3\n");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) per rendering.
    pub fn dump(&self) -> Dump<'_, T, C> {
        Dump { tree: self }
    }
}

impl<T: fmt::Debug, C> fmt::Display for Dump<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = &self.tree.raw;
        let mut stack: Vec<(NodeId, usize, &str)> = Vec::new();
        if let Some(root) = raw.root() {
            stack.push((root, 0, ""));
        }
        // Right pushed first so the left subtree prints first.
        while let Some((id, depth, side)) = stack.pop() {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            writeln!(f, "{side}{:?}", raw.item(id))?;
            let node = raw.node(id);
            if let Some(right) = node.right {
                stack.push((right, depth + 1, "r: "));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1, "l: "));
            }
        }
        Ok(())
    }
}
