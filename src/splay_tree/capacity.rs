use super::SplayTree;
use crate::raw::RawSplayTree;
use crate::NaturalOrder;

impl<T> SplayTree<T> {
    /// Creates an empty tree ordered through [`Ord`], with node storage for at
    /// least `capacity` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<i32> = SplayTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SplayTree {
            raw: RawSplayTree::with_capacity_and_comparator(capacity, NaturalOrder),
        }
    }
}

impl<T, C> SplayTree<T, C> {
    /// Creates an empty tree ordered through `comparator`, with node storage for
    /// at least `capacity` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::with_capacity_and_comparator(2, |a: &u8, b: &u8| b.cmp(a));
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.pop(), Some(2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        SplayTree {
            raw: RawSplayTree::with_capacity_and_comparator(capacity, comparator),
        }
    }

    /// Returns the number of items the tree can hold before its node storage
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<i32> = SplayTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
