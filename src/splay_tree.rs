use alloc::vec::{self, Vec};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::comparator::{Comparator, NaturalOrder};
use crate::raw::{NodeId, RawSplayTree, Spine};

mod capacity;
mod dump;
mod navigation;

pub use dump::Dump;

/// An ordered multiset based on a [splay tree].
///
/// The tree keeps its items sorted and allows duplicates; equal items keep their insertion
/// order. The ordering comes from a [`Comparator`] fixed at construction. The default,
/// [`NaturalOrder`], compares through [`Ord`], so `SplayTree<T>` behaves like a sorted
/// collection of `T`; [`with_comparator`] accepts any other comparator, including a plain
/// closure, for orderings the item type does not carry itself.
///
/// A splay tree is self-adjusting: every mutating operation and every [`find`] rotate the item
/// they touch up to the root, so recently used items sit near the top and repeated or clustered
/// accesses get cheaper. The tree stores no balancing metadata; its shape is its access
/// history. See the [crate documentation](crate) for a discussion of splaying and its amortized
/// costs.
///
/// Every stored occurrence is addressed by a [`NodeId`] handle. Handles survive any amount of
/// restructuring and are only invalidated by the calls that remove items; [`item`], [`next`],
/// and [`prev`] turn them back into items and neighbors, and cloning the tree preserves the
/// node layout, so handles carry over to the clone. A handle is only meaningful for the tree
/// that minted it. Using it with another tree is a logic error that may panic or address an
/// arbitrary item.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering
/// relative to any other item, as determined by the comparator, changes while it is in the
/// tree. The same applies to a comparator that does not implement a total order. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated
/// to the `SplayTree` that observed the logic error and not result in undefined behavior.
/// This could include panics, incorrect results, aborts, memory leaks, and non-termination.
///
/// # Examples
///
/// ```
/// use splay_tree::SplayTree;
///
/// let mut primes = SplayTree::new();
///
/// primes.insert(5);
/// primes.insert(3);
/// primes.insert(2);
/// primes.insert(3); // duplicates are kept
///
/// assert_eq!(primes.len(), 4);
/// assert!(primes.contains(&3));
/// assert_eq!(primes.iter().collect::<Vec<_>>(), [&2, &3, &3, &5]);
///
/// // the smallest item can be removed without knowing its value.
/// assert_eq!(primes.pop(), Some(2));
/// ```
///
/// Handles keep a grip on individual occurrences:
///
/// ```
/// use splay_tree::SplayTree;
///
/// let mut scores = SplayTree::new();
///
/// let first = scores.insert(10);
/// scores.insert(4);
/// scores.insert(25);
///
/// assert_eq!(scores.item(first), &10);
///
/// // neighbors in sorted order, regardless of insertion order.
/// let above = scores.next(first).unwrap();
/// assert_eq!(scores.item(above), &25);
/// ```
///
/// [splay tree]: https://en.wikipedia.org/wiki/Splay_tree
/// [`Comparator`]: crate::Comparator
/// [`NaturalOrder`]: crate::NaturalOrder
/// [`with_comparator`]: SplayTree::with_comparator
/// [`find`]: SplayTree::find
/// [`item`]: SplayTree::item
/// [`next`]: SplayTree::next
/// [`prev`]: SplayTree::prev
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct SplayTree<T, C = NaturalOrder> {
    raw: RawSplayTree<T, C>,
}

/// An iterator over the items of a `SplayTree`, in comparator order.
///
/// This `struct` is created by the [`iter`] method on [`SplayTree`].
/// See its documentation for more.
///
/// [`iter`]: SplayTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a, C> {
    inner: Nodes<'a, T, C>,
}

/// An owning iterator over the items of a `SplayTree`, in comparator order.
///
/// This `struct` is created by the [`into_iter`] method on [`SplayTree`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

/// An iterator over the node handles of a `SplayTree`, in comparator order
/// of the items they address.
///
/// This `struct` is created by the [`nodes`] method on [`SplayTree`].
/// See its documentation for more.
///
/// [`nodes`]: SplayTree::nodes
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Nodes<'a, T: 'a, C> {
    tree: &'a RawSplayTree<T, C>,
    front: Spine,
    back: Spine,
    remaining: usize,
}

impl<T> SplayTree<T> {
    /// Creates an empty `SplayTree` ordered through [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree: SplayTree<i32> = SplayTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> SplayTree<T> {
        SplayTree {
            raw: RawSplayTree::with_comparator(NaturalOrder),
        }
    }
}

impl<T, C> SplayTree<T, C> {
    /// Creates an empty `SplayTree` ordered through `comparator`.
    ///
    /// The comparator decides both the sort order and which items count as equal;
    /// it must implement a total order over the item type.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert(2);
    ///
    /// // under the reversed order, 3 is the smallest item.
    /// assert_eq!(tree.pop(), Some(3));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&2, &1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(comparator: C) -> SplayTree<T, C> {
        SplayTree {
            raw: RawSplayTree::with_comparator(comparator),
        }
    }

    /// Clears the tree, removing all items.
    ///
    /// The allocated node storage is kept for reuse. All node handles are invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([1, 2, 3]);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns `true` if the tree contains an item equal to `key`, without
    /// restructuring the tree.
    ///
    /// Prefer [`find`](SplayTree::find) when the item will be touched again soon;
    /// finding splays, which is what keeps frequently used items cheap to reach.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([1, 2, 3]);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        C: Comparator<T>,
    {
        self.raw.contains(key)
    }

    /// Returns a reference to an item that compares equal to `key`, without
    /// restructuring the tree.
    ///
    /// Under a comparator that only inspects part of an item, the returned item can
    /// differ from `key` in everything the comparator ignores.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    ///
    /// tree.insert("carp");
    /// tree.insert("herring");
    ///
    /// // equality is the comparator's: any four letter word matches "carp".
    /// assert_eq!(tree.get(&"tuna"), Some(&"carp"));
    /// assert_eq!(tree.get(&"eel"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) - h is the current height of the tree.
    pub fn get(&self, key: &T) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.raw.get(key)
    }

    /// Searches for an item equal to `key`, splays it to the root, and returns its handle.
    ///
    /// Whether or not an equal item exists, the search path is splayed, so even a miss
    /// moves the nearby items closer to the root. If several items compare equal to
    /// `key`, the handle of an unspecified occurrence is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([1, 2, 3]);
    ///
    /// let two = tree.find(&2);
    /// assert!(two.is_some());
    /// assert_eq!(two, tree.root()); // the found item is now the root
    ///
    /// assert!(tree.find(&4).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn find(&mut self, key: &T) -> Option<NodeId>
    where
        C: Comparator<T>,
    {
        self.raw.find(key)
    }

    /// Inserts an item and returns the handle of its new node.
    ///
    /// Duplicates are always kept; a new item lands after its equals in iteration
    /// order. The handle stays valid until the occurrence it addresses is removed,
    /// no matter how the tree restructures itself in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    ///
    /// let id = tree.insert(3);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.len(), 2); // duplicates are kept
    /// assert_eq!(tree.item(id), &3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn insert(&mut self, item: T) -> NodeId
    where
        C: Comparator<T>,
    {
        self.raw.insert(item)
    }

    /// Inserts an item unless an equal one is already present, and returns the handle
    /// of the item left in the tree.
    ///
    /// When an equal item exists, `item` is dropped and the existing occurrence's
    /// handle is returned. This is the set-flavored insertion; [`insert`](SplayTree::insert)
    /// is the multiset one.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    ///
    /// let first = tree.add(3);
    /// let second = tree.add(3);
    ///
    /// assert_eq!(first, second);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn add(&mut self, item: T) -> NodeId
    where
        C: Comparator<T>,
    {
        self.raw.add(item)
    }

    /// Removes one item equal to `key` and returns it, or `None` if there is none.
    ///
    /// With duplicates present, an unspecified occurrence is removed; the remaining
    /// equals keep their relative order and their handles. The handle of the removed
    /// occurrence is invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([1, 2, 2]);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        C: Comparator<T>,
    {
        self.raw.remove(key)
    }

    /// Removes the smallest item and returns it, or `None` if the tree is empty.
    ///
    /// Draining a tree through `pop` yields its items in comparator order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::from([2, 1, 3]);
    ///
    /// assert_eq!(tree.pop(), Some(1));
    /// assert_eq!(tree.pop(), Some(2));
    /// assert_eq!(tree.pop(), Some(3));
    /// assert_eq!(tree.pop(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized
    pub fn pop(&mut self) -> Option<T>
    where
        C: Comparator<T>,
    {
        self.raw.pop()
    }

    /// Retains only the items for which `f` returns `true`.
    ///
    /// Items are visited in comparator order. All node handles are invalidated,
    /// including those of retained items.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree: SplayTree<i32> = (0..8).collect();
    /// tree.retain(|&item| item % 2 == 0);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&0, &2, &4, &6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn retain<F>(&mut self, mut f: F)
    where
        C: Comparator<T>,
        F: FnMut(&T) -> bool,
    {
        for item in self.raw.drain_to_vec() {
            if f(&item) {
                self.raw.insert(item);
            }
        }
    }

    /// Moves all items from `other` into `self`, leaving `other` empty.
    ///
    /// Duplicates between the trees are kept. `other`'s handles are invalidated;
    /// `self`'s stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut a = SplayTree::from([1, 2, 3]);
    /// let mut b = SplayTree::from([3, 4, 5]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.len(), 6);
    /// assert!(b.is_empty());
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [&1, &2, &3, &3, &4, &5]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m) amortized - m is the size of `other`.
    pub fn append(&mut self, other: &mut SplayTree<T, C>)
    where
        C: Comparator<T>,
    {
        for item in other.raw.drain_to_vec() {
            self.raw.insert(item);
        }
    }

    /// Returns a reference to the item addressed by `node`.
    ///
    /// Looking an item up by handle does not restructure the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// let id = tree.insert("sole");
    ///
    /// assert_eq!(tree.item(id), &"sole");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `node` has been invalidated by the removal of its item.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn item(&self, node: NodeId) -> &T {
        self.raw.item(node)
    }

    /// Returns the handle of the root node, or `None` if the tree is empty.
    ///
    /// The root is the node most recently touched by a splaying operation, so right
    /// after [`find`](SplayTree::find) returns `Some`, `root` is that same handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.root(), None);
    ///
    /// let id = tree.insert(7);
    /// assert_eq!(tree.root(), Some(id)); // a fresh insert is always the root
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.raw.root()
    }

    /// Gets an iterator that visits the items in the tree in comparator order.
    ///
    /// Iteration does not restructure the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// let items: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(items, [&1, &2, &3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) over the full iteration.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            inner: self.nodes(),
        }
    }

    /// Gets an iterator that visits the node handles in the tree in comparator order
    /// of the items they address.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// let items: Vec<&i32> = tree.nodes().map(|id| tree.item(id)).collect();
    /// assert_eq!(items, [&1, &2, &3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) over the full iteration.
    pub fn nodes(&self) -> Nodes<'_, T, C> {
        Nodes::new(&self.raw)
    }

    /// Returns the number of items in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no items.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<T: Hash, C> Hash for SplayTree<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: PartialEq, C> PartialEq for SplayTree<T, C> {
    fn eq(&self, other: &SplayTree<T, C>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, C> Eq for SplayTree<T, C> {}

impl<T: Clone, C: Clone> Clone for SplayTree<T, C> {
    fn clone(&self) -> Self {
        SplayTree {
            raw: self.raw.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SplayTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for SplayTree<T, C> {
    fn default() -> Self {
        SplayTree::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for SplayTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SplayTree::with_comparator(C::default());
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for SplayTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for SplayTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SplayTree<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T, C> IntoIterator for SplayTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `SplayTree`'s items in comparator order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_tree::SplayTree;
    ///
    /// let tree = SplayTree::from([3, 1, 2]);
    ///
    /// let items: Vec<i32> = tree.into_iter().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a SplayTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Iter<'a, T, C> {
        self.iter()
    }
}

impl<'a, T, C> Nodes<'a, T, C> {
    fn new(tree: &'a RawSplayTree<T, C>) -> Self {
        let mut nodes = Nodes {
            tree,
            front: Spine::new(),
            back: Spine::new(),
            remaining: tree.len(),
        };
        if let Some(root) = tree.root() {
            nodes.push_left_spine(root);
            nodes.push_right_spine(root);
        }
        nodes
    }

    fn push_left_spine(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            self.front.push(id);
            current = self.tree.node(id).left;
        }
    }

    fn push_right_spine(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            self.back.push(id);
            current = self.tree.node(id).right;
        }
    }
}

// The two ends traverse independently; `remaining` is what stops them from
// walking past each other.
impl<T, C> Iterator for Nodes<'_, T, C> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front.pop()?;
        self.remaining -= 1;
        if let Some(right) = self.tree.node(id).right {
            self.push_left_spine(right);
        }
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> DoubleEndedIterator for Nodes<'_, T, C> {
    fn next_back(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back.pop()?;
        self.remaining -= 1;
        if let Some(left) = self.tree.node(id).left {
            self.push_right_spine(left);
        }
        Some(id)
    }
}

impl<T, C> ExactSizeIterator for Nodes<'_, T, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, C> FusedIterator for Nodes<'_, T, C> {}

impl<T, C> Clone for Nodes<'_, T, C> {
    fn clone(&self) -> Self {
        Nodes {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T, C> fmt::Debug for Nodes<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.inner.tree;
        self.inner.next().map(|id| &tree.node(id).item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C> {
    fn next_back(&mut self) -> Option<&'a T> {
        let tree = self.inner.tree;
        self.inner.next_back().map(|id| &tree.node(id).item)
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Iter<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `splay_tree::IntoIter`.
    ///
    /// ```
    /// # use splay_tree::splay_tree;
    /// let iter: splay_tree::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
