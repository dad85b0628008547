use core::cmp::Ordering;

/// A total order over items of type `T`.
///
/// The tree treats items as opaque: every ordering decision goes through the
/// comparator supplied at construction time. Implementations must be
/// consistent (a total order); two items for which [`compare`] returns
/// [`Ordering::Equal`] are duplicates of one another, but remain distinct
/// members of the tree.
///
/// The trait is implemented for every `Fn(&T, &T) -> Ordering` closure, so an
/// ad-hoc order can be passed directly:
///
/// ```
/// use std::cmp::Ordering;
/// use splay_tree::SplayTree;
///
/// let mut tree = SplayTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// tree.insert(1);
/// tree.insert(3);
/// tree.insert(2);
///
/// // Largest first under the reversed order.
/// assert_eq!(tree.min(), Some(&3));
/// ```
///
/// [`compare`]: Comparator::compare
pub trait Comparator<T> {
    /// Compares two items, returning their relative order.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The default comparator: orders items by their [`Ord`] implementation.
///
/// This is a zero-sized type, so a `SplayTree<T>` using it stores no
/// comparator state at all.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
