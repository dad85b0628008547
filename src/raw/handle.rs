use core::num::NonZero;

#[cfg(test)]
type RawId = u16;
#[cfg(not(test))]
type RawId = u32;

/// A stable identifier for a node in a [`SplayTree`].
///
/// Ids are handed out by [`insert`]/[`add`] and by the lookup and navigation
/// methods. An id keeps identifying the same item while that item is in the
/// tree, no matter how much splaying moves the node around. Removing the item
/// (or clearing the tree) invalidates its id; using an invalidated id
/// afterwards is a logic error that may panic or resolve to a different node.
///
/// Internally an id is a non-zero arena slot number, so `Option<NodeId>`
/// occupies no more space than `NodeId` itself.
///
/// [`SplayTree`]: crate::SplayTree
/// [`insert`]: crate::SplayTree::insert
/// [`add`]: crate::SplayTree::add
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct NodeId(NonZero<RawId>);

impl NodeId {
    pub(crate) const MAX: usize = (RawId::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`!");
        // The assert keeps `index + 1` nonzero and within `RawId`, so the
        // cast cannot truncate and `new` cannot return `None`.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawId).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
