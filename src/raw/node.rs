use super::handle::NodeId;

/// A binary tree node: one item and its child links.
///
/// There is deliberately no parent link. The splay loop never walks upward;
/// it rebuilds the path top-down through its two accumulator chains, so the
/// node stays at two words of overhead.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a childless node holding `item`.
    pub(crate) const fn new(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }
}
