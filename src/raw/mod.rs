mod arena;
mod handle;
mod node;
mod raw_splay_tree;

pub use handle::NodeId;

pub(crate) use raw_splay_tree::{RawSplayTree, Spine};
