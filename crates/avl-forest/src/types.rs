//! Node trait definitions.
//!
//! Nodes are stored in a [`generational_arena::Arena`] owned by the tree.
//! Every child "pointer" is an `Option<NodeId>` handle into that arena, and
//! all tree-manipulation functions take the arena plus handles.
//!
//! There are no parent links: rebalancing is driven by the return values of
//! the recursive algorithms in [`crate::avl::util`].

pub use generational_arena::Index as NodeId;

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<NodeId>;
    fn r(&self) -> Option<NodeId>;
    fn set_l(&mut self, v: Option<NodeId>);
    fn set_r(&mut self, v: Option<NodeId>);
}

/// Cached subtree height on top of [`Node`].
///
/// An absent node has height 0, a leaf has height 1.
pub trait HeightNode: Node {
    fn height(&self) -> i32;
    fn set_height(&mut self, height: i32);
}

/// Comparator over whole nodes.
///
/// Returns a negative number, zero, or a positive number when `a` orders
/// before, equal to, or after `b`.
pub type Comparator<N> = dyn Fn(&N, &N) -> i32;
