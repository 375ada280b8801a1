//! Traversal engine.
//!
//! Walks visit an immutable snapshot of the tree; the borrow of the arena
//! keeps the structure fixed for the duration of the walk.

use generational_arena::Arena;

use crate::types::{HeightNode, NodeId};

/// Order in which [`walk`] visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalkOrder {
    /// Left, self, right: ascending key order.
    Forward,
    /// Right, self, left: descending key order.
    Reverse,
    /// Self, left, right.
    PreOrder,
    /// Left, right, self.
    PostOrder,
    /// Level by level, starting from the root.
    TreeOrder,
}

impl WalkOrder {
    pub const ALL: [WalkOrder; 5] = [
        WalkOrder::Forward,
        WalkOrder::Reverse,
        WalkOrder::PreOrder,
        WalkOrder::PostOrder,
        WalkOrder::TreeOrder,
    ];
}

/// Calls `action` on every node below `root` in the requested order.
pub fn walk<'a, N, F>(arena: &'a Arena<N>, root: Option<NodeId>, order: WalkOrder, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    let Some(root) = root else {
        return;
    };

    match order {
        WalkOrder::Forward => forward_order(arena, root, action),
        WalkOrder::Reverse => reverse_order(arena, root, action),
        WalkOrder::PreOrder => pre_order(arena, root, action),
        WalkOrder::PostOrder => post_order(arena, root, action),
        WalkOrder::TreeOrder => tree_order(arena, root, action),
    }
}

fn forward_order<'a, N, F>(arena: &'a Arena<N>, node: NodeId, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    let n = &arena[node];
    if let Some(l) = n.l() {
        forward_order(arena, l, action);
    }
    action(node, n);
    if let Some(r) = n.r() {
        forward_order(arena, r, action);
    }
}

fn reverse_order<'a, N, F>(arena: &'a Arena<N>, node: NodeId, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    let n = &arena[node];
    if let Some(r) = n.r() {
        reverse_order(arena, r, action);
    }
    action(node, n);
    if let Some(l) = n.l() {
        reverse_order(arena, l, action);
    }
}

fn pre_order<'a, N, F>(arena: &'a Arena<N>, node: NodeId, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    let n = &arena[node];
    action(node, n);
    if let Some(l) = n.l() {
        pre_order(arena, l, action);
    }
    if let Some(r) = n.r() {
        pre_order(arena, r, action);
    }
}

fn post_order<'a, N, F>(arena: &'a Arena<N>, node: NodeId, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    let n = &arena[node];
    if let Some(l) = n.l() {
        post_order(arena, l, action);
    }
    if let Some(r) = n.r() {
        post_order(arena, r, action);
    }
    action(node, n);
}

/// Level order without a queue: one full descent per height value, from the
/// root's height down to the leaves, visiting only nodes whose cached height
/// equals that value. Costs O(n·h) instead of O(n).
fn tree_order<'a, N, F>(arena: &'a Arena<N>, root: NodeId, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    for level in (1..=arena[root].height()).rev() {
        tree_level(arena, root, level, action);
    }
}

fn tree_level<'a, N, F>(arena: &'a Arena<N>, node: NodeId, level: i32, action: &mut F)
where
    N: HeightNode,
    F: FnMut(NodeId, &'a N),
{
    let n = &arena[node];
    if n.height() == level {
        action(node, n);
    }
    // Heights only shrink going down, so shorter subtrees can be skipped.
    if n.height() <= level {
        return;
    }
    if let Some(l) = n.l() {
        tree_level(arena, l, level, action);
    }
    if let Some(r) = n.r() {
        tree_level(arena, r, level, action);
    }
}
