//! Node primitives: height bookkeeping, balance factor and rotations.
//!
//! These are purely structural. Nothing here compares payloads.

use generational_arena::Arena;

use crate::types::{HeightNode, NodeId};

/// Height of the subtree at `n`; 0 for an absent node.
#[inline]
pub fn height<N: HeightNode>(arena: &Arena<N>, n: Option<NodeId>) -> i32 {
    n.map_or(0, |i| arena[i].height())
}

/// `height(left) - height(right)`; 0 for an absent node.
#[inline]
pub fn balance<N: HeightNode>(arena: &Arena<N>, n: Option<NodeId>) -> i32 {
    match n {
        Some(i) => height(arena, arena[i].l()) - height(arena, arena[i].r()),
        None => 0,
    }
}

/// Recomputes the cached height of `n` from its children.
#[inline]
pub fn update_height<N: HeightNode>(arena: &mut Arena<N>, n: NodeId) {
    let h = 1 + height(arena, arena[n].l()).max(height(arena, arena[n].r()));
    arena[n].set_height(h);
}

/// Clears the links of a node that is about to enter (or has just left) a
/// tree, turning it into a leaf.
#[inline]
pub fn detach<N: HeightNode>(node: &mut N) {
    node.set_l(None);
    node.set_r(None);
    node.set_height(1);
}

/// Right rotation around `y`.
///
/// ```text
///       y           x
///      / \         / \
///     x   C  ->   A   y
///    / \             / \
///   A   B           B   C
/// ```
///
/// Returns the new subtree root. A node without a left child is returned
/// unchanged.
pub fn rotate_right<N: HeightNode>(arena: &mut Arena<N>, y: NodeId) -> NodeId {
    let Some(x) = arena[y].l() else {
        return y;
    };
    let b = arena[x].r();

    arena[x].set_r(Some(y));
    arena[y].set_l(b);

    update_height(arena, y);
    update_height(arena, x);
    x
}

/// Left rotation around `x`, the mirror image of [`rotate_right`].
pub fn rotate_left<N: HeightNode>(arena: &mut Arena<N>, x: NodeId) -> NodeId {
    let Some(y) = arena[x].r() else {
        return x;
    };
    let b = arena[y].l();

    arena[y].set_l(Some(x));
    arena[x].set_r(b);

    update_height(arena, x);
    update_height(arena, y);
    y
}

/// Leftmost node in the tree.
pub fn first<N: HeightNode>(arena: &Arena<N>, root: Option<NodeId>) -> Option<NodeId> {
    let mut curr = root?;
    while let Some(l) = arena[curr].l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: HeightNode>(arena: &Arena<N>, root: Option<NodeId>) -> Option<NodeId> {
    let mut curr = root?;
    while let Some(r) = arena[curr].r() {
        curr = r;
    }
    Some(curr)
}

fn size_inner<N: HeightNode>(arena: &Arena<N>, root: NodeId) -> usize {
    1 + arena[root].l().map_or(0, |l| size_inner(arena, l))
        + arena[root].r().map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: HeightNode>(arena: &Arena<N>, root: Option<NodeId>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::AvlNode;

    fn leaf(arena: &mut Arena<AvlNode<i32>>, v: i32) -> NodeId {
        arena.insert(AvlNode::new(v))
    }

    fn link(
        arena: &mut Arena<AvlNode<i32>>,
        n: NodeId,
        l: Option<NodeId>,
        r: Option<NodeId>,
    ) -> NodeId {
        arena[n].l = l;
        arena[n].r = r;
        update_height(arena, n);
        n
    }

    #[test]
    fn height_and_balance_of_absent_node_are_zero() {
        let arena = Arena::<AvlNode<i32>>::new();
        assert_eq!(height(&arena, None), 0);
        assert_eq!(balance(&arena, None), 0);
    }

    #[test]
    fn rotate_right_rebuilds_left_chain() {
        let mut arena = Arena::new();
        let a = leaf(&mut arena, 1);
        let x = leaf(&mut arena, 2);
        let y = leaf(&mut arena, 3);
        link(&mut arena, x, Some(a), None);
        link(&mut arena, y, Some(x), None);
        assert_eq!(balance(&arena, Some(y)), 2);

        let root = rotate_right(&mut arena, y);
        assert_eq!(root, x);
        assert_eq!(arena[x].l, Some(a));
        assert_eq!(arena[x].r, Some(y));
        assert_eq!(arena[y].l, None);
        assert_eq!(arena[x].height, 2);
        assert_eq!(arena[y].height, 1);
        assert_eq!(balance(&arena, Some(x)), 0);
    }

    #[test]
    fn rotate_left_moves_inner_grandchild() {
        let mut arena = Arena::new();
        let x = leaf(&mut arena, 10);
        let y = leaf(&mut arena, 20);
        let b = leaf(&mut arena, 15);
        let c = leaf(&mut arena, 30);
        link(&mut arena, y, Some(b), Some(c));
        link(&mut arena, x, None, Some(y));

        let root = rotate_left(&mut arena, x);
        assert_eq!(root, y);
        assert_eq!(arena[y].l, Some(x));
        assert_eq!(arena[x].r, Some(b));
        assert_eq!(arena[x].height, 2);
        assert_eq!(arena[y].height, 3);
        assert_eq!(first(&arena, Some(root)), Some(x));
        assert_eq!(last(&arena, Some(root)), Some(c));
        assert_eq!(size(&arena, Some(root)), 4);
    }

    #[test]
    fn rotation_without_pivot_child_is_noop() {
        let mut arena = Arena::new();
        let n = leaf(&mut arena, 1);
        assert_eq!(rotate_right(&mut arena, n), n);
        assert_eq!(rotate_left(&mut arena, n), n);
        assert_eq!(arena[n].height, 1);
    }
}
