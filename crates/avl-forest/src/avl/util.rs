//! Recursive AVL algorithms.
//!
//! Every function takes the root of a subtree and hands back the (possibly
//! new) root of that subtree. Heights are recomputed and rotations applied
//! while the recursion unwinds, so no parent links are needed.

use generational_arena::Arena;
use tracing::trace;

use crate::types::{HeightNode, NodeId};
use crate::util::{balance, detach, height, rotate_left, rotate_right, update_height};

/// Insert was refused because a node with an equal key is already present.
///
/// The candidate node is handed back untouched.
#[derive(Debug)]
pub struct Occupied<N> {
    /// Handle of the node that already holds the key.
    pub existing: NodeId,
    pub node: N,
}

/// Delete found no node matching the probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vacant;

/// Inserts `item` below `root`.
///
/// On success returns `(new_root, inserted)`. On an equal key nothing in the
/// arena is touched and `item` comes back inside [`Occupied`].
pub fn insert<N, C>(
    arena: &mut Arena<N>,
    root: Option<NodeId>,
    mut item: N,
    compare: &C,
) -> Result<(NodeId, NodeId), Occupied<N>>
where
    N: HeightNode,
    C: Fn(&N, &N) -> i32 + ?Sized,
{
    let Some(node) = root else {
        detach(&mut item);
        let id = arena.insert(item);
        return Ok((id, id));
    };

    let pos = compare(&item, &arena[node]);
    let inserted = if pos < 0 {
        let l = arena[node].l();
        let (l, inserted) = insert(arena, l, item, compare)?;
        arena[node].set_l(Some(l));
        inserted
    } else if pos > 0 {
        let r = arena[node].r();
        let (r, inserted) = insert(arena, r, item, compare)?;
        arena[node].set_r(Some(r));
        inserted
    } else {
        return Err(Occupied {
            existing: node,
            node: item,
        });
    };

    update_height(arena, node);
    Ok((rebalance_after_insert(arena, node, inserted, compare), inserted))
}

/// Insert rebalancing: the zig-zag test compares the new item with the
/// child on the heavy side.
fn rebalance_after_insert<N, C>(arena: &mut Arena<N>, node: NodeId, item: NodeId, compare: &C) -> NodeId
where
    N: HeightNode,
    C: Fn(&N, &N) -> i32 + ?Sized,
{
    let bf = balance(arena, Some(node));

    if bf > 1 {
        let Some(l) = arena[node].l() else {
            return node;
        };
        if compare(&arena[item], &arena[l]) < 0 {
            trace!("insert rebalance: left-left");
            return rotate_right(arena, node);
        }
        trace!("insert rebalance: left-right");
        let l = rotate_left(arena, l);
        arena[node].set_l(Some(l));
        return rotate_right(arena, node);
    }

    if bf < -1 {
        let Some(r) = arena[node].r() else {
            return node;
        };
        if compare(&arena[item], &arena[r]) > 0 {
            trace!("insert rebalance: right-right");
            return rotate_left(arena, node);
        }
        trace!("insert rebalance: right-left");
        let r = rotate_right(arena, r);
        arena[node].set_r(Some(r));
        return rotate_left(arena, node);
    }

    node
}

/// Deletes the node matching `target` below `root`.
///
/// The removed node leaves the arena with its links cleared and is passed to
/// `release`. Returns the new subtree root, or [`Vacant`] (tree untouched)
/// when nothing matches.
pub fn remove<N, C, F>(
    arena: &mut Arena<N>,
    root: Option<NodeId>,
    target: &N,
    compare: &C,
    release: &mut F,
) -> Result<Option<NodeId>, Vacant>
where
    N: HeightNode,
    C: Fn(&N, &N) -> i32 + ?Sized,
    F: FnMut(N),
{
    let Some(node) = root else {
        return Err(Vacant);
    };

    let pos = compare(target, &arena[node]);
    if pos < 0 {
        let l = arena[node].l();
        let l = remove(arena, l, target, compare, release)?;
        arena[node].set_l(l);
    } else if pos > 0 {
        let r = arena[node].r();
        let r = remove(arena, r, target, compare, release)?;
        arena[node].set_r(r);
    } else {
        return Ok(unlink(arena, node, release));
    }

    update_height(arena, node);
    Ok(Some(rebalance_after_remove(arena, node)))
}

/// Removes `node` itself from the subtree it roots and returns the
/// replacement root.
///
/// With at most one child, that child takes the slot. With two children the
/// in-order successor is detached from the right subtree and takes the slot,
/// adopting both children. Either way `node` is the one released, and every
/// other handle stays valid.
pub fn unlink<N, F>(arena: &mut Arena<N>, node: NodeId, release: &mut F) -> Option<NodeId>
where
    N: HeightNode,
    F: FnMut(N),
{
    let l = arena[node].l();
    let r = arena[node].r();

    let replacement = match (l, r) {
        (Some(l), Some(r)) => {
            let (rest, successor) = detach_minimum(arena, r);
            arena[successor].set_l(Some(l));
            arena[successor].set_r(rest);
            update_height(arena, successor);
            Some(rebalance_after_remove(arena, successor))
        }
        _ => l.or(r),
    };

    if let Some(mut removed) = arena.remove(node) {
        detach(&mut removed);
        release(removed);
    }
    replacement
}

/// Detaches the leftmost node below `root`, rebalancing on the way back up.
///
/// Returns `(new_root, minimum)`; `minimum` is left in the arena with no
/// children.
fn detach_minimum<N: HeightNode>(arena: &mut Arena<N>, root: NodeId) -> (Option<NodeId>, NodeId) {
    match arena[root].l() {
        None => {
            let rest = arena[root].r();
            detach(&mut arena[root]);
            (rest, root)
        }
        Some(l) => {
            let (rest, minimum) = detach_minimum(arena, l);
            arena[root].set_l(rest);
            update_height(arena, root);
            (Some(rebalance_after_remove(arena, root)), minimum)
        }
    }
}

/// Delete rebalancing: the straight/zig-zag choice follows the heavy child's
/// own balance factor, not a key comparison.
fn rebalance_after_remove<N: HeightNode>(arena: &mut Arena<N>, node: NodeId) -> NodeId {
    let bf = balance(arena, Some(node));

    if bf > 1 {
        let l = arena[node].l();
        if balance(arena, l) >= 0 {
            trace!("remove rebalance: left-left");
            return rotate_right(arena, node);
        }
        if let Some(l) = l {
            trace!("remove rebalance: left-right");
            let l = rotate_left(arena, l);
            arena[node].set_l(Some(l));
        }
        return rotate_right(arena, node);
    }

    if bf < -1 {
        let r = arena[node].r();
        if balance(arena, r) <= 0 {
            trace!("remove rebalance: right-right");
            return rotate_left(arena, node);
        }
        if let Some(r) = r {
            trace!("remove rebalance: right-left");
            let r = rotate_right(arena, r);
            arena[node].set_r(Some(r));
        }
        return rotate_left(arena, node);
    }

    node
}

/// Finds the node matching `target` below `root`.
pub fn find<N, C>(arena: &Arena<N>, root: Option<NodeId>, target: &N, compare: &C) -> Option<NodeId>
where
    N: HeightNode,
    C: Fn(&N, &N) -> i32 + ?Sized,
{
    let mut curr = root;
    while let Some(i) = curr {
        let pos = compare(target, &arena[i]);
        if pos == 0 {
            return Some(i);
        }
        curr = if pos < 0 { arena[i].l() } else { arena[i].r() };
    }
    None
}

/// Releases every node below `root` by repeatedly unlinking the current
/// root, so each step rebalances just like an ordinary delete.
pub fn destroy<N, F>(arena: &mut Arena<N>, root: Option<NodeId>, release: &mut F)
where
    N: HeightNode,
    F: FnMut(N),
{
    let mut root = root;
    while let Some(node) = root {
        root = unlink(arena, node, release);
    }
}

/// Copies the subtree at `src_root` into `dst` in ascending order, inserting
/// each copy with [`insert`].
///
/// Copies refused as duplicates (possible only when `dup` rewrites keys)
/// are passed to `reject`. Returns the new destination root.
pub fn duplicate<N, D, C, F>(
    src: &Arena<N>,
    src_root: Option<NodeId>,
    dst: &mut Arena<N>,
    dst_root: Option<NodeId>,
    dup: &mut D,
    compare: &C,
    reject: &mut F,
) -> Option<NodeId>
where
    N: HeightNode,
    D: FnMut(&N) -> N,
    C: Fn(&N, &N) -> i32 + ?Sized,
    F: FnMut(N),
{
    let Some(node) = src_root else {
        return dst_root;
    };

    let mut root = duplicate(src, src[node].l(), dst, dst_root, dup, compare, reject);
    match insert(dst, root, dup(&src[node]), compare) {
        Ok((new_root, _)) => root = Some(new_root),
        Err(occupied) => reject(occupied.node),
    }
    duplicate(src, src[node].r(), dst, root, dup, compare, reject)
}

fn tree_height<N: HeightNode>(arena: &Arena<N>, node: NodeId) -> i32 {
    let l = arena[node].l().map_or(0, |i| tree_height(arena, i));
    let r = arena[node].r().map_or(0, |i| tree_height(arena, i));
    1 + l.max(r)
}

/// Checks cached heights, the AVL balance bound and strict key order.
pub fn assert_avl_tree<N, C>(arena: &Arena<N>, root: Option<NodeId>, compare: &C) -> Result<(), String>
where
    N: HeightNode,
    C: Fn(&N, &N) -> i32 + ?Sized,
{
    let Some(root) = root else {
        return Ok(());
    };

    fn validate_heights<N: HeightNode>(arena: &Arena<N>, node: NodeId) -> Result<(), String> {
        let l = arena[node].l();
        let r = arena[node].r();
        if let Some(l) = l {
            validate_heights(arena, l)?;
        }
        if let Some(r) = r {
            validate_heights(arena, r)?;
        }

        let expected = tree_height(arena, node);
        let actual = arena[node].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch: expected {expected}, got {actual}"
            ));
        }
        let bf = height(arena, l) - height(arena, r);
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated: balance factor {bf}"));
        }
        Ok(())
    }

    validate_heights(arena, root)?;

    fn validate_order<'a, N, C>(
        arena: &'a Arena<N>,
        node: NodeId,
        prev: &mut Option<&'a N>,
        compare: &C,
    ) -> Result<(), String>
    where
        N: HeightNode,
        C: Fn(&N, &N) -> i32 + ?Sized,
    {
        if let Some(l) = arena[node].l() {
            validate_order(arena, l, prev, compare)?;
        }
        let curr = &arena[node];
        if let Some(p) = *prev {
            if compare(p, curr) >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        *prev = Some(curr);
        if let Some(r) = arena[node].r() {
            validate_order(arena, r, prev, compare)?;
        }
        Ok(())
    }

    validate_order(arena, root, &mut None, compare)
}

/// Debug printer; `label` renders the payload of one node.
pub fn print<N, F>(arena: &Arena<N>, node: Option<NodeId>, tab: &str, label: &F) -> String
where
    N: HeightNode,
    F: Fn(&N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.l(), &format!("{tab}  "), label);
            let right = print(arena, n.r(), &format!("{tab}  "), label);
            format!(
                "Node [h={}] {}\n{tab}← {left}\n{tab}→ {right}",
                n.height(),
                label(n)
            )
        }
    }
}
