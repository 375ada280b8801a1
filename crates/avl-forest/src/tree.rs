use std::fmt;
use std::rc::Rc;

use generational_arena::Arena;
use tracing::{debug, instrument};

use crate::avl::util::{self as avl, Occupied, Vacant};
use crate::avl::AvlNode;
use crate::error::{AvlError, Rejected};
use crate::hooks::{default_comparator, AvlHooks};
use crate::types::NodeId;
use crate::util::{first, height, last};
use crate::walk::{walk, WalkOrder};

/// Height-balanced ordered set of caller payloads.
///
/// The tree owns its nodes in an arena and hands out [`NodeId`] handles.
/// Node construction, duplication, destruction and ordering go through the
/// tree's [`AvlHooks`].
///
/// Ownership rules:
/// - A node passed to [`insert`](Self::insert) and accepted belongs to the
///   tree until it is deleted or the tree is dropped; the destroy hook runs
///   on it exactly once.
/// - A node refused by `insert` is handed back inside [`Rejected`]; nothing
///   runs on it and disposing of it is up to the caller.
/// - A handle to a deleted node never resolves again, even if the arena slot
///   is reused.
pub struct AvlTree<T> {
    arena: Arena<AvlNode<T>>,
    root: Option<NodeId>,
    height: i32,
    hooks: AvlHooks<T>,
}

impl<T> AvlTree<T> {
    /// Empty tree with every hook unset.
    pub fn new() -> Self {
        Self::with_hooks(AvlHooks::new())
    }

    pub fn with_hooks(hooks: AvlHooks<T>) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            height: 0,
            hooks,
        }
    }

    /// Empty tree ordered by the payload's `PartialOrd`.
    pub fn with_ordering() -> Self
    where
        T: PartialOrd + 'static,
    {
        let mut tree = Self::new();
        tree.set_cmp(default_comparator::<T>);
        tree
    }

    pub fn hooks(&self) -> &AvlHooks<T> {
        &self.hooks
    }

    pub fn set_new<F>(&mut self, new_node: F)
    where
        F: Fn(T) -> AvlNode<T> + 'static,
    {
        self.hooks.new_node = Some(Rc::new(new_node));
    }

    pub fn set_dup<F>(&mut self, dup_node: F)
    where
        F: Fn(&AvlNode<T>) -> AvlNode<T> + 'static,
    {
        self.hooks.dup_node = Some(Rc::new(dup_node));
    }

    pub fn set_free<F>(&mut self, free_node: F)
    where
        F: Fn(AvlNode<T>) + 'static,
    {
        self.hooks.free_node = Some(Rc::new(free_node));
    }

    /// Replaces the comparator.
    ///
    /// Swapping in a different order on a non-empty tree leaves the existing
    /// layout sorted by the old one; later operations will misbehave.
    pub fn set_cmp<F>(&mut self, cmp_node: F)
    where
        F: Fn(&AvlNode<T>, &AvlNode<T>) -> i32 + 'static,
    {
        self.hooks.cmp_node = Some(Rc::new(cmp_node));
    }

    pub fn node_new(&self, value: T) -> AvlNode<T> {
        self.hooks.node_new(value)
    }

    pub fn node_dup(&self, node: &AvlNode<T>) -> AvlNode<T>
    where
        T: Clone,
    {
        self.hooks.node_dup(node)
    }

    pub fn node_free(&self, node: AvlNode<T>) {
        self.hooks.node_free(node)
    }

    pub fn node_cmp(&self, a: &AvlNode<T>, b: &AvlNode<T>) -> Result<i32, AvlError> {
        self.hooks.node_cmp(a, b)
    }

    /// Moves `item` into the tree.
    ///
    /// Returns the handle of the stored node. Fails with
    /// [`AvlError::DuplicateKey`] when an equal key is present (the existing
    /// node is left alone) and with [`AvlError::MissingComparator`] when no
    /// comparator is configured. On failure `item` comes back in the error.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, item: AvlNode<T>) -> Result<NodeId, Rejected<T>> {
        let cmp = match self.hooks.comparator() {
            Ok(cmp) => cmp,
            Err(err) => {
                debug!("insert refused: no comparator");
                return Err(Rejected::new(err, item));
            }
        };

        match avl::insert(&mut self.arena, self.root, item, &*cmp) {
            Ok((root, inserted)) => {
                self.root = Some(root);
                self.height = height(&self.arena, self.root);
                Ok(inserted)
            }
            Err(Occupied { existing, node }) => {
                debug!(?existing, "insert refused: duplicate key");
                Err(Rejected::new(AvlError::DuplicateKey, node))
            }
        }
    }

    /// Removes the node whose key matches `target` and runs the destroy hook
    /// on it. `target` is only a key probe.
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, target: &AvlNode<T>) -> Result<(), AvlError> {
        let cmp = self.hooks.comparator()?;
        let hooks = &self.hooks;
        let mut release = |node: AvlNode<T>| hooks.node_free(node);

        match avl::remove(&mut self.arena, self.root, target, &*cmp, &mut release) {
            Ok(root) => {
                self.root = root;
                self.height = height(&self.arena, self.root);
                Ok(())
            }
            Err(Vacant) => {
                debug!("delete refused: key not found");
                Err(AvlError::NotFound)
            }
        }
    }

    /// Looks up the node whose key matches `target`.
    ///
    /// A missing key is `Ok(None)`; only a missing comparator is an error.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, target: &AvlNode<T>) -> Result<Option<NodeId>, AvlError> {
        let cmp = self.hooks.comparator()?;
        Ok(avl::find(&self.arena, self.root, target, &*cmp))
    }

    /// Calls `action` on every node in the given order.
    pub fn walk<'a, F>(&'a self, order: WalkOrder, mut action: F)
    where
        F: FnMut(NodeId, &'a AvlNode<T>),
    {
        walk(&self.arena, self.root, order, &mut action);
    }

    /// Payloads in the given order.
    pub fn values<'a>(&'a self, order: WalkOrder) -> Vec<&'a T> {
        let mut out = Vec::with_capacity(self.arena.len());
        walk(&self.arena, self.root, order, &mut |_, n: &'a AvlNode<T>| {
            out.push(&n.value)
        });
        out
    }

    /// Releases every node through the destroy hook, then the tree itself.
    pub fn destroy(self) {
        drop(self);
    }

    /// Releases every node through the destroy hook, leaving an empty tree
    /// with the same hooks.
    #[instrument(level = "trace", skip_all)]
    pub fn clear(&mut self) {
        let hooks = &self.hooks;
        let mut release = |node: AvlNode<T>| hooks.node_free(node);
        avl::destroy(&mut self.arena, self.root.take(), &mut release);
        self.height = 0;
    }

    pub fn node(&self, id: NodeId) -> Option<&AvlNode<T>> {
        self.arena.get(id)
    }

    /// Mutable access to a stored node.
    ///
    /// Changing the part of the payload the comparator looks at breaks the
    /// ordering of the tree.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut AvlNode<T>> {
        self.arena.get_mut(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Cached height of the whole tree; 0 when empty.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn first(&self) -> Option<NodeId> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<NodeId> {
        last(&self.arena, self.root)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        if self.height != height(&self.arena, self.root) {
            return Err(format!(
                "Tree height mismatch: cached {}, root {}",
                self.height,
                height(&self.arena, self.root)
            ));
        }
        if crate::util::size(&self.arena, self.root) != self.arena.len() {
            return Err("Arena holds unreachable nodes".to_string());
        }
        match &self.hooks.cmp_node {
            Some(cmp) => avl::assert_avl_tree(&self.arena, self.root, &**cmp),
            None if self.root.is_none() => Ok(()),
            None => Err(AvlError::MissingComparator.to_string()),
        }
    }

    pub fn print(&self, tab: &str) -> String
    where
        T: fmt::Debug,
    {
        avl::print(&self.arena, self.root, tab, &|n: &AvlNode<T>| {
            format!("{:?}", n.value)
        })
    }
}

impl<T: Clone> AvlTree<T> {
    /// Deep copy with the same hooks.
    ///
    /// Source nodes are visited in ascending order, copied with the duplicate
    /// hook and inserted with the balancing insert, so the copy holds the same
    /// keys but need not have the same shape.
    #[instrument(level = "trace", skip_all)]
    pub fn duplicate(&self) -> Result<Self, AvlError> {
        let mut copy = Self::with_hooks(self.hooks.clone());
        if self.root.is_none() {
            return Ok(copy);
        }

        let cmp = self.hooks.comparator()?;
        let hooks = &self.hooks;
        let mut dup = |node: &AvlNode<T>| hooks.node_dup(node);
        let mut reject = |node: AvlNode<T>| {
            debug!("duplicate dropped a copy with a repeated key");
            hooks.node_free(node)
        };
        copy.root = avl::duplicate(
            &self.arena,
            self.root,
            &mut copy.arena,
            None,
            &mut dup,
            &*cmp,
            &mut reject,
        );
        copy.height = height(&copy.arena, copy.root);
        Ok(copy)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("root", &self.root)
            .field("height", &self.height)
            .field("size", &self.size())
            .field("hooks", &self.hooks)
            .finish()
    }
}
