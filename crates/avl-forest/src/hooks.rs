//! Per-tree node lifecycle and comparison hooks.
//!
//! Each hook is optional. When a hook is unset the node helpers fall back to
//! a minimal default: build a bare leaf, clone the payload, drop the node.
//! There is no default comparator; operations that must compare keys fail
//! with [`AvlError::MissingComparator`] instead.

use std::fmt;
use std::rc::Rc;

use crate::avl::AvlNode;
use crate::error::AvlError;
use crate::types::Comparator;

/// Builds a node around a payload.
pub type NewNode<T> = Rc<dyn Fn(T) -> AvlNode<T>>;
/// Produces an independent copy of a node.
pub type DupNode<T> = Rc<dyn Fn(&AvlNode<T>) -> AvlNode<T>>;
/// Releases a node and whatever its payload owns.
pub type FreeNode<T> = Rc<dyn Fn(AvlNode<T>)>;
/// Total order over node payloads: negative, zero or positive.
pub type CmpNode<T> = Rc<Comparator<AvlNode<T>>>;

pub struct AvlHooks<T> {
    pub new_node: Option<NewNode<T>>,
    pub dup_node: Option<DupNode<T>>,
    pub free_node: Option<FreeNode<T>>,
    pub cmp_node: Option<CmpNode<T>>,
}

impl<T> AvlHooks<T> {
    pub fn new() -> Self {
        Self {
            new_node: None,
            dup_node: None,
            free_node: None,
            cmp_node: None,
        }
    }

    pub fn node_new(&self, value: T) -> AvlNode<T> {
        match &self.new_node {
            Some(new_node) => new_node(value),
            None => AvlNode::new(value),
        }
    }

    /// Copies `node` through the duplicate hook, or shallow-copies its payload
    /// into a fresh leaf.
    pub fn node_dup(&self, node: &AvlNode<T>) -> AvlNode<T>
    where
        T: Clone,
    {
        match &self.dup_node {
            Some(dup_node) => dup_node(node),
            None => AvlNode::new(node.value.clone()),
        }
    }

    pub fn node_free(&self, node: AvlNode<T>) {
        match &self.free_node {
            Some(free_node) => free_node(node),
            None => drop(node),
        }
    }

    pub fn node_cmp(&self, a: &AvlNode<T>, b: &AvlNode<T>) -> Result<i32, AvlError> {
        match &self.cmp_node {
            Some(cmp_node) => Ok(cmp_node(a, b)),
            None => Err(AvlError::MissingComparator),
        }
    }

    pub(crate) fn comparator(&self) -> Result<CmpNode<T>, AvlError> {
        self.cmp_node.clone().ok_or(AvlError::MissingComparator)
    }
}

impl<T> Default for AvlHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AvlHooks<T> {
    fn clone(&self) -> Self {
        Self {
            new_node: self.new_node.clone(),
            dup_node: self.dup_node.clone(),
            free_node: self.free_node.clone(),
            cmp_node: self.cmp_node.clone(),
        }
    }
}

impl<T> fmt::Debug for AvlHooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlHooks")
            .field("new_node", &self.new_node.is_some())
            .field("dup_node", &self.dup_node.is_some())
            .field("free_node", &self.free_node.is_some())
            .field("cmp_node", &self.cmp_node.is_some())
            .finish()
    }
}

/// Orders nodes by payload using `PartialOrd`.
pub fn default_comparator<T: PartialOrd>(a: &AvlNode<T>, b: &AvlNode<T>) -> i32 {
    if a.value == b.value {
        0
    } else if a.value < b.value {
        -1
    } else {
        1
    }
}
