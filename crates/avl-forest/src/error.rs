use std::fmt;

use thiserror::Error;

use crate::avl::AvlNode;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AvlError {
    #[error("no comparator is configured for this tree")]
    MissingComparator,
    #[error("a node with an equal key is already in the tree")]
    DuplicateKey,
    #[error("no node matches the given key")]
    NotFound,
}

/// A node the tree refused to take ownership of.
///
/// The caller owns the node again and decides how to dispose of it, e.g.
/// through [`AvlTree::node_free`](crate::AvlTree::node_free).
pub struct Rejected<T> {
    reason: AvlError,
    node: AvlNode<T>,
}

impl<T> Rejected<T> {
    pub(crate) fn new(reason: AvlError, node: AvlNode<T>) -> Self {
        Self { reason, node }
    }

    pub fn reason(&self) -> AvlError {
        self.reason
    }

    pub fn node(&self) -> &AvlNode<T> {
        &self.node
    }

    pub fn into_node(self) -> AvlNode<T> {
        self.node
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert rejected: {}", self.reason)
    }
}

impl<T> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

impl<T> From<Rejected<T>> for AvlError {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.reason
    }
}
