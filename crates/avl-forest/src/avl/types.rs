use crate::types::{HeightNode, Node, NodeId};

/// One stored element of an [`AvlTree`](crate::AvlTree).
///
/// `value` is the caller's payload. The tree only looks at it through the
/// compare, duplicate and destroy hooks.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub(crate) l: Option<NodeId>,
    pub(crate) r: Option<NodeId>,
    pub(crate) height: i32,
    pub value: T,
}

impl<T> AvlNode<T> {
    /// Creates a detached leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            l: None,
            r: None,
            height: 1,
            value,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<T> for AvlNode<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Node for AvlNode<T> {
    fn l(&self) -> Option<NodeId> {
        self.l
    }

    fn r(&self) -> Option<NodeId> {
        self.r
    }

    fn set_l(&mut self, v: Option<NodeId>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<NodeId>) {
        self.r = v;
    }
}

impl<T> HeightNode for AvlNode<T> {
    fn height(&self) -> i32 {
        self.height
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}
