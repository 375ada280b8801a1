//! Arena-backed AVL tree engine with pluggable node hooks.
//!
//! An [`AvlTree`] keeps a height-balanced ordered set of caller payloads.
//! How nodes are built, copied, released and ordered is decided per tree by
//! four optional hooks (see [`AvlHooks`]).
//!
//! Nodes live in a generational arena owned by the tree; children are
//! `Option<NodeId>` handles rather than pointers, and there are no parent
//! links. Every recursive algorithm takes a subtree root and returns the new
//! root, rebalancing while the recursion unwinds.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`HeightNode`] traits, [`NodeId`] |
//! [`util`] | height, balance factor, rotations |
//! [`avl`] | [`AvlNode`]; recursive insert / remove / find / destroy / duplicate |
//! [`walk`] | the five traversal orders |
//! [`hooks`] | construct / duplicate / destroy / compare hooks |
//! [`tree`] | the [`AvlTree`] facade |
//!
//! # Example
//!
//! ```
//! use avl_forest::{AvlTree, WalkOrder};
//!
//! let mut tree = AvlTree::with_ordering();
//! for k in [10, 20, 30] {
//!     let node = tree.node_new(k);
//!     tree.insert(node).unwrap();
//! }
//! assert_eq!(tree.values(WalkOrder::Forward), vec![&10, &20, &30]);
//! assert_eq!(tree.height(), 2);
//! ```

pub mod avl;
pub mod error;
pub mod hooks;
pub mod tree;
pub mod types;
pub mod util;
pub mod walk;

pub use avl::AvlNode;
pub use error::{AvlError, Rejected};
pub use hooks::{default_comparator, AvlHooks};
pub use tree::AvlTree;
pub use types::{HeightNode, Node, NodeId};
pub use walk::WalkOrder;
