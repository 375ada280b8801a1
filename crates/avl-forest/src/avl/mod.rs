//! AVL node type and the recursive algorithms that balance it.

pub mod types;
pub mod util;

pub use types::AvlNode;
pub use util::{Occupied, Vacant};
