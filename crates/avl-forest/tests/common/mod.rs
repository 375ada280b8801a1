#![allow(dead_code)]

use std::sync::Once;

use avl_forest::{AvlNode, AvlTree, WalkOrder};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a stderr subscriber once per test binary; `RUST_LOG` picks the
/// level.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );
        if tracing::dispatcher::has_been_set() {
            return;
        }
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    });
}

pub const SCENARIO: [i32; 10] = [10, 20, 30, 40, 50, 25, 49, 16, 26, 32];

pub fn cmp_i32(a: &AvlNode<i32>, b: &AvlNode<i32>) -> i32 {
    a.value.cmp(&b.value) as i32
}

pub fn int_tree(keys: &[i32]) -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    tree.set_cmp(cmp_i32);
    for &k in keys {
        let node = tree.node_new(k);
        tree.insert(node).unwrap();
    }
    tree
}

pub fn keys<T: Clone>(tree: &AvlTree<T>, order: WalkOrder) -> Vec<T> {
    tree.values(order).into_iter().cloned().collect()
}

pub fn probe(k: i32) -> AvlNode<i32> {
    AvlNode::new(k)
}
