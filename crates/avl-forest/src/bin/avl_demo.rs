//! `avl-demo`: build an integer AVL tree and print its traversals.
//!
//! Usage:
//!   avl-demo [key ...]
//!
//! Without arguments the keys `10 20 30 40 50 25 49 16 26 32` are used.
//! After printing every traversal order the demo looks up and deletes 16, 25
//! and 40. Set `RUST_LOG=trace` to see rebalancing decisions.

use avl_forest::{AvlNode, AvlTree, WalkOrder};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_KEYS: [i64; 10] = [10, 20, 30, 40, 50, 25, 49, 16, 26, 32];

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter),
    );
    if let Err(e) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {e}");
    }
}

fn compare(a: &AvlNode<i64>, b: &AvlNode<i64>) -> i32 {
    a.value.cmp(&b.value) as i32
}

fn print_walk(tree: &AvlTree<i64>, order: WalkOrder, title: &str) {
    println!("{title}");
    tree.walk(order, |_, n| print!("{} ", n.value));
    println!();
}

fn find_and_delete(tree: &mut AvlTree<i64>, key: i64) {
    let probe = tree.node_new(key);
    report_find(tree, &probe);

    match tree.delete(&probe) {
        Ok(()) => println!("delete({key}) succeeded"),
        Err(e) => println!("delete({key}) failed: {e}"),
    }

    print_walk(
        tree,
        WalkOrder::Forward,
        &format!("Forward traversal after delete({key}) is"),
    );
    report_find(tree, &probe);
    tree.node_free(probe);
}

fn report_find(tree: &AvlTree<i64>, probe: &AvlNode<i64>) {
    let key = probe.value;
    match tree.find(probe) {
        Ok(Some(id)) => {
            let value = tree.node(id).map(|n| n.value);
            println!("{key} found, node value={value:?}");
        }
        Ok(None) => println!("{key} not found"),
        Err(e) => println!("find({key}) failed: {e}"),
    }
}

fn main() {
    init_logging();

    let mut keys = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.parse::<i64>() {
            Ok(k) => keys.push(k),
            Err(e) => {
                eprintln!("invalid key {arg:?}: {e}");
                std::process::exit(1);
            }
        }
    }
    if keys.is_empty() {
        keys.extend(DEFAULT_KEYS);
    }

    let mut tree = AvlTree::new();
    tree.set_cmp(compare);

    for k in keys {
        let node = tree.node_new(k);
        if let Err(rejected) = tree.insert(node) {
            eprintln!("skipping {k}: {rejected}");
            tree.node_free(rejected.into_node());
        }
    }

    print_walk(&tree, WalkOrder::PreOrder, "Preorder traversal of the constructed AVL tree is");
    print_walk(&tree, WalkOrder::Forward, "Forward order traversal of the constructed AVL tree is");
    print_walk(&tree, WalkOrder::Reverse, "Reverse order traversal of the constructed AVL tree is");
    print_walk(&tree, WalkOrder::PostOrder, "Postorder traversal of the constructed AVL tree is");
    print_walk(&tree, WalkOrder::TreeOrder, "Tree order traversal of the constructed AVL tree is");

    for key in [16, 25, 40] {
        find_and_delete(&mut tree, key);
    }

    print_walk(&tree, WalkOrder::TreeOrder, "Tree order traversal after deletions is");

    tree.destroy();
}
