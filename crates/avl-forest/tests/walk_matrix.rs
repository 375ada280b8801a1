mod common;

use avl_forest::{HeightNode, WalkOrder};
use common::{int_tree, keys, probe, SCENARIO};

#[test]
fn scenario_walk_orders_matrix() {
    let tree = int_tree(&SCENARIO);

    assert_eq!(
        keys(&tree, WalkOrder::PreOrder),
        vec![30, 20, 10, 16, 25, 26, 49, 40, 32, 50]
    );
    assert_eq!(
        keys(&tree, WalkOrder::Forward),
        vec![10, 16, 20, 25, 26, 30, 32, 40, 49, 50]
    );
    assert_eq!(
        keys(&tree, WalkOrder::Reverse),
        vec![50, 49, 40, 32, 30, 26, 25, 20, 16, 10]
    );
    assert_eq!(
        keys(&tree, WalkOrder::PostOrder),
        vec![16, 10, 26, 25, 20, 32, 40, 50, 49, 30]
    );
    assert_eq!(
        keys(&tree, WalkOrder::TreeOrder),
        vec![30, 20, 49, 10, 25, 40, 16, 26, 32, 50]
    );
}

#[test]
fn tree_order_after_deletes_matrix() {
    let mut tree = int_tree(&SCENARIO);
    for k in [16, 25, 40] {
        tree.delete(&probe(k)).unwrap();
    }
    assert_eq!(
        keys(&tree, WalkOrder::TreeOrder),
        vec![30, 20, 49, 10, 26, 32, 50]
    );
    assert_eq!(
        keys(&tree, WalkOrder::PreOrder),
        vec![30, 20, 10, 26, 49, 32, 50]
    );
}

#[test]
fn reverse_mirrors_forward_matrix() {
    let tree = int_tree(&[8, 3, 11, 1, 5, 9, 14, 4, 6, 13, 15, 2]);
    let mut forward = keys(&tree, WalkOrder::Forward);
    let reverse = keys(&tree, WalkOrder::Reverse);
    assert!(forward.windows(2).all(|w| w[0] < w[1]));
    forward.reverse();
    assert_eq!(forward, reverse);
}

#[test]
fn every_order_visits_every_node_once_matrix() {
    let tree = int_tree(&SCENARIO);
    for order in WalkOrder::ALL {
        let mut seen = Vec::new();
        tree.walk(order, |id, n| {
            assert_eq!(tree.node(id).map(|m| m.value), Some(n.value));
            seen.push(n.value);
        });
        seen.sort();
        let mut expected = SCENARIO.to_vec();
        expected.sort();
        assert_eq!(seen, expected, "{order:?}");
    }
}

#[test]
fn tree_order_is_root_first_by_height_matrix() {
    let tree = int_tree(&(1..=31).collect::<Vec<_>>());
    let mut heights = Vec::new();
    tree.walk(WalkOrder::TreeOrder, |_, n| heights.push(n.height()));
    assert!(heights.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(heights.first(), Some(&tree.height()));
    assert_eq!(
        tree.values(WalkOrder::TreeOrder).first().copied(),
        tree.root().and_then(|r| tree.node(r)).map(|n| &n.value)
    );
}

#[test]
fn walk_on_empty_tree_matrix() {
    let tree = int_tree(&[]);
    for order in WalkOrder::ALL {
        let mut calls = 0;
        tree.walk(order, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }
}
