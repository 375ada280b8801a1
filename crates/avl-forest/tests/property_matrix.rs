mod common;

use std::collections::BTreeSet;

use avl_forest::{AvlError, WalkOrder};
use common::{int_tree, keys, probe};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Delete(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-50i32..50).prop_map(Op::Insert),
        2 => (-50i32..50).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn invariant_holds_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut tree = int_tree(&[]);
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    let res = tree.insert(probe(k));
                    prop_assert_eq!(res.is_ok(), model.insert(k));
                }
                Op::Delete(k) => {
                    let res = tree.delete(&probe(k));
                    if model.remove(&k) {
                        prop_assert_eq!(res, Ok(()));
                    } else {
                        prop_assert_eq!(res, Err(AvlError::NotFound));
                    }
                }
            }
            prop_assert!(tree.assert_valid().is_ok(), "{:?}", tree.assert_valid());
        }

        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(keys(&tree, WalkOrder::Forward), expected.clone());
        let mut reversed = expected;
        reversed.reverse();
        prop_assert_eq!(keys(&tree, WalkOrder::Reverse), reversed);
        prop_assert_eq!(tree.size(), model.len());
    }

    #[test]
    fn insert_delete_inverse(base in prop::collection::btree_set(0i32..1000, 0..64), fresh in 1000i32..2000) {
        let base: Vec<i32> = base.into_iter().collect();
        let mut tree = int_tree(&base);

        tree.insert(probe(fresh)).unwrap();
        tree.delete(&probe(fresh)).unwrap();

        prop_assert_eq!(keys(&tree, WalkOrder::Forward), base);
        prop_assert!(tree.assert_valid().is_ok());
    }

    #[test]
    fn duplicate_matches_source(input in prop::collection::vec(-500i32..500, 0..100)) {
        let mut tree = int_tree(&[]);
        for k in input {
            let _ = tree.insert(probe(k));
        }
        let copy = tree.duplicate().unwrap();

        prop_assert_eq!(keys(&copy, WalkOrder::Forward), keys(&tree, WalkOrder::Forward));
        prop_assert!(copy.assert_valid().is_ok());
        prop_assert_eq!(copy.size(), tree.size());
    }

    #[test]
    fn height_is_logarithmic(n in 1usize..500) {
        let input: Vec<i32> = (0..n as i32).collect();
        let tree = int_tree(&input);
        let bound = 1.45 * ((n + 2) as f64).log2();
        prop_assert!((tree.height() as f64) <= bound);
    }
}

#[test]
fn seeded_fuzz_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed);
    let mut tree = int_tree(&[]);
    let mut model = BTreeSet::new();

    for round in 0..5_000 {
        let k = rng.gen_range(0..400);
        if rng.gen_bool(0.55) {
            assert_eq!(tree.insert(probe(k)).is_ok(), model.insert(k));
        } else {
            assert_eq!(tree.delete(&probe(k)).is_ok(), model.remove(&k));
        }
        if round % 50 == 0 {
            tree.assert_valid().unwrap();
        }
    }

    tree.assert_valid().unwrap();
    assert_eq!(
        keys(&tree, WalkOrder::Forward),
        model.iter().copied().collect::<Vec<_>>()
    );
    for k in 0..400 {
        assert_eq!(tree.find(&probe(k)).unwrap().is_some(), model.contains(&k));
    }
}
