//! Long randomized churn against `BTreeMap` as the oracle, seeded for
//! reproducibility.

use std::collections::BTreeMap;

use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use sylva_tree::OrderedMap;

#[test]
fn map_matches_btreemap_under_churn() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed_cafe);
    let mut map: OrderedMap<u16, u64> = OrderedMap::new();
    let mut oracle: BTreeMap<u16, u64> = BTreeMap::new();

    for round in 0..20_000u64 {
        let key = rng.gen_range(0..512u16);
        match rng.gen_range(0..4u8) {
            0 | 1 => {
                let inserted = map.insert(key, round);
                let expected = !oracle.contains_key(&key);
                oracle.entry(key).or_insert(round);
                assert_eq!(inserted, expected, "insert disagreed on key {key}");
            }
            2 => {
                let removed = map.erase_key(&key);
                let expected = usize::from(oracle.remove(&key).is_some());
                assert_eq!(removed, expected, "erase disagreed on key {key}");
            }
            _ => {
                assert_eq!(map.get(&key), oracle.get(&key), "get disagreed on key {key}");
            }
        }
        assert_eq!(map.len(), oracle.len());
    }

    let seen: Vec<(u16, u64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u16, u64)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn tree_survives_interleaved_insert_erase_sweeps() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut tree: sylva_tree::RbTree<u32> = sylva_tree::RbTree::new();

    for sweep in 0..20 {
        for _ in 0..500 {
            tree.insert(rng.gen_range(0..1024), false);
        }
        for _ in 0..400 {
            let target = rng.gen_range(0..1024);
            let at = tree.find(&target);
            tree.erase(at);
        }
        tree.assert_ordered()
            .unwrap_or_else(|e| panic!("sweep {sweep}: {e}"));
    }
}
