use proptest::prelude::*;

use sylva_tree::{OrderedSet, RbTree};

proptest! {
    #[test]
    fn insertions_preserve_red_black_invariants(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut tree = RbTree::new();
        for v in values {
            tree.insert(v, false);
        }
        tree.assert_valid().unwrap();
    }

    #[test]
    fn iteration_is_sorted_and_complete(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let tree: RbTree<i16> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort();
        let seen: Vec<i16> = tree.iter().copied().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn set_agrees_with_sorted_dedup(values in prop::collection::vec(any::<i16>(), 0..200)) {
        let set: OrderedSet<i16> = values.iter().copied().collect();
        let mut expected = values;
        expected.sort();
        expected.dedup();
        let seen: Vec<i16> = set.iter().copied().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn erase_keeps_order(ops in prop::collection::vec((any::<i16>(), any::<bool>()), 0..200)) {
        let mut tree = RbTree::new();
        let mut model = std::collections::BTreeMap::new();
        for (v, remove) in ops {
            if remove {
                let at = tree.find(&v);
                if !at.is_end() {
                    tree.erase(at);
                    match model.get_mut(&v) {
                        Some(n) if *n > 1 => *n -= 1,
                        _ => { model.remove(&v); }
                    }
                }
            } else {
                tree.insert(v, false);
                *model.entry(v).or_insert(0u32) += 1;
            }
            tree.assert_ordered().unwrap();
        }
        let expected: Vec<i16> = model
            .iter()
            .flat_map(|(&v, &n)| std::iter::repeat(v).take(n as usize))
            .collect();
        let seen: Vec<i16> = tree.iter().copied().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn find_matches_linear_scan(values in prop::collection::vec(any::<i8>(), 0..60), probe: i8) {
        let tree: RbTree<i8> = values.iter().copied().collect();
        prop_assert_eq!(tree.contains(&probe), values.contains(&probe));
    }
}
