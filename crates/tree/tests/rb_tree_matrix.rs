use sylva_tree::{Cursor, RbTree};

fn drain<T: Clone + PartialOrd>(tree: &RbTree<T>) -> Vec<T> {
    tree.iter().cloned().collect()
}

#[test]
fn insertion_sequence_stays_red_black() {
    let mut tree = RbTree::new();
    for v in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(v, true);
        tree.assert_valid().unwrap();
    }
    assert_eq!(drain(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn descending_insertions_stay_red_black() {
    let mut tree = RbTree::new();
    for v in (0..128).rev() {
        tree.insert(v, true);
        tree.assert_valid().unwrap();
    }
    assert_eq!(drain(&tree), (0..128).collect::<Vec<_>>());
}

#[test]
fn zigzag_insertions_exercise_inner_rotations() {
    // Alternating low/high values force left-right and right-left shapes.
    let mut tree = RbTree::new();
    let mut lo = 0;
    let mut hi = 1000;
    for _ in 0..64 {
        tree.insert(lo, true);
        tree.insert(hi, true);
        tree.assert_valid().unwrap();
        lo += 1;
        hi -= 1;
    }
    let seen = drain(&tree);
    assert_eq!(seen.len(), 128);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn erase_internal_node_returns_successor() {
    let mut tree: RbTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    let after = tree.erase(tree.find(&5));
    assert_eq!(tree.value(after), Some(&7));
    assert_eq!(drain(&tree), vec![1, 3, 4, 7, 8, 9]);
    tree.assert_ordered().unwrap();
}

#[test]
fn erase_keeps_bst_order_without_rebalancing() {
    let mut tree: RbTree<i32> = (0..64).collect();
    for v in (0..64).step_by(3) {
        tree.erase(tree.find(&v));
        tree.assert_ordered().unwrap();
    }
    let expected: Vec<i32> = (0..64).filter(|v| v % 3 != 0).collect();
    assert_eq!(drain(&tree), expected);
}

#[test]
fn erase_two_child_node_whose_successor_is_its_right_child() {
    // 2's successor is its own right child 3, the splice special case.
    let mut tree = RbTree::new();
    for v in [2, 1, 3] {
        tree.insert(v, true);
    }
    let after = tree.erase(tree.find(&2));
    assert_eq!(tree.value(after), Some(&3));
    assert_eq!(drain(&tree), vec![1, 3]);
    tree.assert_ordered().unwrap();
}

#[test]
fn erase_to_empty_and_rebuild() {
    let mut tree: RbTree<i32> = (0..32).collect();
    let mut at = tree.begin();
    while !at.is_end() {
        at = tree.erase(at);
        tree.assert_ordered().unwrap();
    }
    assert!(tree.is_empty());
    tree.extend([10, 20, 30]);
    tree.assert_valid().unwrap();
    assert_eq!(drain(&tree), vec![10, 20, 30]);
}

#[test]
fn cursor_survives_unrelated_mutation() {
    let mut tree: RbTree<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    let at = tree.find(&4);
    tree.erase(tree.find(&1));
    tree.insert(6, true);
    assert_eq!(tree.value(at), Some(&4));
    assert_eq!(tree.value(tree.next(at)), Some(&5));
}

#[test]
fn end_cursor_is_terminal() {
    let tree: RbTree<i32> = [1].into_iter().collect();
    assert_eq!(tree.next(Cursor::END), Cursor::END);
    assert_eq!(tree.value(Cursor::END), None);
    let last = tree.prev(Cursor::END);
    assert_eq!(tree.value(last), Some(&1));
}

#[test]
fn iter_at_resumes_mid_tree() {
    let tree: RbTree<i32> = (0..10).collect();
    let at = tree.find(&6);
    let tail: Vec<i32> = tree.iter_at(at).copied().collect();
    assert_eq!(tail, vec![6, 7, 8, 9]);
}
