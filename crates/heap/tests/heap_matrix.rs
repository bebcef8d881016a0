use sylva_heap::PriorityQueue;

#[test]
fn heapify_from_ranges_matrix() {
    for n in [0usize, 1, 2, 3, 15, 16, 17, 100] {
        let mut q: PriorityQueue<usize> = (0..n).collect();
        assert_eq!(q.len(), n);
        for expected in (0..n).rev() {
            assert_eq!(q.pop(), Some(expected));
        }
        assert_eq!(q.pop(), None);
    }
}

#[test]
fn duplicates_all_come_out() {
    let mut q: PriorityQueue<i32> = [5, 5, 5, 1, 1, 9].into_iter().collect();
    let mut drained = Vec::new();
    while let Some(x) = q.pop() {
        drained.push(x);
    }
    assert_eq!(drained, vec![9, 5, 5, 5, 1, 1]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pop_sequence_is_sorted_descending(values in proptest::collection::vec(any::<i64>(), 0..256)) {
            let mut q: PriorityQueue<i64> = values.iter().copied().collect();
            let mut drained = Vec::with_capacity(values.len());
            while let Some(x) = q.pop() {
                drained.push(x);
            }
            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(drained, expected);
        }

        #[test]
        fn top_is_maximum(values in proptest::collection::vec(any::<i32>(), 1..128)) {
            let q: PriorityQueue<i32> = values.iter().copied().collect();
            prop_assert_eq!(q.top().ok(), values.iter().max());
        }
    }
}
