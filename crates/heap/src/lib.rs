//! Binary max-heap priority queue.
//!
//! Elements live densely in a [`sylva_vec::Vector`] interpreted with 1-based
//! heap addressing: parent at `i / 2`, children at `2i` and `2i + 1`. The
//! comparator returns negative/zero/positive; `compare(a, b) < 0` means `a`
//! orders below `b`, so the default comparator yields a max-heap. Supplying a
//! reversed comparator yields a min-heap.

use sylva_vec::{OutOfRange, Vector};

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

pub struct PriorityQueue<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    container: Vector<T>,
    compare: C,
}

impl<T: PartialOrd> PriorityQueue<T, fn(&T, &T) -> i32> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T, fn(&T, &T) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(compare: C) -> Self {
        Self {
            container: Vector::new(),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// The element at the root of the heap.
    pub fn top(&self) -> Result<&T, OutOfRange> {
        self.container
            .front()
            .map_err(|_| OutOfRange("top of empty priority queue"))
    }

    /// Appends, then repairs heap order along the parent path: every ancestor
    /// of the new leaf is percolated down until nothing moves.
    pub fn push(&mut self, value: T) {
        self.container.push(value);
        let mut index = self.container.len() / 2;
        while index >= 1 && self.percolate_down(index) {
            index /= 2;
        }
    }

    /// Removes and returns the root, or `None` on an empty queue.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.container.len() - 1;
        self.container.as_mut_slice().swap(0, last);
        let out = self.container.pop();
        self.percolate_down(1);
        out
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.container.swap(&mut other.container);
        std::mem::swap(&mut self.compare, &mut other.compare);
    }

    pub fn reserve(&mut self, n: usize) {
        self.container.reserve(n);
    }

    /// The node at 1-based `index_heap` may be out of heap order; sift it
    /// toward the leaves, swapping with the larger child while that child
    /// compares greater. Returns true if anything moved.
    fn percolate_down(&mut self, index_heap: usize) -> bool {
        let size = self.container.len();
        let index_left = index_heap * 2;
        let index_right = index_left + 1;

        let index_bigger = if index_right <= size
            && (self.compare)(&self.container[index_left - 1], &self.container[index_right - 1])
                < 0
        {
            index_right
        } else {
            index_left
        };

        if index_bigger <= size
            && (self.compare)(&self.container[index_heap - 1], &self.container[index_bigger - 1])
                < 0
        {
            self.container
                .as_mut_slice()
                .swap(index_heap - 1, index_bigger - 1);
            self.percolate_down(index_bigger);
            return true;
        }
        false
    }
}

impl<T: Clone, C: Clone + Fn(&T, &T) -> i32> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for PriorityQueue<T, fn(&T, &T) -> i32> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, C: Fn(&T, &T) -> i32> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len() + lower);
        for value in iter {
            self.push(value);
        }
    }
}
