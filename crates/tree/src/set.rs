use std::fmt;

use crate::tree::{Cursor, Iter, RbTree};

/// Ordered set of unique values, a thin veneer over [`RbTree`] with
/// uniqueness always enforced.
pub struct OrderedSet<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    tree: RbTree<T, C>,
}

impl<T: PartialOrd> OrderedSet<T> {
    pub fn new() -> Self {
        OrderedSet { tree: RbTree::new() }
    }
}

impl<T, C> OrderedSet<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(compare: C) -> Self {
        OrderedSet {
            tree: RbTree::with_comparator(compare),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Inserts `value` unless an equivalent value is already present. The
    /// cursor addresses the resident value either way; the flag says
    /// whether an insertion happened.
    pub fn insert(&mut self, value: T) -> (Cursor, bool) {
        self.tree.insert(value, true)
    }

    pub fn find(&self, target: &T) -> Cursor {
        self.tree.find(target)
    }

    pub fn contains(&self, target: &T) -> bool {
        self.tree.contains(target)
    }

    /// Removes the value behind `at`, returning the successor position.
    pub fn erase(&mut self, at: Cursor) -> Cursor {
        self.tree.erase(at)
    }

    /// Removes `target` if present; returns how many values went (0 or 1).
    pub fn erase_value(&mut self, target: &T) -> usize {
        self.tree.erase_value(target)
    }

    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    pub fn next(&self, at: Cursor) -> Cursor {
        self.tree.next(at)
    }

    pub fn prev(&self, at: Cursor) -> Cursor {
        self.tree.prev(at)
    }

    pub fn value(&self, at: Cursor) -> Option<&T> {
        self.tree.value(at)
    }

    pub fn iter(&self) -> Iter<'_, T, C> {
        self.tree.iter()
    }
}

impl<T: PartialOrd> Default for OrderedSet<T> {
    fn default() -> Self {
        OrderedSet::new()
    }
}

impl<T: Clone, C: Clone + Fn(&T, &T) -> i32> Clone for OrderedSet<T, C> {
    fn clone(&self) -> Self {
        OrderedSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug, C: Fn(&T, &T) -> i32> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialOrd> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Fn(&T, &T) -> i32> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C: Fn(&T, &T) -> i32> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_rejected() {
        let mut set = OrderedSet::new();
        let (first, fresh) = set.insert(7);
        assert!(fresh);
        let (again, fresh) = set.insert(7);
        assert!(!fresh);
        assert_eq!(first, again);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iterates_sorted() {
        let set: OrderedSet<i32> = [9, 1, 5, 3].into_iter().collect();
        let seen: Vec<i32> = set.iter().copied().collect();
        assert_eq!(seen, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_erase_value() {
        let mut set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(set.erase_value(&2), 1);
        assert_eq!(set.erase_value(&2), 0);
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 2);
    }
}
