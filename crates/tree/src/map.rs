use std::fmt;

use thiserror::Error;

use crate::tree::{default_comparator, Cursor, Iter, RbTree};

/// Checked key lookup failed: the key is not in the map.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid map key")]
pub struct KeyError;

/// One key/value pairing stored in the backing tree. Only the key
/// participates in ordering, so the value side stays freely mutable.
#[derive(Clone, Debug)]
struct MapEntry<K, V> {
    key: K,
    value: V,
}

type EntryCmp<K, V> = fn(&MapEntry<K, V>, &MapEntry<K, V>) -> i32;

fn entry_comparator<K: PartialOrd, V>(a: &MapEntry<K, V>, b: &MapEntry<K, V>) -> i32 {
    default_comparator(&a.key, &b.key)
}

/// Ordered map with unique keys, backed by the same red-black tree as
/// [`OrderedSet`](crate::OrderedSet). Entries are compared on the key only.
pub struct OrderedMap<K, V> {
    tree: RbTree<MapEntry<K, V>, EntryCmp<K, V>>,
}

impl<K: PartialOrd, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        OrderedMap {
            tree: RbTree::with_comparator(entry_comparator::<K, V>),
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

    /// Inserts the pairing unless the key is already present; the resident
    /// value is never overwritten. Returns whether an insertion happened.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(MapEntry { key, value }, true).1
    }

    pub fn find(&self, key: &K) -> Cursor {
        self.tree
            .find_by(|entry| default_comparator(key, &entry.key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        !self.find(key).is_end()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.value(self.find(key)).map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let at = self.find(key);
        self.tree.value_mut(at).map(|entry| &mut entry.value)
    }

    /// Checked lookup: absent keys are an error, not an insertion point.
    pub fn at(&self, key: &K) -> Result<&V, KeyError> {
        self.get(key).ok_or(KeyError)
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, KeyError> {
        self.get_mut(key).ok_or(KeyError)
    }

    /// Removes the entry behind `at`, returning the successor position.
    pub fn erase(&mut self, at: Cursor) -> Cursor {
        self.tree.erase(at)
    }

    /// Removes the entry for `key` if present; returns how many entries
    /// went (0 or 1).
    pub fn erase_key(&mut self, key: &K) -> usize {
        let at = self.find(key);
        if at.is_end() {
            return 0;
        }
        self.erase(at);
        1
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

    pub fn key(&self, at: Cursor) -> Option<&K> {
        self.tree.value(at).map(|entry| &entry.key)
    }

    pub fn value(&self, at: Cursor) -> Option<&V> {
        self.tree.value(at).map(|entry| &entry.value)
    }

    pub fn iter(&self) -> MapIter<'_, K, V> {
        MapIter {
            inner: self.tree.iter(),
        }
    }
}

impl<K: PartialOrd, V: Default> OrderedMap<K, V> {
    /// Subscript access: returns the value for `key`, inserting a default
    /// value first when the key is absent.
    pub fn index_or_default(&mut self, key: K) -> &mut V {
        let (at, _) = self.tree.insert(
            MapEntry {
                key,
                value: V::default(),
            },
            true,
        );
        &mut self
            .tree
            .value_mut(at)
            .expect("freshly resolved cursor is live")
            .value
    }
}

impl<K: PartialOrd, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap {
            tree: self.tree.clone(),
        }
    }
}

impl<K: PartialOrd + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialOrd, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialOrd, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

pub struct MapIter<'a, K, V> {
    inner: Iter<'a, MapEntry<K, V>, EntryCmp<K, V>>,
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }
}

impl<'a, K: PartialOrd, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_does_not_overwrite() {
        let mut map = OrderedMap::new();
        assert!(map.insert("a", 1));
        assert!(!map.insert("a", 99));
        assert_eq!(map.get(&"a"), Some(&1));
    }

    #[test]
    fn test_index_or_default_creates_then_reuses() {
        let mut map: OrderedMap<&str, i32> = OrderedMap::new();
        *map.index_or_default("hits") += 1;
        *map.index_or_default("hits") += 1;
        assert_eq!(map.get(&"hits"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_at_reports_missing_keys() {
        let mut map: OrderedMap<i32, i32> = [(1, 10)].into_iter().collect();
        assert_eq!(map.at(&1), Ok(&10));
        assert_eq!(map.at(&2), Err(KeyError));
        assert_eq!(map.at_mut(&2), Err(KeyError));
    }

    #[test]
    fn test_iterates_by_key_order() {
        let map: OrderedMap<i32, &str> =
            [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_erase_key() {
        let mut map: OrderedMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
        assert_eq!(map.erase_key(&1), 1);
        assert_eq!(map.erase_key(&1), 0);
        assert!(!map.contains_key(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut map: OrderedMap<i32, String> = OrderedMap::new();
        map.insert(5, "five".to_string());
        map.get_mut(&5).unwrap().push_str("!");
        assert_eq!(map.get(&5).map(String::as_str), Some("five!"));
    }
}
