//! Hash set with separate chaining.
//!
//! Buckets are a [`Vector`] of [`List`] chains: bucket index is
//! `hash(value) % bucket_count()`, membership is a linear scan of one
//! chain, and exceeding the maximum load factor on insert triggers a
//! rehash that redistributes every element into a larger table.
//! Iteration walks buckets in index order and each chain in insertion
//! order, so the overall order tracks the hash, not the values.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use sylva_list::List;
use sylva_vec::Vector;

const DEFAULT_BUCKETS: usize = 8;

pub struct UnorderedSet<T, S = RandomState> {
    buckets: Vector<List<T>>,
    len: usize,
    max_load_factor: f32,
    hasher: S,
}

impl<T: Hash + Eq> UnorderedSet<T> {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, RandomState::new())
    }
}

impl<T: Hash + Eq, S: BuildHasher> UnorderedSet<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> Self {
        let mut buckets = Vector::new();
        buckets.resize_with(bucket_count.max(1), List::new);
        UnorderedSet {
            buckets,
            len: 0,
            max_load_factor: 1.0,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Index of the bucket `value` hashes into.
    pub fn bucket(&self, value: &T) -> usize {
        (self.hasher.hash_one(value) as usize) % self.bucket_count()
    }

    pub fn bucket_size(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.bucket_count() as f32
    }

    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    pub fn set_max_load_factor(&mut self, limit: f32) {
        self.max_load_factor = limit;
    }

    /// Inserts `value` unless already present; the flag reports whether an
    /// insertion happened. Crossing the load-factor limit grows the table
    /// before the new element lands.
    pub fn insert(&mut self, value: T) -> bool {
        let index = self.bucket(&value);
        if !self.buckets[index].find(&value).is_end() {
            return false;
        }
        let loaded = (self.len + 1) as f32 / self.bucket_count() as f32;
        let index = if loaded > self.max_load_factor {
            self.reserve(self.len * 2);
            self.bucket(&value)
        } else {
            index
        };
        self.buckets[index].push_back(value);
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn find(&self, value: &T) -> Option<&T> {
        let bucket = &self.buckets[self.bucket(value)];
        let at = bucket.find(value);
        bucket.value(at)
    }

    /// Removes `value` if present; reports whether anything was removed.
    pub fn erase(&mut self, value: &T) -> bool {
        let index = self.bucket(value);
        let bucket = &mut self.buckets[index];
        let at = bucket.find(value);
        if at.is_end() {
            return false;
        }
        bucket.erase(at);
        self.len -= 1;
        true
    }

    /// Grows the table to at least `bucket_count` buckets and
    /// redistributes every element. Shrinking is never performed.
    pub fn rehash(&mut self, bucket_count: usize) {
        if bucket_count <= self.bucket_count() {
            return;
        }
        let mut rehashed: Vector<List<T>> = Vector::new();
        rehashed.resize_with(bucket_count, List::new);
        let mut old = std::mem::take(&mut self.buckets);
        for chain in old.iter_mut() {
            while let Some(value) = chain.pop_front() {
                let index = (self.hasher.hash_one(&value) as usize) % bucket_count;
                rehashed[index].push_back(value);
            }
        }
        self.buckets = rehashed;
    }

    /// Ensures capacity for `additional_total` elements without crossing
    /// the load-factor limit.
    pub fn reserve(&mut self, additional_total: usize) {
        let needed = (additional_total as f32 / self.max_load_factor).ceil() as usize;
        self.rehash(needed);
    }

    /// Empties every bucket; the bucket count is unchanged.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buckets: &self.buckets,
            bucket: 0,
            chain: None,
        }
    }
}

impl<T: Hash + Eq> Default for UnorderedSet<T> {
    fn default() -> Self {
        UnorderedSet::new()
    }
}

impl<T: Clone, S: Clone> Clone for UnorderedSet<T, S> {
    fn clone(&self) -> Self {
        UnorderedSet {
            buckets: self.buckets.clone(),
            len: self.len,
            max_load_factor: self.max_load_factor,
            hasher: self.hasher.clone(),
        }
    }
}

impl<T: Hash + Eq + fmt::Debug, S: BuildHasher> fmt::Debug for UnorderedSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for UnorderedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for UnorderedSet<T, S> {}

impl<T: Hash + Eq> FromIterator<T> for UnorderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = UnorderedSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for UnorderedSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

pub struct Iter<'a, T> {
    buckets: &'a Vector<List<T>>,
    bucket: usize,
    chain: Option<sylva_list::Iter<'a, T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.chain.as_mut() {
                if let Some(value) = chain.next() {
                    return Some(value);
                }
            }
            if self.bucket >= self.buckets.len() {
                return None;
            }
            self.chain = Some(self.buckets[self.bucket].iter());
            self.bucket += 1;
        }
    }
}

impl<'a, T: Hash + Eq, S: BuildHasher> IntoIterator for &'a UnorderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
