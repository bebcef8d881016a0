use std::fmt;

use crate::arena::Arena;
use crate::node::RbNode;
use crate::traverse;

/// Three-way ordering used everywhere a comparison happens: negative when
/// the first argument sorts before the second, zero when equivalent,
/// positive otherwise.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a < b {
        -1
    } else if b < a {
        1
    } else {
        0
    }
}

/// Detached handle to a tree position.
///
/// A cursor is a plain copyable value; it does not borrow the tree. A cursor
/// whose node has been erased is *stale*: the tree treats it like [`END`]
/// wherever it is presented.
///
/// [`END`]: Cursor::END
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    pub(crate) node: Option<u32>,
}

impl Cursor {
    /// The one-past-the-last position.
    pub const END: Cursor = Cursor { node: None };

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

/// Red-black binary search tree keyed by a caller-supplied comparator.
///
/// Equivalent values are allowed unless an operation asks for uniqueness;
/// a duplicate descends to the right of its twin, so insertion order is
/// preserved among equals.
pub struct RbTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    arena: Arena<T>,
    root: Option<u32>,
    len: usize,
    compare: C,
}

impl<T: PartialOrd> RbTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T, C> RbTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(compare: C) -> Self {
        RbTree {
            arena: Arena::new(),
            root: None,
            len: 0,
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub(crate) fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub(crate) fn compare_values(&self, a: &T, b: &T) -> i32 {
        (self.compare)(a, b)
    }

    fn is_live(&self, at: Cursor) -> bool {
        at.node.is_some_and(|index| self.arena.contains(index))
    }

    /// First position in comparator order, or `END` when empty.
    pub fn begin(&self) -> Cursor {
        Cursor {
            node: traverse::leftmost(&self.arena, self.root),
        }
    }

    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// Successor of `at`. Stale and `END` cursors map to `END`.
    pub fn next(&self, at: Cursor) -> Cursor {
        match at.node {
            Some(index) if self.arena.contains(index) => Cursor {
                node: traverse::next(&self.arena, index),
            },
            _ => Cursor::END,
        }
    }

    /// Predecessor of `at`. Stepping back from `END` lands on the last
    /// position.
    pub fn prev(&self, at: Cursor) -> Cursor {
        match at.node {
            Some(index) if self.arena.contains(index) => Cursor {
                node: traverse::prev(&self.arena, index),
            },
            None => Cursor {
                node: traverse::rightmost(&self.arena, self.root),
            },
            _ => Cursor::END,
        }
    }

    pub fn value(&self, at: Cursor) -> Option<&T> {
        match at.node {
            Some(index) if self.arena.contains(index) => Some(&self.arena.node(index).value),
            _ => None,
        }
    }

    /// Mutable access to the payload behind a cursor. Callers must not
    /// change the part of the value the comparator observes.
    pub(crate) fn value_mut(&mut self, at: Cursor) -> Option<&mut T> {
        match at.node {
            Some(index) if self.arena.contains(index) => {
                Some(&mut self.arena.node_mut(index).value)
            }
            _ => None,
        }
    }

    /// Binary search with a caller-supplied probe. The probe receives a
    /// stored value and reports where the target sorts relative to it:
    /// negative for "target is to the left", zero for a hit.
    pub fn find_by<F: Fn(&T) -> i32>(&self, probe: F) -> Cursor {
        let mut at = self.root;
        while let Some(index) = at {
            let ord = probe(&self.arena.node(index).value);
            if ord == 0 {
                return Cursor { node: Some(index) };
            }
            at = if ord < 0 {
                self.arena.node(index).l
            } else {
                self.arena.node(index).r
            };
        }
        Cursor::END
    }

    pub fn find(&self, target: &T) -> Cursor {
        self.find_by(|value| (self.compare)(target, value))
    }

    pub fn contains(&self, target: &T) -> bool {
        !self.find(target).is_end()
    }

    /// Inserts `value` and rebalances. With `keep_unique` set, an equivalent
    /// resident value wins: the returned flag is `false` and the cursor
    /// points at the resident. Otherwise duplicates are admitted to the
    /// right of their twins.
    pub fn insert(&mut self, value: T, keep_unique: bool) -> (Cursor, bool) {
        let Some(mut at) = self.root else {
            let index = self.arena.insert(RbNode::new(value, false));
            self.root = Some(index);
            self.len = 1;
            return (Cursor { node: Some(index) }, true);
        };
        let parent = loop {
            let ord = (self.compare)(&value, &self.arena.node(at).value);
            if ord == 0 && keep_unique {
                return (Cursor { node: Some(at) }, false);
            }
            let branch = if ord < 0 {
                self.arena.node(at).l
            } else {
                self.arena.node(at).r
            };
            match branch {
                Some(child) => at = child,
                None => break at,
            }
        };
        let ord = (self.compare)(&value, &self.arena.node(parent).value);
        let mut node = RbNode::new(value, true);
        node.p = Some(parent);
        let index = self.arena.insert(node);
        if ord < 0 {
            self.arena.node_mut(parent).l = Some(index);
        } else {
            self.arena.node_mut(parent).r = Some(index);
        }
        self.len += 1;
        self.rebalance(index);
        // Rotations can displace the old root; rederive it from the new node.
        let mut top = index;
        while let Some(p) = self.arena.node(top).p {
            top = p;
        }
        self.root = Some(top);
        (Cursor { node: Some(index) }, true)
    }

    /// Points `new_top` at `grandparent` in place of `old_top`, or makes it
    /// the root when there is no grandparent.
    fn reattach(&mut self, old_top: u32, grandparent: Option<u32>, new_top: u32) {
        self.arena.node_mut(new_top).p = grandparent;
        match grandparent {
            Some(gg) => {
                if self.arena.node(gg).l == Some(old_top) {
                    self.arena.node_mut(gg).l = Some(new_top);
                } else {
                    self.arena.node_mut(gg).r = Some(new_top);
                }
            }
            None => self.root = Some(new_top),
        }
    }

    /// Restores the red-black invariants around a freshly inserted red node.
    ///
    /// Case 1: `n` is the root, paint it black. Case 2: black parent, done.
    /// Case 3: red aunt, recolor the grandparent red, fix upward from it,
    /// then paint parent and aunt black. Case 4: black (or absent) aunt,
    /// one of four rotations keyed by which sides `n` and its parent sit on.
    fn rebalance(&mut self, n: u32) {
        let Some(p) = self.arena.node(n).p else {
            self.arena.node_mut(n).red = false;
            return;
        };
        if !self.arena.node(p).red {
            return;
        }
        let g = self.arena.node(p).p.expect("red node cannot be the root");
        let gg = self.arena.node(g).p;
        let p_is_left = self.arena.node(g).l == Some(p);
        let aunt = if p_is_left {
            self.arena.node(g).r
        } else {
            self.arena.node(g).l
        };

        if let Some(u) = aunt {
            if self.arena.node(u).red {
                self.arena.node_mut(g).red = true;
                self.rebalance(g);
                self.arena.node_mut(p).red = false;
                self.arena.node_mut(u).red = false;
                return;
            }
        }

        let n_is_left = self.arena.node(p).l == Some(n);
        match (p_is_left, n_is_left) {
            // Left-left: right rotation at the grandparent.
            (true, true) => {
                let s = self.arena.node(p).r;
                self.arena.node_mut(g).l = s;
                if let Some(s) = s {
                    self.arena.node_mut(s).p = Some(g);
                }
                self.arena.node_mut(p).r = Some(g);
                self.arena.node_mut(g).p = Some(p);
                self.reattach(g, gg, p);
                self.arena.node_mut(p).red = false;
                self.arena.node_mut(g).red = true;
            }
            // Right-right: left rotation at the grandparent.
            (false, false) => {
                let s = self.arena.node(p).l;
                self.arena.node_mut(g).r = s;
                if let Some(s) = s {
                    self.arena.node_mut(s).p = Some(g);
                }
                self.arena.node_mut(p).l = Some(g);
                self.arena.node_mut(g).p = Some(p);
                self.reattach(g, gg, p);
                self.arena.node_mut(p).red = false;
                self.arena.node_mut(g).red = true;
            }
            // Left-right: n takes the grandparent's place, its subtrees are
            // redistributed to the displaced parent and grandparent.
            (true, false) => {
                let nl = self.arena.node(n).l;
                let nr = self.arena.node(n).r;
                self.arena.node_mut(p).r = nl;
                if let Some(nl) = nl {
                    self.arena.node_mut(nl).p = Some(p);
                }
                self.arena.node_mut(g).l = nr;
                if let Some(nr) = nr {
                    self.arena.node_mut(nr).p = Some(g);
                }
                self.arena.node_mut(n).l = Some(p);
                self.arena.node_mut(n).r = Some(g);
                self.arena.node_mut(p).p = Some(n);
                self.arena.node_mut(g).p = Some(n);
                self.reattach(g, gg, n);
                self.arena.node_mut(n).red = false;
                self.arena.node_mut(g).red = true;
            }
            // Right-left: mirror of left-right.
            (false, true) => {
                let nl = self.arena.node(n).l;
                let nr = self.arena.node(n).r;
                self.arena.node_mut(g).r = nl;
                if let Some(nl) = nl {
                    self.arena.node_mut(nl).p = Some(g);
                }
                self.arena.node_mut(p).l = nr;
                if let Some(nr) = nr {
                    self.arena.node_mut(nr).p = Some(p);
                }
                self.arena.node_mut(n).l = Some(g);
                self.arena.node_mut(n).r = Some(p);
                self.arena.node_mut(g).p = Some(n);
                self.arena.node_mut(p).p = Some(n);
                self.reattach(g, gg, n);
                self.arena.node_mut(n).red = false;
                self.arena.node_mut(g).red = true;
            }
        }
    }

    fn replace_child(&mut self, parent: u32, old: u32, new: Option<u32>) {
        if self.arena.node(parent).l == Some(old) {
            self.arena.node_mut(parent).l = new;
        } else {
            self.arena.node_mut(parent).r = new;
        }
    }

    /// Removes the node behind `at` and returns a cursor to its in-order
    /// successor. Stale and `END` cursors are a no-op returning `END`.
    ///
    /// Removal is structural only: a leaf is unlinked, a one-child node is
    /// bypassed, a two-child node is replaced by its in-order successor
    /// (which, having no left child, splices out trivially). Colors are left
    /// as they are, so BST ordering holds but red-black balance may not.
    pub fn erase(&mut self, at: Cursor) -> Cursor {
        let Some(x) = at.node else {
            return Cursor::END;
        };
        if !self.arena.contains(x) {
            return Cursor::END;
        }
        let succ = traverse::next(&self.arena, x);
        let xp = self.arena.node(x).p;
        let xl = self.arena.node(x).l;
        let xr = self.arena.node(x).r;
        match (xl, xr) {
            (None, None) => match xp {
                Some(p) => self.replace_child(p, x, None),
                None => self.root = None,
            },
            (Some(c), None) | (None, Some(c)) => {
                self.arena.node_mut(c).p = xp;
                match xp {
                    Some(p) => self.replace_child(p, x, Some(c)),
                    None => self.root = Some(c),
                }
            }
            (Some(_), Some(_)) => {
                let s = succ.expect("a node with a right child has a successor");
                // Detach the successor first: it has no left child, so its
                // right subtree takes its place. When the successor is x's
                // own right child this rewrites x.r, which is why x's links
                // are re-read below.
                let sp = self.arena.node(s).p.expect("successor has a parent");
                let sr = self.arena.node(s).r;
                self.replace_child(sp, s, sr);
                if let Some(sr) = sr {
                    self.arena.node_mut(sr).p = Some(sp);
                }
                let xl = self.arena.node(x).l;
                let xr = self.arena.node(x).r;
                match xp {
                    Some(p) => self.replace_child(p, x, Some(s)),
                    None => self.root = Some(s),
                }
                {
                    let node = self.arena.node_mut(s);
                    node.p = xp;
                    node.l = xl;
                    node.r = xr;
                }
                if let Some(xl) = xl {
                    self.arena.node_mut(xl).p = Some(s);
                }
                if let Some(xr) = xr {
                    self.arena.node_mut(xr).p = Some(s);
                }
            }
        }
        self.arena.remove(x);
        self.len -= 1;
        Cursor { node: succ }
    }

    /// Erases every value equivalent to `target`; returns how many went.
    pub fn erase_value(&mut self, target: &T) -> usize {
        let mut removed = 0;
        loop {
            let at = self.find(target);
            if at.is_end() {
                return removed;
            }
            self.erase(at);
            removed += 1;
        }
    }

    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter {
            tree: self,
            at: self.begin(),
        }
    }

    /// Iterator starting at `at`; a stale cursor yields nothing.
    pub fn iter_at(&self, at: Cursor) -> Iter<'_, T, C> {
        let at = if self.is_live(at) { at } else { Cursor::END };
        Iter { tree: self, at }
    }
}

impl<T: PartialOrd> Default for RbTree<T> {
    fn default() -> Self {
        RbTree::new()
    }
}

impl<T: Clone, C: Clone + Fn(&T, &T) -> i32> Clone for RbTree<T, C> {
    fn clone(&self) -> Self {
        RbTree {
            arena: self.arena.clone(),
            root: self.root,
            len: self.len,
            compare: self.compare.clone(),
        }
    }
}

impl<T: fmt::Debug, C: Fn(&T, &T) -> i32> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialOrd> FromIterator<T> for RbTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Fn(&T, &T) -> i32> Extend<T> for RbTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value, false);
        }
    }
}

pub struct Iter<'a, T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    tree: &'a RbTree<T, C>,
    at: Cursor,
}

impl<'a, T, C: Fn(&T, &T) -> i32> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.tree.value(self.at)?;
        self.at = self.tree.next(self.at);
        Some(value)
    }
}

impl<'a, T, C: Fn(&T, &T) -> i32> IntoIterator for &'a RbTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone + PartialOrd>(tree: &RbTree<T>) -> Vec<T> {
        tree.iter().cloned().collect()
    }

    #[test]
    fn test_insert_iterates_in_order() {
        let mut tree = RbTree::new();
        for v in [5, 3, 8, 1, 4, 7, 9] {
            let (at, fresh) = tree.insert(v, true);
            assert!(fresh);
            assert_eq!(tree.value(at), Some(&v));
        }
        assert_eq!(collect(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_unique_insert_reports_resident() {
        let mut tree: RbTree<i32> = [4, 2, 6].into_iter().collect();
        let (at, fresh) = tree.insert(4, true);
        assert!(!fresh);
        assert_eq!(tree.value(at), Some(&4));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_duplicates_allowed_when_not_unique() {
        let mut tree = RbTree::new();
        for v in [2, 1, 2, 3, 2] {
            tree.insert(v, false);
        }
        assert_eq!(collect(&tree), vec![1, 2, 2, 2, 3]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_find_hits_and_misses() {
        let tree: RbTree<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(tree.value(tree.find(&20)), Some(&20));
        assert!(tree.find(&25).is_end());
        assert!(tree.contains(&30));
    }

    #[test]
    fn test_erase_leaf_and_internal() {
        let mut tree: RbTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        let after = tree.erase(tree.find(&5));
        assert_eq!(tree.value(after), Some(&7));
        assert_eq!(collect(&tree), vec![1, 3, 4, 7, 8, 9]);
        tree.assert_ordered().unwrap();

        let after = tree.erase(tree.find(&9));
        assert!(after.is_end());
        assert_eq!(collect(&tree), vec![1, 3, 4, 7, 8]);
        tree.assert_ordered().unwrap();
    }

    #[test]
    fn test_erase_root_leaf() {
        let mut tree: RbTree<i32> = RbTree::new();
        tree.insert(42, true);
        let after = tree.erase(tree.begin());
        assert!(after.is_end());
        assert!(tree.is_empty());
        assert!(tree.begin().is_end());
    }

    #[test]
    fn test_erase_stale_cursor_is_noop() {
        let mut tree: RbTree<i32> = [1, 2, 3].into_iter().collect();
        let at = tree.find(&2);
        tree.erase(at);
        assert_eq!(tree.erase(at), Cursor::END);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_erase_value_removes_all_duplicates() {
        let mut tree = RbTree::new();
        tree.extend([3, 1, 3, 2, 3]);
        assert_eq!(tree.erase_value(&3), 3);
        assert_eq!(tree.erase_value(&9), 0);
        assert_eq!(collect(&tree), vec![1, 2]);
    }

    #[test]
    fn test_prev_walks_backwards_from_end() {
        let tree: RbTree<i32> = [1, 2, 3].into_iter().collect();
        let mut at = tree.prev(Cursor::END);
        let mut seen = Vec::new();
        while let Some(&v) = tree.value(at) {
            seen.push(v);
            at = tree.prev(at);
        }
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn test_custom_comparator_reverses_order() {
        let mut tree = RbTree::with_comparator(|a: &i32, b: &i32| default_comparator(b, a));
        tree.extend([1, 3, 2]);
        let seen: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(seen, vec![3, 2, 1]);
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut tree: RbTree<i32> = (0..100).collect();
        tree.clear();
        assert!(tree.is_empty());
        tree.extend([7, 7, 8]);
        assert_eq!(collect(&tree), vec![7, 7, 8]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn test_ascending_insert_stays_balanced() {
        let mut tree = RbTree::new();
        for v in 0..256 {
            tree.insert(v, true);
            tree.assert_valid().unwrap();
        }
        assert_eq!(tree.len(), 256);
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let mut a: RbTree<i32> = [1, 2].into_iter().collect();
        let mut b: RbTree<i32> = [9].into_iter().collect();
        a.swap(&mut b);
        assert_eq!(collect(&a), vec![9]);
        assert_eq!(collect(&b), vec![1, 2]);
    }
}
