//! First-in-last-out adapter over [`sylva_vec::Vector`].
//!
//! Every operation forwards to the vector's back; the adapter adds no logic
//! of its own beyond guarding `pop` on an empty stack.

use sylva_vec::{OutOfRange, Vector};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack<T> {
    container: Vector<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            container: Vector::new(),
        }
    }

    pub fn top(&self) -> Result<&T, OutOfRange> {
        self.container
            .back()
            .map_err(|_| OutOfRange("top of empty stack"))
    }

    pub fn top_mut(&mut self) -> Result<&mut T, OutOfRange> {
        self.container
            .back_mut()
            .map_err(|_| OutOfRange("top of empty stack"))
    }

    pub fn push(&mut self, value: T) {
        self.container.push(value);
    }

    /// `None` on an empty stack; never an error.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop()
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn clear(&mut self) {
        self.container.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.container.swap(&mut other.container);
    }

    pub fn into_inner(self) -> Vector<T> {
        self.container
    }
}

impl<T> From<Vector<T>> for Stack<T> {
    fn from(container: Vector<T>) -> Self {
        Self { container }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            container: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.container.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_top_tracks_last_push() {
        let mut s = Stack::new();
        assert!(s.top().is_err());
        s.push("a");
        s.push("b");
        assert_eq!(s.top(), Ok(&"b"));
        *s.top_mut().expect("non-empty") = "c";
        assert_eq!(s.pop(), Some("c"));
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn test_from_vector() {
        let v: Vector<i32> = (0..4).collect();
        let mut s = Stack::from(v);
        assert_eq!(s.len(), 4);
        assert_eq!(s.pop(), Some(3));
    }

    #[test]
    fn test_clone_is_independent() {
        let a: Stack<i32> = (0..3).collect();
        let mut b = a.clone();
        b.push(99);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_swap() {
        let mut a: Stack<i32> = (0..2).collect();
        let mut b: Stack<i32> = (10..15).collect();
        a.swap(&mut b);
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 2);
        assert_eq!(a.top(), Ok(&14));
    }
}
