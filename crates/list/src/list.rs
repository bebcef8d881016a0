use std::fmt;

use crate::OutOfRange;

#[derive(Clone, Debug)]
struct ListNode<T> {
    prev: Option<u32>,
    next: Option<u32>,
    value: T,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(ListNode<T>),
    Vacant { next_free: Option<u32> },
}

/// Detached position handle. `Cursor::END` is the one-past-the-end sentinel
/// shared by all miss/terminal results.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    node: Option<u32>,
}

impl Cursor {
    pub const END: Cursor = Cursor { node: None };

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }
}

/// Doubly-linked list. `head` owns the chain conceptually; `tail` is a cache
/// of the last node for O(1) back access.
#[derive(Clone)]
pub struct List<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, index: u32) -> &ListNode<T> {
        match &self.slots[index as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("list slot {index} is vacant"),
        }
    }

    fn node_mut(&mut self, index: u32) -> &mut ListNode<T> {
        match &mut self.slots[index as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("list slot {index} is vacant"),
        }
    }

    /// True when the cursor names a live node of this list.
    fn is_live(&self, cursor: Cursor) -> bool {
        match cursor.node {
            Some(i) => matches!(
                self.slots.get(i as usize),
                Some(Slot::Occupied(_))
            ),
            None => false,
        }
    }

    fn alloc(&mut self, value: T) -> u32 {
        let node = ListNode {
            prev: None,
            next: None,
            value,
        };
        match self.free {
            Some(index) => {
                let Slot::Vacant { next_free } = self.slots[index as usize] else {
                    panic!("free list points at occupied slot");
                };
                self.free = next_free;
                self.slots[index as usize] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, index: u32) -> T {
        let slot = std::mem::replace(
            &mut self.slots[index as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => panic!("released a vacant list slot"),
        }
    }

    pub fn push_front(&mut self, value: T) {
        let index = self.alloc(value);
        self.node_mut(index).next = self.head;
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let index = self.alloc(value);
        self.node_mut(index).prev = self.tail;
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.node(head).next;
        self.head = next;
        match next {
            Some(next) => self.node_mut(next).prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Some(self.release(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let prev = self.node(tail).prev;
        self.tail = prev;
        match prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Some(self.release(tail))
    }

    pub fn front(&self) -> Result<&T, OutOfRange> {
        self.head
            .map(|i| &self.node(i).value)
            .ok_or(OutOfRange("front of empty list"))
    }

    pub fn back(&self) -> Result<&T, OutOfRange> {
        self.tail
            .map(|i| &self.node(i).value)
            .ok_or(OutOfRange("back of empty list"))
    }

    /// Inserts `value` before `at`, returning a cursor to the new node.
    /// Inserting at the end sentinel (or with a stale handle) appends.
    pub fn insert(&mut self, at: Cursor, value: T) -> Cursor {
        if !self.is_live(at) {
            self.push_back(value);
            return Cursor { node: self.tail };
        }
        let after = at.node.expect("live cursor has a node");
        let before = self.node(after).prev;

        let index = self.alloc(value);
        self.node_mut(index).prev = before;
        self.node_mut(index).next = Some(after);
        self.node_mut(after).prev = Some(index);
        match before {
            Some(before) => self.node_mut(before).next = Some(index),
            None => self.head = Some(index),
        }
        self.len += 1;
        Cursor { node: Some(index) }
    }

    /// Unlinks the node at `at` and returns a cursor to its successor.
    /// A stale or end cursor is a no-op returning the end sentinel.
    pub fn erase(&mut self, at: Cursor) -> Cursor {
        if !self.is_live(at) {
            return Cursor::END;
        }
        let index = at.node.expect("live cursor has a node");
        let (prev, next) = {
            let node = self.node(index);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.release(index);
        Cursor { node: next }
    }

    /// First node whose value equals `target`, or the end sentinel.
    pub fn find(&self, target: &T) -> Cursor
    where
        T: PartialEq,
    {
        let mut curr = self.head;
        while let Some(index) = curr {
            if self.node(index).value == *target {
                return Cursor { node: Some(index) };
            }
            curr = self.node(index).next;
        }
        Cursor::END
    }

    pub fn begin(&self) -> Cursor {
        Cursor { node: self.head }
    }

    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    pub fn next(&self, at: Cursor) -> Cursor {
        match at.node {
            Some(index) if self.is_live(at) => Cursor {
                node: self.node(index).next,
            },
            _ => Cursor::END,
        }
    }

    pub fn prev(&self, at: Cursor) -> Cursor {
        match at.node {
            Some(index) if self.is_live(at) => Cursor {
                node: self.node(index).prev,
            },
            // stepping back from the end sentinel lands on the tail
            None => Cursor { node: self.tail },
            _ => Cursor::END,
        }
    }

    pub fn value(&self, at: Cursor) -> Option<&T> {
        if self.is_live(at) {
            at.node.map(|i| &self.node(i).value)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            node: self.head,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a List<T>,
    node: Option<u32>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.node?;
        let node = self.list.node(index);
        self.node = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
