use std::fmt;

use crate::OutOfRange;

/// Cells per block. Sixteen keeps blocks cache-friendly while the block
/// table stays tiny.
const CELLS: usize = 16;

type Block<T> = Box<[Option<T>; CELLS]>;

fn empty_block<T>() -> Block<T> {
    Box::new(std::array::from_fn(|_| None))
}

/// Double-ended queue backed by lazily allocated fixed-size blocks.
#[derive(Clone)]
pub struct Deque<T> {
    blocks: Vec<Option<Block<T>>>,
    /// Flat slot index of logical id 0.
    front: usize,
    len: usize,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Deque {
            blocks: Vec::new(),
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn total_slots(&self) -> usize {
        self.blocks.len() * CELLS
    }

    /// Flat slot index of logical index `id`.
    fn slot(&self, id: usize) -> usize {
        (self.front + id) % self.total_slots()
    }

    fn cell_at(&self, id: usize) -> Option<&T> {
        let slot = self.slot(id);
        self.blocks[slot / CELLS].as_deref()?[slot % CELLS].as_ref()
    }

    fn cell_at_mut(&mut self, id: usize) -> Option<&mut T> {
        let slot = self.slot(id);
        self.blocks[slot / CELLS].as_deref_mut()?[slot % CELLS].as_mut()
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        if id >= self.len {
            return None;
        }
        self.cell_at(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        if id >= self.len {
            return None;
        }
        self.cell_at_mut(id)
    }

    /// Checked indexed access.
    pub fn at(&self, id: usize) -> Result<&T, OutOfRange> {
        self.get(id).ok_or(OutOfRange("deque index"))
    }

    pub fn at_mut(&mut self, id: usize) -> Result<&mut T, OutOfRange> {
        self.get_mut(id).ok_or(OutOfRange("deque index"))
    }

    pub fn front(&self) -> Result<&T, OutOfRange> {
        self.get(0).ok_or(OutOfRange("front on empty deque"))
    }

    pub fn front_mut(&mut self) -> Result<&mut T, OutOfRange> {
        self.get_mut(0).ok_or(OutOfRange("front on empty deque"))
    }

    pub fn back(&self) -> Result<&T, OutOfRange> {
        match self.len.checked_sub(1) {
            Some(last) => self.get(last).ok_or(OutOfRange("back on empty deque")),
            None => Err(OutOfRange("back on empty deque")),
        }
    }

    pub fn back_mut(&mut self) -> Result<&mut T, OutOfRange> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last).ok_or(OutOfRange("back on empty deque")),
            None => Err(OutOfRange("back on empty deque")),
        }
    }

    fn all_blocks_allocated(&self) -> bool {
        self.blocks.iter().all(Option::is_some)
    }

    fn write_slot(&mut self, slot: usize, value: T) {
        let block = slot / CELLS;
        let cells = self.blocks[block].get_or_insert_with(empty_block);
        cells[slot % CELLS] = Some(value);
    }

    pub fn push_back(&mut self, value: T) {
        let tail_cell = if self.len == 0 {
            CELLS - 1
        } else {
            self.slot(self.len - 1) % CELLS
        };
        if self.blocks.is_empty() || (self.all_blocks_allocated() && tail_cell == CELLS - 1) {
            let grown = if self.blocks.is_empty() {
                1
            } else {
                self.blocks.len() * 2
            };
            self.reallocate(grown);
        }
        let slot = self.slot(self.len);
        self.write_slot(slot, value);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        if self.blocks.is_empty() || self.all_blocks_allocated() {
            let grown = if self.blocks.is_empty() {
                1
            } else {
                self.blocks.len() * 2
            };
            self.reallocate(grown);
        }
        self.front = if self.front == 0 {
            self.total_slots() - 1
        } else {
            self.front - 1
        };
        self.write_slot(self.front, value);
        self.len += 1;
    }

    /// Releases a block's storage once it carries no live cells.
    fn release_if_empty(&mut self, block: usize) {
        if let Some(cells) = self.blocks[block].as_deref() {
            if cells.iter().all(Option::is_none) {
                self.blocks[block] = None;
            }
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.front;
        let block = slot / CELLS;
        let value = self.blocks[block].as_deref_mut()?[slot % CELLS].take();
        self.len -= 1;
        self.front = (self.front + 1) % self.total_slots();
        self.release_if_empty(block);
        value
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.slot(self.len - 1);
        let block = slot / CELLS;
        let value = self.blocks[block].as_deref_mut()?[slot % CELLS].take();
        self.len -= 1;
        self.release_if_empty(block);
        value
    }

    /// Drops every element and releases all blocks; the block table itself
    /// is kept at its current size.
    pub fn clear(&mut self) {
        for block in &mut self.blocks {
            *block = None;
        }
        self.front = 0;
        self.len = 0;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Grows the block table to `block_count`, moving whole blocks into
    /// logical order so the rotation unwraps: the new front lands inside
    /// block zero at its old cell offset.
    ///
    /// At most one physical block holds both the front and the wrapped
    /// tail of the sequence; its tail cells are peeled off into a fresh
    /// trailing block, every other block moves by pointer.
    fn reallocate(&mut self, block_count: usize) {
        let mut migrated: Vec<Option<Block<T>>> = Vec::with_capacity(block_count);
        if self.len == 0 {
            migrated.resize_with(block_count, || None);
            self.blocks = migrated;
            self.front = 0;
            return;
        }
        let new_front = self.slot(0) % CELLS;
        let spanned = (new_front + self.len - 1) / CELLS + 1;
        for logical in 0..spanned {
            let id = if logical == 0 {
                0
            } else {
                logical * CELLS - new_front
            };
            let source = self.slot(id) / CELLS;
            match self.blocks[source].take() {
                Some(block) => migrated.push(Some(block)),
                None => {
                    // The front block already moved; this is the wrap case
                    // where it also held the tail cells.
                    let back_cell = self.slot(self.len - 1) % CELLS;
                    let mut tail = empty_block();
                    let head = migrated[0]
                        .as_deref_mut()
                        .expect("front block was migrated first");
                    for cell in 0..=back_cell {
                        tail[cell] = head[cell].take();
                    }
                    migrated.push(Some(tail));
                }
            }
        }
        migrated.resize_with(block_count, || None);
        self.blocks = migrated;
        self.front = new_front;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { deque: self, id: 0 }
    }
}

impl<T> std::ops::Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, id: usize) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("deque index {id} out of bounds (len {})", self.len),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, id: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("deque index {id} out of bounds (len {len})"),
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Deque::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    id: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.deque.get(self.id)?;
        self.id += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.deque.len.saturating_sub(self.id);
        (rest, Some(rest))
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
