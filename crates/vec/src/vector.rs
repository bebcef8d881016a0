use std::alloc::{self, Layout};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::OutOfRange;

/// Contiguous growable array with a hand-managed buffer.
///
/// Invariants: `len <= cap`; slots `[0, len)` hold constructed values and
/// slots `[len, cap)` are uninitialized storage. Zero-sized element types
/// never allocate.
pub struct Vector<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
}

unsafe impl<T: Send> Send for Vector<T> {}
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T> Vector<T> {
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        let mut v = Self::new();
        v.reserve(cap);
        v
    }

    /// `n` copies of `value`.
    pub fn fill(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity(n);
        v.resize_with(n, || value.clone());
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        if mem::size_of::<T>() == 0 {
            usize::MAX
        } else {
            self.cap
        }
    }

    /// Grows the backing storage to exactly `new_cap` if it exceeds the
    /// current capacity. Live elements are relocated; the old buffer is
    /// released. Never shrinks.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap <= self.cap || mem::size_of::<T>() == 0 {
            return;
        }

        let new_layout = match Layout::array::<T>(new_cap) {
            Ok(l) => l,
            Err(_) => panic!("vector capacity overflow"),
        };
        let new_ptr = unsafe { alloc::alloc(new_layout) as *mut T };
        let Some(new_ptr) = NonNull::new(new_ptr) else {
            alloc::handle_alloc_error(new_layout);
        };

        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            self.release_buffer();
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.reserve(if self.cap == 0 { 1 } else { self.cap * 2 });
        }
        unsafe {
            ptr::write(self.ptr.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) })
    }

    /// Grows by invoking `f` for each new trailing element, or shrinks by
    /// destroying trailing elements. Shrinking leaves capacity untouched.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len < self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        while self.len < new_len {
            self.push(f());
        }
    }

    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.len -= 1;
            unsafe {
                ptr::drop_in_place(self.ptr.as_ptr().add(self.len));
            }
        }
    }

    /// Reallocates to exactly the live count.
    pub fn shrink_to_fit(&mut self) {
        if self.cap == self.len || mem::size_of::<T>() == 0 {
            return;
        }
        if self.len == 0 {
            unsafe { self.release_buffer() };
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }

        let new_layout = match Layout::array::<T>(self.len) {
            Ok(l) => l,
            Err(_) => panic!("vector capacity overflow"),
        };
        let new_ptr = unsafe { alloc::alloc(new_layout) as *mut T };
        let Some(new_ptr) = NonNull::new(new_ptr) else {
            alloc::handle_alloc_error(new_layout);
        };
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            self.release_buffer();
        }
        self.ptr = new_ptr;
        self.cap = self.len;
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.get(index).ok_or(OutOfRange("vector index"))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.get_mut(index).ok_or(OutOfRange("vector index"))
    }

    pub fn front(&self) -> Result<&T, OutOfRange> {
        self.get(0).ok_or(OutOfRange("front of empty vector"))
    }

    pub fn front_mut(&mut self) -> Result<&mut T, OutOfRange> {
        self.get_mut(0).ok_or(OutOfRange("front of empty vector"))
    }

    pub fn back(&self) -> Result<&T, OutOfRange> {
        match self.len {
            0 => Err(OutOfRange("back of empty vector")),
            n => Ok(&self[n - 1]),
        }
    }

    pub fn back_mut(&mut self) -> Result<&mut T, OutOfRange> {
        match self.len {
            0 => Err(OutOfRange("back of empty vector")),
            n => Ok(&mut self[n - 1]),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Frees the buffer without touching element lifetimes. Caller destroys
    /// live elements first (or has moved them out).
    unsafe fn release_buffer(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap).expect("layout was valid at allocation");
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe { self.release_buffer() };
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.len);
        for value in self.iter() {
            out.push(value.clone());
        }
        out
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
