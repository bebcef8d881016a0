//! Double-ended queue over fixed-size blocks.
//!
//! Storage is a table of block slots, each block a boxed array of
//! `CELLS` cells, allocated lazily and released as soon as a pop empties
//! them. Logical index `id` maps into a flat circular slot space:
//! `slot = (front + id) % (blocks * CELLS)`, then `block = slot / CELLS`
//! and `cell = slot % CELLS`. Live elements always occupy `len`
//! consecutive slots starting at `front`, wrapping around the end of the
//! slot space.
//!
//! Growth doubles the block table and unwraps the rotation so the new
//! front sits inside block zero; whole blocks move by pointer, and only
//! a wrapped tail block is ever copied cell by cell.

mod deque;

pub use deque::{Deque, Iter};

use thiserror::Error;

/// Illegal access on an empty deque (`front`/`back`/`at` out of bounds).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("out of range: {0}")]
pub struct OutOfRange(pub &'static str);
