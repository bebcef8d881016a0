//! Doubly-linked list over an index arena.
//!
//! Nodes live in a slot vector addressed by `u32`; links are `Option<u32>`
//! rather than pointers, and erased slots are recycled through an internal
//! free list. Positions are exposed as detached [`Cursor`] values, so a
//! cursor can be held across mutations of the list that do not touch its
//! node.

mod list;

pub use list::{Cursor, Iter, List};

use thiserror::Error;

/// Illegal access on an empty list (`front`/`back` with no elements).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("out of range: {0}")]
pub struct OutOfRange(pub &'static str);
