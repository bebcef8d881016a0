//! Dynamic array with a manually managed buffer.
//!
//! `Vector<T>` owns a contiguous allocation, a capacity, and a live count.
//! Elements at `[0, len)` are constructed; storage at `[len, cap)` is raw.
//! Append doubles capacity (0 -> 1 -> 2 -> 4 ...), so capacities stay powers
//! of two as long as growth happens through `push`.

mod error;
mod vector;

pub use error::OutOfRange;
pub use vector::Vector;
