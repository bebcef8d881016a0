//! Umbrella crate re-exporting the whole sylva container family.
//!
//! Each container lives in its own crate; this one exists so downstream
//! code can depend on a single name.

pub use sylva_deque::Deque;
pub use sylva_hash::UnorderedSet;
pub use sylva_heap::PriorityQueue;
pub use sylva_list::List;
pub use sylva_stack::Stack;
pub use sylva_tree::{Cursor, KeyError, OrderedMap, OrderedSet, RbTree};
pub use sylva_vec::{OutOfRange, Vector};

pub mod deque {
    pub use sylva_deque::*;
}

pub mod hash {
    pub use sylva_hash::*;
}

pub mod heap {
    pub use sylva_heap::*;
}

pub mod list {
    pub use sylva_list::*;
}

pub mod stack {
    pub use sylva_stack::*;
}

pub mod tree {
    pub use sylva_tree::*;
}

pub mod vec {
    pub use sylva_vec::*;
}
