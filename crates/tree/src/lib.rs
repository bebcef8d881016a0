//! Red-black binary search tree and the ordered set/map built on it.
//!
//! Nodes live in an index arena: child links own subtrees conceptually
//! (releasing a node's slot releases nothing else, but the tree only drops
//! whole subtrees), parent links are non-owning back-references used for
//! traversal and rotation only. Handles are detached [`Cursor`] values, so
//! iteration state survives independent mutations and `erase` can take the
//! position it is asked to remove.
//!
//! Insertion restores the red-black invariants with the classic four-case
//! fixup. Deletion relinks structurally but does **not** recolor; after any
//! erase the tree is a valid BST whose red-black balance is no longer
//! guaranteed. See `RbTree::assert_valid` vs `RbTree::assert_ordered`.

mod arena;
mod map;
mod node;
mod set;
mod traverse;
mod tree;
mod verify;

pub use map::{KeyError, MapIter, OrderedMap};
pub use set::OrderedSet;
pub use tree::{default_comparator, Cursor, Iter, RbTree};
