//! In-order traversal over parent/child links, no auxiliary stack.

use crate::arena::Arena;

pub(crate) fn leftmost<T>(arena: &Arena<T>, mut at: Option<u32>) -> Option<u32> {
    let mut index = at.take()?;
    while let Some(l) = arena.node(index).l {
        index = l;
    }
    Some(index)
}

pub(crate) fn rightmost<T>(arena: &Arena<T>, mut at: Option<u32>) -> Option<u32> {
    let mut index = at.take()?;
    while let Some(r) = arena.node(index).r {
        index = r;
    }
    Some(index)
}

/// In-order successor: leftmost of the right subtree, otherwise the first
/// ancestor reached from a left child.
pub(crate) fn next<T>(arena: &Arena<T>, index: u32) -> Option<u32> {
    if let Some(r) = arena.node(index).r {
        return leftmost(arena, Some(r));
    }
    let mut child = index;
    let mut parent = arena.node(child).p;
    while let Some(p) = parent {
        if arena.node(p).l == Some(child) {
            return Some(p);
        }
        child = p;
        parent = arena.node(p).p;
    }
    None
}

/// In-order predecessor, the mirror of [`next`].
pub(crate) fn prev<T>(arena: &Arena<T>, index: u32) -> Option<u32> {
    if let Some(l) = arena.node(index).l {
        return rightmost(arena, Some(l));
    }
    let mut child = index;
    let mut parent = arena.node(child).p;
    while let Some(p) = parent {
        if arena.node(p).r == Some(child) {
            return Some(p);
        }
        child = p;
        parent = arena.node(p).p;
    }
    None
}
