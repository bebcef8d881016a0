/// A single tree node inside the arena.
///
/// `p` is a non-owning back-reference; `l` and `r` delimit the subtrees.
/// All three are arena indices, never slice indices into user data.
#[derive(Clone, Debug)]
pub(crate) struct RbNode<T> {
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) red: bool,
    pub(crate) value: T,
}

impl<T> RbNode<T> {
    pub(crate) fn new(value: T, red: bool) -> Self {
        RbNode {
            p: None,
            l: None,
            r: None,
            red,
            value,
        }
    }
}
