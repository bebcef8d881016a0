use crate::node::RbNode;

/// Slot in the node arena. Vacant slots chain into a free list so erased
/// indices are reused before the vector grows.
#[derive(Clone, Debug)]
pub(crate) enum Slot<T> {
    Occupied(RbNode<T>),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
        }
    }

    pub(crate) fn insert(&mut self, node: RbNode<T>) -> u32 {
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                match *slot {
                    Slot::Vacant { next_free } => {
                        self.free = next_free;
                        *slot = Slot::Occupied(node);
                        index
                    }
                    Slot::Occupied(_) => unreachable!("free list points at a live slot"),
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot::Occupied(node));
                index
            }
        }
    }

    pub(crate) fn remove(&mut self, index: u32) -> RbNode<T> {
        let slot = std::mem::replace(
            &mut self.slots[index as usize],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("removed a vacant slot"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    pub(crate) fn contains(&self, index: u32) -> bool {
        matches!(
            self.slots.get(index as usize),
            Some(Slot::Occupied(_))
        )
    }

    pub(crate) fn node(&self, index: u32) -> &RbNode<T> {
        match &self.slots[index as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("vacant arena slot {index}"),
        }
    }

    pub(crate) fn node_mut(&mut self, index: u32) -> &mut RbNode<T> {
        match &mut self.slots[index as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("vacant arena slot {index}"),
        }
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}
