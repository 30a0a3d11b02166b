//! Generational slab backing one chain.
//!
//! Every [`Link`](crate::link::Link) handle into a chain shares a single
//! store. Nodes live in slots addressed by index; freeing a node bumps the
//! slot's generation and pushes the index onto a free list, so recycled
//! slots never satisfy handles minted for an earlier occupant.

use crate::error::ChainError;
use crate::link::NodeId;
use skein_core::Alloc;
use smallvec::SmallVec;
use std::mem;

/// One chain node: an optional payload plus neighbour indices.
struct Node<T> {
    payload: Option<T>,
    prev: Option<u32>,
    next: Option<u32>,
}

struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

pub(crate) struct Store<T, A: Alloc> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    alloc: A,
}

impl<T, A: Alloc> Store<T, A> {
    pub(crate) fn new(alloc: A) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            alloc,
        }
    }

    /// Footprint charged against the capability per node.
    fn node_bytes() -> usize {
        mem::size_of::<Node<T>>()
    }

    /// Admits and stores a node with no neighbours.
    pub(crate) fn insert_detached(&mut self, payload: Option<T>) -> Result<NodeId, ChainError> {
        self.alloc.allocate(Self::node_bytes())?;
        let node = Node {
            payload,
            prev: None,
            next: None,
        };
        let index = match self.free_list.pop() {
            // Recycled slots keep the generation bumped at retirement.
            Some(index) => {
                self.slots[index as usize].node = Some(node);
                index
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                index
            }
        };
        Ok(self.node_id_at(index))
    }

    /// Mints a handle id for an occupied slot at its current generation.
    pub(crate) fn node_id_at(&self, index: u32) -> NodeId {
        NodeId::new(index, self.slots[index as usize].generation)
    }

    /// Checks a handle id against the slot it names.
    pub(crate) fn resolve(&self, id: NodeId) -> Result<u32, ChainError> {
        match self.slots.get(id.index() as usize) {
            Some(slot) if slot.node.is_some() && slot.generation == id.generation() => {
                Ok(id.index())
            }
            Some(slot) => Err(ChainError::StaleNode {
                handle_generation: id.generation(),
                slot_generation: slot.generation,
            }),
            // Slots are never truncated, so an index past the end can only
            // come from a foreign chain's handle. Report it as stale.
            None => Err(ChainError::StaleNode {
                handle_generation: id.generation(),
                slot_generation: 0,
            }),
        }
    }

    fn node(&self, index: u32) -> &Node<T> {
        self.slots[index as usize]
            .node
            .as_ref()
            .expect("chain links only reference occupied slots")
    }

    fn node_mut(&mut self, index: u32) -> &mut Node<T> {
        self.slots[index as usize]
            .node
            .as_mut()
            .expect("chain links only reference occupied slots")
    }

    pub(crate) fn next_of(&self, index: u32) -> Option<u32> {
        self.node(index).next
    }

    pub(crate) fn prev_of(&self, index: u32) -> Option<u32> {
        self.node(index).prev
    }

    fn head_from(&self, index: u32) -> u32 {
        let mut cur = index;
        while let Some(prev) = self.node(cur).prev {
            cur = prev;
        }
        cur
    }

    fn tail_from(&self, index: u32) -> u32 {
        let mut cur = index;
        while let Some(next) = self.node(cur).next {
            cur = next;
        }
        cur
    }

    /// Follows `next` links for a positive offset, `prev` links for a
    /// negative one. `None` means the walk ran off an end.
    pub(crate) fn walk(&self, index: u32, offset: i64) -> Option<u32> {
        let mut cur = index;
        if offset >= 0 {
            for _ in 0..offset {
                cur = self.node(cur).next?;
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                cur = self.node(cur).prev?;
            }
        }
        Some(cur)
    }

    /// Inserts a payload after the tail reached from `index`.
    pub(crate) fn append_from(&mut self, index: u32, payload: T) -> Result<NodeId, ChainError> {
        let tail = self.tail_from(index);
        let id = self.insert_detached(Some(payload))?;
        // Link against the walked-to tail in both directions.
        self.node_mut(id.index()).prev = Some(tail);
        self.node_mut(tail).next = Some(id.index());
        Ok(id)
    }

    /// Inserts a payload before the head reached from `index`.
    pub(crate) fn prepend_from(&mut self, index: u32, payload: T) -> Result<NodeId, ChainError> {
        let head = self.head_from(index);
        let id = self.insert_detached(Some(payload))?;
        self.node_mut(id.index()).next = Some(head);
        self.node_mut(head).prev = Some(id.index());
        Ok(id)
    }

    pub(crate) fn set_payload(&mut self, index: u32, payload: T) -> Option<T> {
        self.node_mut(index).payload.replace(payload)
    }

    pub(crate) fn payload(&self, index: u32) -> Option<&T> {
        self.slots
            .get(index as usize)?
            .node
            .as_ref()?
            .payload
            .as_ref()
    }

    pub(crate) fn payload_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slots
            .get_mut(index as usize)?
            .node
            .as_mut()?
            .payload
            .as_mut()
    }

    /// Unlinks one node, splicing its neighbours to each other, and hands
    /// back whatever payload it carried.
    pub(crate) fn remove(&mut self, index: u32) -> Option<T> {
        let node = self.slots[index as usize]
            .node
            .take()
            .expect("remove is only called on resolved nodes");
        if let Some(prev) = node.prev {
            self.node_mut(prev).next = node.next;
        }
        if let Some(next) = node.next {
            self.node_mut(next).prev = node.prev;
        }
        self.retire(index);
        node.payload
    }

    /// Frees every node of the chain containing `index`, payloads included.
    pub(crate) fn destroy_from(&mut self, index: u32) {
        // Collect the forward order first so the walk never has to cross a
        // slot that is already retired.
        let mut order: SmallVec<[u32; 16]> = SmallVec::new();
        let mut cur = Some(self.head_from(index));
        while let Some(i) = cur {
            order.push(i);
            cur = self.node(i).next;
        }
        for i in order {
            self.slots[i as usize].node = None;
            self.retire(i);
        }
    }

    fn retire(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(index);
        self.alloc.free(Self::node_bytes());
    }

    #[cfg(test)]
    pub(crate) fn live_nodes(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }
}
