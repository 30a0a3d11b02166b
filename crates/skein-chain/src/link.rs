//! Free-floating handles into a doubly linked chain.

use crate::error::ChainError;
use crate::store::Store;
use skein_core::{Alloc, HostAlloc};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Identifies one node within a chain's store.
///
/// Pairs the slot index with the generation observed when the handle was
/// minted. Freeing a node bumps its slot's generation, so a handle held
/// across the free can be told apart from any later occupant of the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the chain's store.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation the slot held when this id was minted.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// A handle to one node of a doubly linked chain.
///
/// Chains have no container object. Every node is reached through a `Link`,
/// and any `Link` into a chain can reach every other node by walking `prev`
/// and `next` edges. Cloning a `Link` clones the handle, not the node.
///
/// Nodes start with no payload; [`set`](Link::set) installs one and
/// [`value`](Link::value) reads it back. Handles to freed nodes go stale
/// rather than dangling, and every operation on a stale handle reports
/// [`ChainError::StaleNode`].
pub struct Link<T, A: Alloc = HostAlloc> {
    store: Rc<RefCell<Store<T, A>>>,
    id: NodeId,
}

impl<T> Link<T> {
    /// Starts a new chain of one payload-less, neighbour-less node.
    ///
    /// The node's footprint is charged to the host capability, which always
    /// admits it.
    pub fn new() -> Result<Self, ChainError> {
        Self::new_in(HostAlloc)
    }
}

impl<T, A: Alloc> Link<T, A> {
    /// Starts a new chain whose node footprints are charged to `alloc`.
    ///
    /// Fails with [`ChainError::Alloc`] when the capability refuses the
    /// first node.
    pub fn new_in(alloc: A) -> Result<Self, ChainError> {
        let mut store = Store::new(alloc);
        let id = store.insert_detached(None)?;
        Ok(Self {
            store: Rc::new(RefCell::new(store)),
            id,
        })
    }

    fn handle(&self, id: NodeId) -> Self {
        Self {
            store: Rc::clone(&self.store),
            id,
        }
    }

    /// The identity of the node this handle points at.
    pub fn node_id(&self) -> NodeId {
        self.id
    }

    /// Whether the node behind this handle has been freed.
    pub fn is_stale(&self) -> bool {
        self.store.borrow().resolve(self.id).is_err()
    }

    /// Installs a payload, returning the one it replaces.
    pub fn set(&self, payload: T) -> Result<Option<T>, ChainError> {
        let mut store = self.store.borrow_mut();
        let index = store.resolve(self.id)?;
        Ok(store.set_payload(index, payload))
    }

    /// Borrows the node's payload, or `None` when no payload is installed.
    ///
    /// # Panics
    ///
    /// Panics if a guard from [`value_mut`](Link::value_mut) on the same
    /// chain is still live.
    pub fn value(&self) -> Result<Option<Ref<'_, T>>, ChainError> {
        let store = self.store.borrow();
        let index = store.resolve(self.id)?;
        match Ref::filter_map(store, |s| s.payload(index)) {
            Ok(payload) => Ok(Some(payload)),
            Err(_) => Ok(None),
        }
    }

    /// Mutably borrows the node's payload.
    ///
    /// # Panics
    ///
    /// Panics if any other payload guard on the same chain is still live.
    pub fn value_mut(&self) -> Result<Option<RefMut<'_, T>>, ChainError> {
        let store = self.store.borrow_mut();
        let index = store.resolve(self.id)?;
        match RefMut::filter_map(store, |s| s.payload_mut(index)) {
            Ok(payload) => Ok(Some(payload)),
            Err(_) => Ok(None),
        }
    }

    /// Appends a node carrying `payload` after the chain's tail.
    ///
    /// The tail is found by walking `next` edges from this node, so the
    /// new node attaches to the true end of the chain no matter which
    /// handle the append goes through. Returns a handle to the new node.
    pub fn append(&self, payload: T) -> Result<Self, ChainError> {
        let mut store = self.store.borrow_mut();
        let index = store.resolve(self.id)?;
        let id = store.append_from(index, payload)?;
        drop(store);
        Ok(self.handle(id))
    }

    /// Prepends a node carrying `payload` before the chain's head.
    ///
    /// The head is found by walking `prev` edges from this node. Returns a
    /// handle to the new node.
    pub fn prepend(&self, payload: T) -> Result<Self, ChainError> {
        let mut store = self.store.borrow_mut();
        let index = store.resolve(self.id)?;
        let id = store.prepend_from(index, payload)?;
        drop(store);
        Ok(self.handle(id))
    }

    /// Hands back the node `offset` steps away, following `next` edges for
    /// positive offsets and `prev` edges for negative ones.
    ///
    /// `at(0)` is a handle to this node. Walking past either end fails with
    /// [`ChainError::OutOfRange`].
    pub fn at(&self, offset: i64) -> Result<Self, ChainError> {
        let store = self.store.borrow();
        let index = store.resolve(self.id)?;
        match store.walk(index, offset) {
            Some(dest) => {
                let id = store.node_id_at(dest);
                drop(store);
                Ok(self.handle(id))
            }
            None => Err(ChainError::OutOfRange { offset }),
        }
    }

    /// Handle to the next node, or `None` at the tail.
    pub fn next(&self) -> Result<Option<Self>, ChainError> {
        let store = self.store.borrow();
        let index = store.resolve(self.id)?;
        let id = store.next_of(index).map(|next| store.node_id_at(next));
        drop(store);
        Ok(id.map(|id| self.handle(id)))
    }

    /// Handle to the previous node, or `None` at the head.
    pub fn prev(&self) -> Result<Option<Self>, ChainError> {
        let store = self.store.borrow();
        let index = store.resolve(self.id)?;
        let id = store.prev_of(index).map(|prev| store.node_id_at(prev));
        drop(store);
        Ok(id.map(|id| self.handle(id)))
    }

    /// Frees this node, splicing its neighbours to each other, and hands
    /// back its payload.
    ///
    /// Other handles to the same node go stale. Handles to the rest of the
    /// chain stay valid.
    pub fn remove(self) -> Result<Option<T>, ChainError> {
        let mut store = self.store.borrow_mut();
        let index = store.resolve(self.id)?;
        Ok(store.remove(index))
    }

    /// Frees the entire chain this node belongs to, payloads included.
    ///
    /// Every handle into the chain goes stale.
    pub fn destroy(self) -> Result<(), ChainError> {
        let mut store = self.store.borrow_mut();
        let index = store.resolve(self.id)?;
        store.destroy_from(index);
        Ok(())
    }
}

impl<T, A: Alloc> Clone for Link<T, A> {
    fn clone(&self) -> Self {
        self.handle(self.id)
    }
}

/// Two handles are equal when they name the same node of the same chain.
impl<T, A: Alloc> PartialEq for Link<T, A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.id == other.id
    }
}

impl<T, A: Alloc> Eq for Link<T, A> {}

impl<T, A: Alloc> fmt::Debug for Link<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("index", &self.id.index())
            .field("generation", &self.id.generation())
            .finish()
    }
}
