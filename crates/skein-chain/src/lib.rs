//! Doubly linked chain addressed through free-floating node handles.
//!
//! There is no list container type. A chain is whatever set of nodes is
//! reachable from a [`Link`] handle by following `prev` and `next` edges,
//! and every operation, from payload access to whole-chain teardown, goes
//! through a handle. Nodes live in a generational slab shared by all
//! handles into the same chain, so a handle held across a free goes
//! observably stale instead of dangling.
//!
//! Node footprints are charged to an [`Alloc`](skein_core::Alloc)
//! capability; the default [`HostAlloc`](skein_core::HostAlloc) admits
//! everything.
//!
//! Handles share their store through an `Rc`, so a chain is strictly
//! single-threaded; independent chains may live on different threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod link;

mod store;

// Public re-exports for the primary API surface.
pub use error::ChainError;
pub use link::{Link, NodeId};
