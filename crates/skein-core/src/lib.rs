//! Allocation capability and shared error types for the skein containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Alloc`] trait — the three-entry capability (allocate, reallocate,
//! free) that every container consults before touching storage — together
//! with the admit-everything [`HostAlloc`] default and the [`AllocError`]
//! refusal report.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod error;

// Public re-exports for the primary API surface.
pub use alloc::{Alloc, HostAlloc};
pub use error::AllocError;
