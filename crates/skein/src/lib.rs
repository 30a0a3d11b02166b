//! Skein: generic in-memory sequence containers with a pluggable allocation
//! capability.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the skein sub-crates. For most users, adding `skein` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! // A contiguous array that grows as elements arrive.
//! let mut numbers: DynArray<u32> = DynArray::new().unwrap();
//! for n in 0..6 {
//!     numbers.push_back(n).unwrap();
//! }
//! assert_eq!(numbers.len(), 6);
//! assert_eq!(numbers.capacity(), 7);
//! assert_eq!(*numbers.get(3).unwrap(), 3);
//!
//! // A chain addressed through free-floating node handles.
//! let mid = Link::new().unwrap();
//! mid.set("b").unwrap();
//! mid.append("c").unwrap();
//! let head = mid.prepend("a").unwrap();
//! assert_eq!(*head.at(2).unwrap().value().unwrap().unwrap(), "c");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `skein-array` | [`DynArray`](array::DynArray), its errors, growth constants |
//! | [`chain`] | `skein-chain` | [`Link`](chain::Link) handles, [`NodeId`](chain::NodeId), chain errors |
//! | [`capability`] | `skein-core` | The [`Alloc`](capability::Alloc) trait, [`HostAlloc`](capability::HostAlloc), allocation errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Contiguous growable array storage (`skein-array`).
///
/// Most users only need [`array::DynArray`] from this module — it is also
/// available in the [`prelude`].
pub use skein_array as array;

/// Doubly linked chains behind free-floating handles (`skein-chain`).
///
/// [`chain::Link`] is the sole way to reach a chain; there is no container
/// object. [`chain::NodeId`] names individual nodes for identity checks.
pub use skein_chain as chain;

/// Allocation capability and shared error types (`skein-core`).
///
/// Containers charge their footprints against an implementation of
/// [`capability::Alloc`]; [`capability::HostAlloc`] is the default that
/// admits everything.
pub use skein_core as capability;

/// Common imports for typical skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
///
/// This imports the two containers, their error types, and the allocation
/// capability surface.
pub mod prelude {
    // Containers
    pub use skein_array::DynArray;
    pub use skein_chain::Link;

    // Errors
    pub use skein_array::ArrayError;
    pub use skein_chain::ChainError;
    pub use skein_core::AllocError;

    // Allocation capability
    pub use skein_core::{Alloc, HostAlloc};
}
