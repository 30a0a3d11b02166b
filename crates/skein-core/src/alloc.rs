//! The allocation capability consulted by every container.
//!
//! Containers never call an allocator for raw memory — their storage is
//! ordinary `Vec`-backed heap memory. What they do instead is ask a
//! capability for *admission* before acquiring storage and *credit* it when
//! storage is released. This keeps the whole workspace free of `unsafe`
//! while preserving the three-entry allocator shape: a refusing capability
//! makes construction and growth fail exactly where a failing `malloc` or
//! `realloc` would have.

use crate::error::AllocError;

/// Admission and accounting capability for container storage.
///
/// Implemented by anything that wants a say in whether a container may
/// acquire memory: the default [`HostAlloc`] admits every request, while
/// test capabilities refuse on cue or meter the traffic. Methods take
/// `&self` so a capability can be held by value inside a container and
/// still use interior mutability for its own bookkeeping.
///
/// Call sites are fixed by the container contracts:
///
/// - `allocate` — one fixed-size charge per object that owns storage: the
///   array's control block at construction, each chain node at creation.
/// - `reallocate` — every array buffer growth; `old_bytes == 0` on the
///   first growth.
/// - `free` — the matching credits on drop, detachment, node removal, and
///   chain destruction. Zero-byte credits are skipped by callers.
///
/// A refused request must leave the caller free to carry on: containers
/// treat refusal as transactional and stay unchanged.
pub trait Alloc {
    /// Request admission for `bytes` of fresh storage.
    fn allocate(&self, bytes: usize) -> Result<(), AllocError>;

    /// Request admission to move a region from `old_bytes` to `new_bytes`.
    ///
    /// Containers only ever grow, but implementations should not rely on
    /// `new_bytes > old_bytes`.
    fn reallocate(&self, old_bytes: usize, new_bytes: usize) -> Result<(), AllocError>;

    /// Credit `bytes` of storage back to the capability.
    ///
    /// Infallible: by the time storage is released there is nothing left
    /// to refuse.
    fn free(&self, bytes: usize);
}

/// The default capability: the host heap, which admits every request.
///
/// Containers parameterised with `HostAlloc` defer entirely to the global
/// allocator; admission is a formality and accounting is discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostAlloc;

impl Alloc for HostAlloc {
    fn allocate(&self, _bytes: usize) -> Result<(), AllocError> {
        Ok(())
    }

    fn reallocate(&self, _old_bytes: usize, _new_bytes: usize) -> Result<(), AllocError> {
        Ok(())
    }

    fn free(&self, _bytes: usize) {}
}
