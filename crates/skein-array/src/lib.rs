//! Contiguous growable array with a pluggable allocation capability.
//!
//! [`DynArray<T, A>`] stores `T`s in one contiguous buffer and exposes
//! positional insert/erase with shifting, push/pop at both ends, explicit
//! reserve/resize/clear, and slice-based introspection. The capability `A`
//! (defaulting to [`skein_core::HostAlloc`]) is consulted before any
//! storage is acquired, so callers can inject refusal or metering.
//!
//! # Growth policy
//!
//! Inserting into a full array grows the buffer geometrically: the first
//! allocation holds [`INITIAL_CAPACITY`] elements, each later growth
//! multiplies capacity by 1.5 (integer arithmetic, strictly increasing).
//! `reserve` grows to exactly the requested capacity and never shrinks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;

// Public re-exports for the primary API surface.
pub use array::{DynArray, INITIAL_CAPACITY};
pub use error::ArrayError;
