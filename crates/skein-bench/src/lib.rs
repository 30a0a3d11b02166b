//! Benchmark profiles and helpers for the skein containers.
//!
//! Provides deterministic builders used by the criterion benches:
//!
//! - [`array_of`]: a `DynArray<u32>` holding `0..n`, grown organically.
//! - [`chain_of`]: a chain of `n` nodes payloaded `0..n`, handle at the head.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skein_array::DynArray;
use skein_chain::Link;

/// Build an array holding `0..n`, grown through repeated `push_back` so the
/// growth curve is part of what gets measured.
pub fn array_of(n: u32) -> DynArray<u32> {
    let mut array = DynArray::new().unwrap();
    for value in 0..n {
        array.push_back(value).unwrap();
    }
    array
}

/// Build a chain of `n` nodes payloaded `0..n`, returning the head handle.
///
/// Appends go through the freshest tail handle so construction stays linear
/// rather than paying a full tail walk per node.
pub fn chain_of(n: u32) -> Link<u32> {
    let head = Link::new().unwrap();
    head.set(0).unwrap();
    let mut tail = head.clone();
    for value in 1..n {
        tail = tail.append(value).unwrap();
    }
    head
}
