//! Test fixtures for skein container development.
//!
//! Provides two mock allocation capabilities:
//!
//! - [`FailingAlloc`] — refuses deterministically after N admitted requests.
//! - [`MeteredAlloc`] — admits everything and records calls and held bytes.
//!
//! Both share their counters across clones, so a fixture handed to a
//! container by value can still be inspected through a clone kept outside.
//! Counters are `Cell`s behind an `Rc`: the containers are single-threaded,
//! so there is nothing for atomics to buy here.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

use skein_core::{Alloc, AllocError};

/// Refuses deterministically after a configurable number of admitted
/// requests.
///
/// Useful for testing that construction and growth fail cleanly: the first
/// `admit` calls to [`allocate`](Alloc::allocate) or
/// [`reallocate`](Alloc::reallocate) succeed, every later one is refused.
/// [`free`](Alloc::free) never counts against the budget.
#[derive(Clone, Debug)]
pub struct FailingAlloc {
    admit: usize,
    seen: Rc<Cell<usize>>,
}

impl FailingAlloc {
    /// Create a capability that admits `admit` requests then refuses.
    pub fn new(admit: usize) -> Self {
        Self {
            admit,
            seen: Rc::new(Cell::new(0)),
        }
    }

    /// How many admission requests have been made so far.
    pub fn calls(&self) -> usize {
        self.seen.get()
    }

    /// Reset the request counter.
    pub fn reset(&self) {
        self.seen.set(0);
    }

    fn admit_next(&self, requested: usize) -> Result<(), AllocError> {
        let n = self.seen.get();
        self.seen.set(n + 1);
        if n >= self.admit {
            return Err(AllocError { requested });
        }
        Ok(())
    }
}

impl Alloc for FailingAlloc {
    fn allocate(&self, bytes: usize) -> Result<(), AllocError> {
        self.admit_next(bytes)
    }

    fn reallocate(&self, _old_bytes: usize, new_bytes: usize) -> Result<(), AllocError> {
        self.admit_next(new_bytes)
    }

    fn free(&self, _bytes: usize) {}
}

#[derive(Debug, Default)]
struct Meter {
    allocates: Cell<usize>,
    reallocates: Cell<usize>,
    frees: Cell<usize>,
    held: Cell<usize>,
}

/// Admits every request and records what was asked for.
///
/// Useful for asserting that a container's charges and credits balance:
/// [`held_bytes`](MeteredAlloc::held_bytes) should return to zero once the
/// container and its contents are gone.
#[derive(Clone, Debug, Default)]
pub struct MeteredAlloc {
    meter: Rc<Meter>,
}

impl MeteredAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `allocate` was called.
    pub fn allocate_calls(&self) -> usize {
        self.meter.allocates.get()
    }

    /// How many times `reallocate` was called.
    pub fn reallocate_calls(&self) -> usize {
        self.meter.reallocates.get()
    }

    /// How many times `free` was called.
    pub fn free_calls(&self) -> usize {
        self.meter.frees.get()
    }

    /// Bytes currently charged and not yet credited back.
    pub fn held_bytes(&self) -> usize {
        self.meter.held.get()
    }
}

impl Alloc for MeteredAlloc {
    fn allocate(&self, bytes: usize) -> Result<(), AllocError> {
        self.meter.allocates.set(self.meter.allocates.get() + 1);
        self.meter.held.set(self.meter.held.get() + bytes);
        Ok(())
    }

    fn reallocate(&self, old_bytes: usize, new_bytes: usize) -> Result<(), AllocError> {
        self.meter.reallocates.set(self.meter.reallocates.get() + 1);
        let held = self.meter.held.get().saturating_sub(old_bytes);
        self.meter.held.set(held + new_bytes);
        Ok(())
    }

    fn free(&self, bytes: usize) {
        self.meter.frees.set(self.meter.frees.get() + 1);
        self.meter.held.set(self.meter.held.get().saturating_sub(bytes));
    }
}
