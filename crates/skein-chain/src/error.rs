//! Error types for chain operations.

use skein_core::AllocError;
use std::error::Error;
use std::fmt;

/// Errors surfaced by [`Link`](crate::link::Link) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// A signed walk ran off either end of the chain.
    OutOfRange {
        /// The offset that was requested from the starting node.
        offset: i64,
    },
    /// The handle refers to a node that has since been freed.
    ///
    /// Slots are recycled under a new generation, so a stale handle can
    /// never be mistaken for a handle to the slot's next occupant.
    StaleNode {
        /// Generation recorded in the handle when it was minted.
        handle_generation: u32,
        /// Generation the slot holds now.
        slot_generation: u32,
    },
    /// The allocation capability refused to admit a new node.
    Alloc(AllocError),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { offset } => {
                write!(f, "offset {offset} walks off the end of the chain")
            }
            Self::StaleNode {
                handle_generation,
                slot_generation,
            } => write!(
                f,
                "stale node handle (generation {handle_generation}, slot now at {slot_generation})"
            ),
            Self::Alloc(err) => write!(f, "node allocation failed: {err}"),
        }
    }
}

impl Error for ChainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocError> for ChainError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}
