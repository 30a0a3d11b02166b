//! Error type for array operations.

use skein_core::AllocError;
use std::error::Error;
use std::fmt;

/// Errors reported by [`DynArray`](crate::DynArray) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The element type has zero size, so no stride can address storage.
    /// Rejected at construction; every live array has a positive stride.
    ZeroSizedElement,
    /// An initial reservation of zero capacity was requested. Reserving
    /// zero is only meaningful (and a no-op) once capacity exists.
    ZeroReserve,
    /// A position lies outside the valid range for the operation.
    OutOfRange {
        /// The offending position.
        pos: usize,
        /// Logical length of the array at the time of the call.
        len: usize,
    },
    /// The allocation capability refused a storage request. The array is
    /// unchanged.
    Alloc(AllocError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSizedElement => write!(f, "element type has zero size"),
            Self::ZeroReserve => write!(f, "initial reservation of zero capacity"),
            Self::OutOfRange { pos, len } => {
                write!(f, "position {pos} out of range for length {len}")
            }
            Self::Alloc(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocError> for ArrayError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position_and_length() {
        let err = ArrayError::OutOfRange { pos: 7, len: 3 };
        assert_eq!(err.to_string(), "position 7 out of range for length 3");
    }

    #[test]
    fn alloc_variant_exposes_source() {
        let err = ArrayError::from(AllocError { requested: 128 });
        assert!(matches!(err, ArrayError::Alloc(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "allocation of 128 bytes refused");
    }
}
