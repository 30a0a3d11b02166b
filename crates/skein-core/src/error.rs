//! The refusal report shared by every capability implementation.

use std::error::Error;
use std::fmt;

/// An allocation capability refused a request.
///
/// Carried inside the container error enums (`ArrayError::Alloc`,
/// `ChainError::Alloc`) so callers can see how large the refused request
/// was. For a `reallocate` refusal, `requested` is the new size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// Number of bytes the container asked for.
    pub requested: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allocation of {} bytes refused", self.requested)
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_request_size() {
        let err = AllocError { requested: 64 };
        assert_eq!(err.to_string(), "allocation of 64 bytes refused");
    }
}
