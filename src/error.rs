//! Error types for tabulation and noisy release.

use thiserror::Error;

/// Error variants for tally operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structural precondition was violated (empty or zero field sizes,
    /// mismatched row length, out-of-range value, bad axis, bad scale).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested row count is not positive.
    #[error("invalid row count: {0} (must be > 0)")]
    InvalidCount(usize),
}

/// A specialized Result type for tally operations.
pub type Result<T> = std::result::Result<T, Error>;
