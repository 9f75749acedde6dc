//! Error types for the pool, the strategy selector and verification.

use thiserror::Error;

/// Failures from the buffer pool.
///
/// Neither variant leaves the pool partially mutated: a failed `create`
/// yields no pool at all, and a failed `allocate` leaves the cursor where
/// it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The single backing reservation could not be made.
    #[error("failed to reserve {requested_bytes} bytes for pool")]
    Reservation { requested_bytes: usize },

    /// Not enough room left in the pool for the request.
    #[error("pool exhausted: requested {requested} elements, {remaining} remaining")]
    Exhausted { requested: usize, remaining: usize },
}

/// Startup configuration faults. Reported before any buffer work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{0}' (expected naive, vectorized or vectorized-prefetch)")]
    UnknownStrategy(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid number '{value}' for {flag}")]
    InvalidNumber { flag: String, value: String },

    #[error("{0} must be greater than zero")]
    ZeroDimension(&'static str),

    #[error("{width}x{height} matrix is too large to allocate")]
    TooLarge { width: usize, height: usize },

    #[error("unknown argument '{0}'")]
    UnknownFlag(String),
}

/// A transpose produced the wrong output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("{strategy}: mismatch at index {index}: expected {expected}, got {actual}")]
    Mismatch {
        strategy: &'static str,
        index: usize,
        expected: i32,
        actual: i32,
    },
}
