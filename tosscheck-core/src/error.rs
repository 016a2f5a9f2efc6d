//! Error types for arbitrary construction.

use thiserror::Error;

/// Configuration errors raised synchronously when an arbitrary is built.
///
/// Evaluation outcomes (a predicate returning false) are never errors; they
/// travel as data inside the [`crate::runner::CheckReport`]. Invalid ranges
/// are rejected here rather than silently clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TosscheckError {
    /// A sequence arbitrary was asked for `min_length > max_length`.
    #[error("invalid length range: min_length {min} exceeds max_length {max}")]
    InvalidLengthRange { min: usize, max: usize },

    /// An integer arbitrary was asked for `min > max`.
    #[error("invalid integer range: min {min} exceeds max {max}")]
    InvalidIntegerRange { min: i64, max: i64 },

    /// A subarray arbitrary was asked for bounds outside the source length.
    #[error("invalid subarray bounds: [{min}, {max}] not within 0..={source_len}")]
    InvalidSubarrayBounds {
        min: usize,
        max: usize,
        source_len: usize,
    },
}

/// Result type for tosscheck construction operations.
pub type Result<T> = std::result::Result<T, TosscheckError>;
