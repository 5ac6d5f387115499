//! InverseCacheError: Unified error type for inverse-cache public APIs
//!
//! This error type is used throughout the inverse-cache library to provide robust,
//! non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for inverse-cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InverseCacheError {
    /// The current value is singular to working precision and has no inverse.
    #[error("matrix is singular to working precision ({dim}x{dim})")]
    SingularMatrix {
        /// Dimension of the offending square matrix.
        dim: usize,
    },
    /// Inversion requested for a rectangular matrix.
    #[error("matrix must be square for inversion, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },
    /// The handle still holds the empty `0×0` matrix (no value has been set).
    #[error("handle holds an empty matrix; set a value before solving")]
    EmptyMatrix,
}
