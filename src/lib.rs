//! # inverse-cache
//!
//! inverse-cache is a small Rust library that memoizes the inverse of a dense matrix
//! behind a mutable handle. A caller repeatedly asks for the inverse of "the same"
//! matrix during an interactive session; the handle guarantees the factorization runs
//! at most once between any two replacements of the underlying value.
//!
//! ## Features
//! - [`MatrixHandle`](handle::MatrixHandle): owns one `DMatrix<f64>` plus a single
//!   cached-inverse slot, cleared on every value replacement
//! - [`solve_cached`](solve::solve_cached): consult-then-compute solve operation over
//!   a handle, with hit/miss diagnostics on the `log` facade
//! - Pluggable inversion backends via [`InverseSolver`](solver::InverseSolver);
//!   [`LuSolver`](solver::LuSolver) ships as the default, backed by nalgebra's LU
//!   factorization
//! - Non-panicking error handling throughout via [`InverseCacheError`](cache_error::InverseCacheError)
//!
//! ## Determinism
//!
//! Inversion is deterministic for a given value, so a populated cache slot always
//! reproduces the matrix the solver returned. Benches fix RNG seeds explicitly to
//! keep runs reproducible.
//!
//! ## Usage
//! Add `inverse-cache` as a dependency in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inverse-cache = "0.1"
//! ```
//!
//! ```rust
//! use inverse_cache::prelude::*;
//! use nalgebra::DMatrix;
//!
//! let mut handle = MatrixHandle::new(DMatrix::from_row_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]));
//! let inv = solve_cached(&mut handle, &LuSolver)?;          // computes
//! let again = solve_cached(&mut handle, &LuSolver)?;        // served from cache
//! assert_eq!(inv, again);
//! # Ok::<(), inverse_cache::cache_error::InverseCacheError>(())
//! ```

// Re-export our major subsystems:
pub mod cache;
pub mod cache_error;
pub mod handle;
pub mod solve;
pub mod solver;

pub use cache::InvalidateCache;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::cache::InvalidateCache;
    pub use crate::cache_error::InverseCacheError;
    pub use crate::handle::MatrixHandle;
    pub use crate::solve::solve_cached;
    pub use crate::solver::{InverseSolver, LuSolver};
}
