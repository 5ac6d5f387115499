//! Mutable matrix handle with a single cached-inverse slot.
//!
//! This module provides [`MatrixHandle`], the stateful wrapper at the centre of the
//! crate: it owns one dense matrix and an optional cached inverse, and clears the
//! cache whenever the matrix is replaced. The handle being the single point of
//! mutation for the value is what makes the cached inverse trustworthy.

use crate::cache::InvalidateCache;
use nalgebra::DMatrix;

/// A handle owning a dense matrix and its optionally cached inverse.
///
/// The cache slot obeys one invariant: whenever it is populated, it holds the
/// inverse of the value *at the time it was computed*. Every call to
/// [`set_value`](Self::set_value) re-enters the empty state, so a stale inverse
/// can never be observed through this API.
///
/// The slot is populated by [`solve_cached`](crate::solve::solve_cached); the raw
/// [`set_cached_inverse`](Self::set_cached_inverse) primitive exists for solver
/// code and performs no checking of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixHandle {
    /// The current matrix, owned exclusively by the handle.
    value: DMatrix<f64>,
    /// Cached inverse of `value`, or `None` since the last replacement.
    inverse: Option<DMatrix<f64>>,
}

impl Default for MatrixHandle {
    fn default() -> Self {
        Self::new(DMatrix::zeros(0, 0))
    }
}

impl MatrixHandle {
    /// Creates a handle holding `value` with an empty cache slot.
    ///
    /// No invertibility or squareness validation happens here; all of that is
    /// deferred to solve time.
    ///
    /// # Example
    /// ```rust
    /// use inverse_cache::handle::MatrixHandle;
    /// use nalgebra::DMatrix;
    /// let handle = MatrixHandle::new(DMatrix::identity(3, 3));
    /// assert!(handle.cached_inverse().is_none());
    /// ```
    pub fn new(value: DMatrix<f64>) -> Self {
        Self {
            value,
            inverse: None,
        }
    }

    /// Borrow the current matrix. Does not mutate state.
    #[inline]
    pub fn value(&self) -> &DMatrix<f64> {
        &self.value
    }

    /// Replaces the current matrix and clears the cached inverse.
    ///
    /// The clear is unconditional: replacing a value with an equal matrix still
    /// empties the cache slot. Clearing an already-empty slot is a no-op, not an
    /// error.
    ///
    /// # Example
    /// ```rust
    /// use inverse_cache::handle::MatrixHandle;
    /// use nalgebra::DMatrix;
    /// let mut handle = MatrixHandle::new(DMatrix::identity(2, 2));
    /// handle.set_cached_inverse(DMatrix::identity(2, 2));
    /// handle.set_value(DMatrix::identity(2, 2));
    /// assert!(handle.cached_inverse().is_none());
    /// ```
    pub fn set_value(&mut self, value: DMatrix<f64>) {
        self.value = value;
        self.invalidate_cache();
        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    /// The cached inverse, or `None` if nothing has been computed since the last
    /// [`set_value`](Self::set_value).
    #[inline]
    pub fn cached_inverse(&self) -> Option<&DMatrix<f64>> {
        self.inverse.as_ref()
    }

    /// Stores `inverse` into the cache slot unconditionally.
    ///
    /// This is a raw cache-write primitive, not a computation: no dimension check
    /// against the current value is performed, and the caller is trusted to supply
    /// a matching inverse.
    pub fn set_cached_inverse(&mut self, inverse: DMatrix<f64>) {
        self.inverse = Some(inverse);
    }

    #[cfg(debug_assertions)]
    pub fn debug_assert_consistent(&self) {
        if let Some(inverse) = &self.inverse {
            debug_assert!(
                inverse.shape() == self.value.shape(),
                "cached inverse shape {:?} does not match value shape {:?}",
                inverse.shape(),
                self.value.shape()
            );
        }
    }
}

impl InvalidateCache for MatrixHandle {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.inverse = None;
    }
}
