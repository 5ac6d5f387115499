//! Cached solve operation over a [`MatrixHandle`].
//!
//! [`solve_cached`] consults the handle's cache slot before falling back to the
//! injected [`InverseSolver`]. A hit is observable on the `log` facade at `debug`
//! level; a miss logs at `trace` level before invoking the solver.
//!
//! # Errors
//! * [`InverseCacheError::SingularMatrix`]: the current value has no inverse. The
//!   cache slot is left empty; a later corrected `set_value` + solve succeeds.
//! * [`InverseCacheError::NotSquare`] / [`InverseCacheError::EmptyMatrix`]: the
//!   current value is not valid inversion input. Same cache behavior.

use crate::cache_error::InverseCacheError;
use crate::handle::MatrixHandle;
use crate::solver::InverseSolver;
use nalgebra::DMatrix;

/// Return the inverse of the handle's current value, computing it only when
/// necessary.
///
/// On a populated cache slot this returns the stored inverse without touching the
/// value or the solver. On an empty slot it invokes `solver` on the current value,
/// stores the result, and returns it. Solver failures propagate unrecovered — no
/// retry, no fallback value, no partial cache entry.
///
/// ## Complexity
/// - Hit: **O(n²)** (clone of the cached inverse).
/// - Miss: the solver's cost, **O(n³)** for [`LuSolver`](crate::solver::LuSolver).
///
/// # Errors
/// Whatever `solver.invert` reports for the current value; see the module docs.
///
/// # Example
/// ```rust
/// use inverse_cache::handle::MatrixHandle;
/// use inverse_cache::solve::solve_cached;
/// use inverse_cache::solver::LuSolver;
/// use nalgebra::DMatrix;
///
/// let mut handle = MatrixHandle::new(DMatrix::from_row_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]));
/// let inv = solve_cached(&mut handle, &LuSolver)?;
/// assert_eq!(solve_cached(&mut handle, &LuSolver)?, inv);
/// # Ok::<(), inverse_cache::cache_error::InverseCacheError>(())
/// ```
pub fn solve_cached<S>(
    handle: &mut MatrixHandle,
    solver: &S,
) -> Result<DMatrix<f64>, InverseCacheError>
where
    S: InverseSolver + ?Sized,
{
    #[cfg(debug_assertions)]
    handle.debug_assert_consistent();

    if let Some(inverse) = handle.cached_inverse() {
        log::debug!(
            "solve_cached: reusing cached inverse ({}x{})",
            inverse.nrows(),
            inverse.ncols()
        );
        return Ok(inverse.clone());
    }

    log::trace!(
        "solve_cached: cache empty, inverting current value ({}x{})",
        handle.value().nrows(),
        handle.value().ncols()
    );
    let inverse = solver.invert(handle.value())?;
    handle.set_cached_inverse(inverse.clone());
    Ok(inverse)
}
