//! Pluggable dense inversion backends.
//!
//! The cache layer never inverts anything itself; it calls whatever
//! [`InverseSolver`] it is handed. [`LuSolver`] is the shipped backend, a thin
//! wrapper over nalgebra's LU factorization. Tests swap in counting or failing
//! solvers the same way.

use crate::cache_error::InverseCacheError;
use nalgebra::DMatrix;

/// Dense matrix inversion capability.
pub trait InverseSolver {
    /// Compute the inverse of `matrix`.
    ///
    /// # Errors
    /// * [`InverseCacheError::NotSquare`] for rectangular input.
    /// * [`InverseCacheError::EmptyMatrix`] for the `0×0` matrix.
    /// * [`InverseCacheError::SingularMatrix`] when no inverse exists to working
    ///   precision.
    fn invert(&self, matrix: &DMatrix<f64>) -> Result<DMatrix<f64>, InverseCacheError>;
}

/// LU-factorization backend with partial pivoting.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuSolver;

impl InverseSolver for LuSolver {
    fn invert(&self, matrix: &DMatrix<f64>) -> Result<DMatrix<f64>, InverseCacheError> {
        if matrix.nrows() != matrix.ncols() {
            return Err(InverseCacheError::NotSquare {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        // nalgebra happily "inverts" a 0×0 matrix; reject it so an unset handle
        // surfaces as a solve failure instead of an empty success.
        if matrix.is_empty() {
            return Err(InverseCacheError::EmptyMatrix);
        }
        matrix
            .clone()
            .lu()
            .try_inverse()
            .ok_or(InverseCacheError::SingularMatrix {
                dim: matrix.nrows(),
            })
    }
}
