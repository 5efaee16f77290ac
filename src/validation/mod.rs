// src/validation/mod.rs

//! Numeric checks for amplitude vectors and gate matrices.

use crate::core::{NORM_TOLERANCE, QsimError, Result, UNITARY_TOLERANCE};
use num_complex::Complex64;

/// Sum of squared magnitudes of `amplitudes`.
pub fn norm_sqr(amplitudes: &[Complex64]) -> f64 {
    amplitudes.iter().map(|c| c.norm_sqr()).sum()
}

/// Checks that the amplitudes are normalized (sum of squared magnitudes ≈ 1.0).
///
/// # Arguments
/// * `amplitudes` - The amplitude vector to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QsimError::NormalizationDrift)` otherwise.
pub fn check_normalization(amplitudes: &[Complex64], tolerance: Option<f64>) -> Result<()> {
    let tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = norm_sqr(amplitudes);
    if (norm_sqr - 1.0).abs() > tolerance || !norm_sqr.is_finite() {
        Err(QsimError::NormalizationDrift { norm_sqr, tolerance })
    } else {
        Ok(())
    }
}

/// Checks that a square matrix satisfies `U * U^dagger = I` element-wise within `tolerance`
/// (default [`UNITARY_TOLERANCE`]).
///
/// Fails with `InvalidArgument` for non-square input or a violated identity entry.
pub fn check_unitary(matrix: &[Vec<Complex64>], tolerance: Option<f64>) -> Result<()> {
    let tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let n = matrix.len();
    if n == 0 || matrix.iter().any(|row| row.len() != n) {
        return Err(QsimError::invalid_argument("matrix must be square and non-empty"));
    }

    for i in 0..n {
        for j in 0..n {
            // (U U^dagger)_ij = sum_k U_ik * conj(U_jk)
            let entry: Complex64 = (0..n).map(|k| matrix[i][k] * matrix[j][k].conj()).sum();
            let expected = if i == j { 1.0 } else { 0.0 };
            let deviation = (entry - Complex64::new(expected, 0.0)).norm();
            if deviation > tolerance {
                return Err(QsimError::invalid_argument(format!(
                    "matrix is not unitary: (U U^dagger)[{}][{}] = {:.6} deviates by {:.3e}",
                    i, j, entry, deviation
                )));
            }
        }
    }
    Ok(())
}
