// src/core/register.rs

use super::constants::qsim_constants::{DEFAULT_MAX_QUBITS, MAX_QUBITS_CEILING, PARALLEL_THRESHOLD};
use super::error::{QsimError, Result};
use num_complex::Complex64;
use num_traits::{One, Zero};
use rayon::prelude::*;
use std::fmt;
use tracing::trace;

/// A 2x2 complex matrix acting on a single qubit, row-major.
pub type Matrix2 = [[Complex64; 2]; 2];

/// The joint state of an n-qubit register as a vector of `2^n` complex amplitudes.
///
/// Basis-state indexing is big-endian: qubit 0 is the most significant bit of the
/// index and qubit `n - 1` the least significant. For two qubits, index 1 is `|01>`,
/// i.e. qubit 1 set.
///
/// Gate application never renormalizes. Accumulated floating-point drift is left in
/// the amplitudes so that it can be observed (see [`crate::validation`]).
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumRegister {
    qubit_count: usize,
    amplitudes: Vec<Complex64>,
    /// Registers with at least this many amplitudes run the kernels on the rayon pool.
    parallel_threshold: usize,
}

impl QuantumRegister {
    /// Creates a register in `|0...0>` bounded by [`DEFAULT_MAX_QUBITS`].
    pub fn new(qubit_count: usize) -> Result<Self> {
        Self::with_max_qubits(qubit_count, DEFAULT_MAX_QUBITS)
    }

    /// Creates a register in `|0...0>`, failing with `InvalidSize` unless
    /// `1 <= qubit_count <= max_qubits`. The bound itself is capped at
    /// [`MAX_QUBITS_CEILING`].
    pub fn with_max_qubits(qubit_count: usize, max_qubits: usize) -> Result<Self> {
        let max = max_qubits.min(MAX_QUBITS_CEILING);
        if qubit_count == 0 || qubit_count > max {
            return Err(QsimError::InvalidSize { qubit_count, max });
        }
        let dim = 1usize << qubit_count;
        let mut amplitudes = vec![Complex64::zero(); dim];
        amplitudes[0] = Complex64::one();
        Ok(Self {
            qubit_count,
            amplitudes,
            parallel_threshold: PARALLEL_THRESHOLD,
        })
    }

    pub(crate) fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Number of qubits; fixed at creation.
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Number of amplitudes (`2^qubit_count`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the current amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Copy of the current amplitudes.
    pub fn snapshot(&self) -> Vec<Complex64> {
        self.amplitudes.clone()
    }

    /// Sum of squared magnitudes. Equals 1 up to rounding for any state reached by gates.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Squared magnitude of every amplitude, in basis-index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Returns the register to `|0...0>` in place.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::zero());
        self.amplitudes[0] = Complex64::one();
    }

    /// Applies `matrix` to every amplitude pair that differs only in bit `qubit`.
    pub fn apply_single_qubit_gate(&mut self, matrix: &Matrix2, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        let stride = self.stride(qubit);
        let [[m00, m01], [m10, m11]] = *matrix;
        let parallel = self.use_parallel();
        apply_pairs(&mut self.amplitudes, stride, parallel, |_, a0, a1| {
            let (x0, x1) = (*a0, *a1);
            *a0 = m00 * x0 + m01 * x1;
            *a1 = m10 * x0 + m11 * x1;
        });
        Ok(())
    }

    /// Applies `matrix` to the `target` pairs of every basis index whose `control` bit is 1.
    /// Pairs with the control bit clear are untouched.
    pub fn apply_controlled_gate(&mut self, matrix: &Matrix2, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QsimError::invalid_argument(format!(
                "control and target must differ (both are qubit {})",
                control
            )));
        }
        let control_mask = self.stride(control);
        let stride = self.stride(target);
        let [[m00, m01], [m10, m11]] = *matrix;
        let parallel = self.use_parallel();
        apply_pairs(&mut self.amplitudes, stride, parallel, |index, a0, a1| {
            if index & control_mask == 0 {
                return;
            }
            let (x0, x1) = (*a0, *a1);
            *a0 = m00 * x0 + m01 * x1;
            *a1 = m10 * x0 + m11 * x1;
        });
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_amplitudes(&mut self, amplitudes: Vec<Complex64>) -> Result<()> {
        if amplitudes.len() != self.dim() {
            return Err(QsimError::invalid_argument(format!(
                "expected {} amplitudes, got {}",
                self.dim(),
                amplitudes.len()
            )));
        }
        self.amplitudes = amplitudes;
        Ok(())
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.qubit_count {
            return Err(QsimError::QubitIndex { index: qubit, qubit_count: self.qubit_count });
        }
        Ok(())
    }

    /// Distance between the two members of a pair for `qubit` (big-endian bit position).
    fn stride(&self, qubit: usize) -> usize {
        1 << (self.qubit_count - 1 - qubit)
    }

    fn use_parallel(&self) -> bool {
        let parallel = self.dim() >= self.parallel_threshold;
        trace!(dim = self.dim(), parallel, "selecting gate kernel");
        parallel
    }
}

/// Visits every `(i, i + stride)` pair with bit `stride` clear in `i`.
///
/// The vector is cut into blocks of `2 * stride`; the lower half of each block pairs
/// with the upper half. Blocks and pairs are disjoint, so the parallel path needs no
/// synchronization beyond the join at the end of the call.
fn apply_pairs<F>(amplitudes: &mut [Complex64], stride: usize, parallel: bool, update: F)
where
    F: Fn(usize, &mut Complex64, &mut Complex64) + Send + Sync,
{
    let block = stride << 1;
    if parallel {
        amplitudes.par_chunks_mut(block).enumerate().for_each(|(b, chunk)| {
            let base = b * block;
            let (lo, hi) = chunk.split_at_mut(stride);
            lo.par_iter_mut()
                .zip(hi.par_iter_mut())
                .enumerate()
                .for_each(|(j, (a0, a1))| update(base + j, a0, a1));
        });
    } else {
        for (b, chunk) in amplitudes.chunks_mut(block).enumerate() {
            let base = b * block;
            let (lo, hi) = chunk.split_at_mut(stride);
            for (j, (a0, a1)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                update(base + j, a0, a1);
            }
        }
    }
}

impl fmt::Display for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register<{}>[", self.qubit_count)?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
