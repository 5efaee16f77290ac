// src/simulation/config.rs

use crate::core::{
    DEFAULT_MAX_QUBITS, MAX_QUBITS_CEILING, NORM_TOLERANCE, PARALLEL_THRESHOLD, QsimError, Result,
};
use serde::{Deserialize, Serialize};

/// Tunables for a [`crate::Simulator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Largest register `create_register` will allocate. Capped at [`MAX_QUBITS_CEILING`].
    pub max_qubits: usize,
    /// Allowed deviation of the total probability from 1 under strict checking.
    pub norm_tolerance: f64,
    /// Check normalization after every gate and fail the run on drift.
    pub strict_normalization: bool,
    /// Registers with at least this many amplitudes apply gates on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            norm_tolerance: NORM_TOLERANCE,
            strict_normalization: false,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl SimulatorConfig {
    /// Rejects a zero or over-ceiling `max_qubits` and non-positive tolerances.
    pub fn validate(&self) -> Result<()> {
        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS_CEILING {
            return Err(QsimError::invalid_argument(format!(
                "max_qubits must be in 1..={}, got {}",
                MAX_QUBITS_CEILING, self.max_qubits
            )));
        }
        if !self.norm_tolerance.is_finite() || self.norm_tolerance <= 0.0 {
            return Err(QsimError::invalid_argument(format!(
                "norm_tolerance must be positive and finite, got {}",
                self.norm_tolerance
            )));
        }
        Ok(())
    }
}
