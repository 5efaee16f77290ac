// src/sensor/mod.rs

//! Encodes an integer sensor signal as basis-state preparation gates.
//!
//! The signal is read as exactly `qubit_count` binary digits, most significant
//! first, and digit `i` drives qubit `i`. Shorter signals are left-padded with
//! zeros; wider signals keep only their low `qubit_count` bits. Because the
//! register is big-endian, running the derived gates from `|0...0>` lands on
//! basis state `signal mod 2^qubit_count`.

use crate::circuits::GateApplication;
use crate::core::{QsimError, Result};
use crate::gates::Gate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Widest register a [`SimulatedSensor`] can produce signals for (2^62 fits in `i64`).
pub const MAX_SENSOR_QUBITS: usize = 62;

/// Returns one Pauli-X application per qubit whose signal digit is 1, in qubit order.
///
/// Pure: the register is not touched. Fails with `InvalidArgument` for a negative signal.
///
/// ```
/// use qsim::sensor::derive_preparation_ops;
///
/// // 5 = 0b0101 on four qubits flips qubits 1 and 3
/// let ops = derive_preparation_ops(5, 4).unwrap();
/// let qubits: Vec<usize> = ops.iter().map(|op| op.target_qubit).collect();
/// assert_eq!(qubits, [1, 3]);
/// ```
pub fn derive_preparation_ops(signal: i64, qubit_count: usize) -> Result<Vec<GateApplication>> {
    if signal < 0 {
        return Err(QsimError::invalid_argument(format!(
            "sensor signal must be non-negative, got {}",
            signal
        )));
    }
    let bits = signal as u64;
    let ops: Vec<GateApplication> = (0..qubit_count)
        .filter(|&qubit| {
            let position = qubit_count - 1 - qubit;
            position < u64::BITS as usize && (bits >> position) & 1 == 1
        })
        .map(|qubit| GateApplication::new(Gate::PauliX.name(), qubit))
        .collect();
    debug!(signal, qubit_count, flips = ops.len(), "derived sensor preparation");
    Ok(ops)
}

/// A pseudo-random signal source standing in for real sensor hardware.
///
/// Signals are uniform over `[0, 2^qubit_count)`. Seeded sensors are fully
/// reproducible.
pub struct SimulatedSensor {
    rng: StdRng,
    qubit_count: usize,
}

impl SimulatedSensor {
    /// A sensor seeded from the operating system.
    pub fn new(qubit_count: usize) -> Result<Self> {
        Self::check_width(qubit_count)?;
        Ok(Self { rng: StdRng::from_os_rng(), qubit_count })
    }

    /// A deterministic sensor.
    pub fn with_seed(qubit_count: usize, seed: u64) -> Result<Self> {
        Self::check_width(qubit_count)?;
        Ok(Self { rng: StdRng::seed_from_u64(seed), qubit_count })
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Draws the next signal.
    pub fn read(&mut self) -> i64 {
        self.rng.random_range(0..(1i64 << self.qubit_count))
    }

    /// Draws a signal and derives its preparation gates.
    pub fn read_preparation(&mut self) -> Result<(i64, Vec<GateApplication>)> {
        let signal = self.read();
        let ops = derive_preparation_ops(signal, self.qubit_count)?;
        Ok((signal, ops))
    }

    fn check_width(qubit_count: usize) -> Result<()> {
        if qubit_count == 0 || qubit_count > MAX_SENSOR_QUBITS {
            return Err(QsimError::invalid_argument(format!(
                "simulated sensor width must be in 1..={}, got {}",
                MAX_SENSOR_QUBITS, qubit_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flipped(ops: &[GateApplication]) -> Vec<usize> {
        ops.iter().map(|op| op.target_qubit).collect()
    }

    #[test]
    fn test_padding_and_mapping() -> Result<()> {
        assert_eq!(flipped(&derive_preparation_ops(5, 4)?), [1, 3]);
        assert_eq!(flipped(&derive_preparation_ops(1, 3)?), [2]);
        assert_eq!(flipped(&derive_preparation_ops(0b100, 3)?), [0]);
        assert!(derive_preparation_ops(0, 5)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_wide_signal_is_clipped_to_low_bits() -> Result<()> {
        // 0b1_0110 on four qubits keeps 0110
        assert_eq!(flipped(&derive_preparation_ops(0b1_0110, 4)?), [1, 2]);
        // no qubit beyond the register is ever named
        let ops = derive_preparation_ops(i64::MAX, 3)?;
        assert_eq!(flipped(&ops), [0, 1, 2]);
        Ok(())
    }

    #[test]
    fn test_all_ops_are_pauli_x() -> Result<()> {
        for op in derive_preparation_ops(0b1011, 4)? {
            assert_eq!(op.gate()?, Gate::PauliX);
            assert_eq!(op.control_qubit, None);
        }
        Ok(())
    }

    #[test]
    fn test_negative_signal_rejected() {
        assert!(matches!(derive_preparation_ops(-1, 4), Err(QsimError::InvalidArgument { .. })));
    }

    #[test]
    fn test_registers_wider_than_signal() -> Result<()> {
        // qubits whose digit lies past bit 63 are always zero
        assert_eq!(flipped(&derive_preparation_ops(1, 80)?), [79]);
        Ok(())
    }

    #[test]
    fn test_seeded_sensor_is_reproducible() -> Result<()> {
        let mut a = SimulatedSensor::with_seed(6, 42)?;
        let mut b = SimulatedSensor::with_seed(6, 42)?;
        for _ in 0..32 {
            let signal = a.read();
            assert_eq!(signal, b.read());
            assert!((0..64).contains(&signal));
        }
        Ok(())
    }

    #[test]
    fn test_sensor_width_bounds() {
        assert!(SimulatedSensor::with_seed(0, 1).is_err());
        assert!(SimulatedSensor::with_seed(MAX_SENSOR_QUBITS + 1, 1).is_err());
        assert!(SimulatedSensor::new(MAX_SENSOR_QUBITS).is_ok());
    }
}
