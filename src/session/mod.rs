// src/session/mod.rs

//! The call-and-result surface offered to front ends.
//!
//! The free functions mirror the individual operations; [`Session`] bundles one
//! register, one program and one simulator for front ends that drive a single
//! circuit interactively (add gates, inject sensor data, compute, reset).

use crate::circuits::{GateApplication, Program};
use crate::core::{QuantumRegister, Result};
use crate::sensor::derive_preparation_ops;
use crate::simulation::{Simulator, Statevector};
use tracing::{info, warn};

/// Allocates a register of `qubit_count` qubits in `|0...0>`.
pub fn create_register(qubit_count: usize) -> Result<QuantumRegister> {
    Simulator::new().create_register(qubit_count)
}

/// Starts an empty program for a `qubit_count`-qubit register.
pub fn build_program(qubit_count: usize) -> Program {
    Program::new(qubit_count)
}

/// Runs `program` against `register` with the default simulator.
pub fn run(program: &Program, register: &mut QuantumRegister) -> Result<Statevector> {
    Simulator::new().run(program, register)
}

/// Derives the X gates that prepare basis state `signal` on `qubit_count` qubits.
pub fn derive_sensor_preparation(signal: i64, qubit_count: usize) -> Result<Vec<GateApplication>> {
    derive_preparation_ops(signal, qubit_count)
}

/// One register, the program being edited for it, and the simulator that replays it.
#[derive(Debug, Clone)]
pub struct Session {
    simulator: Simulator,
    register: QuantumRegister,
    program: Program,
}

impl Session {
    /// A session over a fresh `qubit_count`-qubit register with the default simulator.
    pub fn new(qubit_count: usize) -> Result<Self> {
        Self::with_simulator(Simulator::new(), qubit_count)
    }

    pub fn with_simulator(simulator: Simulator, qubit_count: usize) -> Result<Self> {
        let register = simulator.create_register(qubit_count)?;
        Ok(Self { simulator, register, program: Program::new(qubit_count) })
    }

    pub fn qubit_count(&self) -> usize {
        self.register.qubit_count()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn register(&self) -> &QuantumRegister {
        &self.register
    }

    /// Appends a gate to the program. Validation is deferred to [`Session::compute`].
    pub fn add_gate(&mut self, gate_name: &str, qubit: usize, control: Option<usize>) {
        self.program.append(gate_name, qubit, control);
    }

    /// Clears the program and returns the register to `|0...0>`.
    pub fn reset_circuit(&mut self) {
        info!(qubits = self.qubit_count(), dropped = self.program.len(), "resetting circuit");
        self.program.clear();
        self.register.reset();
    }

    /// Appends the preparation gates for `signal`; returns how many were added.
    pub fn simulate_sensor_data(&mut self, signal: i64) -> Result<usize> {
        let ops = derive_preparation_ops(signal, self.qubit_count())?;
        let added = ops.len();
        self.program.extend(ops);
        Ok(added)
    }

    /// Replays the whole program from `|0...0>` and returns the resulting amplitudes.
    ///
    /// Repeated calls on an unchanged program give the same result. On failure the
    /// register holds the partial state reached before the failing operation.
    pub fn compute(&mut self) -> Result<Statevector> {
        self.register.reset();
        self.simulator.run(&self.program, &mut self.register).inspect_err(|err| {
            warn!(kind = %err.kind(), %err, "compute failed");
        })
    }

    /// The register's current amplitudes, without running anything.
    pub fn statevector(&self) -> Statevector {
        Statevector::new(self.register.qubit_count(), self.register.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QsimError;
    use num_complex::Complex64;

    #[test]
    fn test_compute_is_idempotent() -> Result<()> {
        let mut session = Session::new(2)?;
        session.add_gate("Pauli-X", 0, None);
        let first = session.compute()?;
        let second = session.compute()?;
        assert_eq!(first, second);
        assert_eq!(first.amplitudes()[2], Complex64::new(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_reset_circuit_clears_program_and_state() -> Result<()> {
        let mut session = Session::new(1)?;
        session.add_gate("X", 0, None);
        session.compute()?;
        session.reset_circuit();
        assert!(session.program().is_empty());
        assert_eq!(session.statevector().amplitudes()[0], Complex64::new(1.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_sensor_data_appends_ops() -> Result<()> {
        let mut session = Session::new(3)?;
        assert_eq!(session.simulate_sensor_data(0b101)?, 2);
        let sv = session.compute()?;
        assert_eq!(sv.amplitudes()[0b101], Complex64::new(1.0, 0.0));
        assert!(session.simulate_sensor_data(-4).is_err());
        assert_eq!(session.program().len(), 2);
        Ok(())
    }

    #[test]
    fn test_free_functions() -> Result<()> {
        let mut register = create_register(2)?;
        let mut program = build_program(2);
        program.extend(derive_sensor_preparation(3, 2)?);
        let sv = run(&program, &mut register)?;
        assert_eq!(sv.amplitudes()[3], Complex64::new(1.0, 0.0));
        assert!(matches!(create_register(0), Err(QsimError::InvalidSize { .. })));
        Ok(())
    }
}
