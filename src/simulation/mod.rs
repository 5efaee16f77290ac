// src/simulation/mod.rs

//! Executes a [`Program`] against a [`QuantumRegister`].
//!
//! [`Simulator`] is the entry point; the crate-internal `SimulationEngine` resolves
//! and applies one operation at a time.

mod config;
pub(crate) mod engine;
mod results;

pub use config::SimulatorConfig;
pub use results::Statevector;

use crate::circuits::Program;
use crate::core::{QsimError, QuantumRegister, Result};
use engine::SimulationEngine;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Runs programs synchronously, one gate at a time, in program order.
///
/// A failed run stops at the failing operation and leaves the register exactly as
/// the last successful operation left it. Nothing is rolled back; callers that need
/// atomicity should [`QuantumRegister::snapshot`] first.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with [`SimulatorConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator after validating `config`.
    pub fn with_config(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Allocates a register in `|0...0>`, bounded by the configured `max_qubits`.
    pub fn create_register(&self, qubit_count: usize) -> Result<QuantumRegister> {
        let mut register = QuantumRegister::with_max_qubits(qubit_count, self.config.max_qubits)?;
        register.set_parallel_threshold(self.config.parallel_threshold);
        Ok(register)
    }

    /// Applies every operation of `program` to `register` and returns the final amplitudes.
    ///
    /// # Errors
    /// * `QubitCountMismatch` if the program was built for a different register size
    ///   (checked before anything is applied).
    /// * `UnknownGate`, `QubitIndex`, `InvalidArgument` from the failing operation.
    /// * `NormalizationDrift` under strict normalization.
    pub fn run(&self, program: &Program, register: &mut QuantumRegister) -> Result<Statevector> {
        self.execute(program, register, None)
    }

    /// Like [`Simulator::run`], but checks `timeout` before each gate application and
    /// fails with `Timeout` once it has elapsed. A gate that has started always completes.
    pub fn run_with_timeout(
        &self,
        program: &Program,
        register: &mut QuantumRegister,
        timeout: Duration,
    ) -> Result<Statevector> {
        self.execute(program, register, Some((Instant::now(), timeout)))
    }

    fn execute(
        &self,
        program: &Program,
        register: &mut QuantumRegister,
        deadline: Option<(Instant, Duration)>,
    ) -> Result<Statevector> {
        if program.qubit_count() != register.qubit_count() {
            let err = QsimError::QubitCountMismatch {
                program: program.qubit_count(),
                register: register.qubit_count(),
            };
            warn!(%err, "run rejected");
            return Err(err);
        }

        let mut engine = SimulationEngine::new(register, &self.config);
        for (index, op) in program.operations().enumerate() {
            if let Some((started, timeout)) = deadline {
                if started.elapsed() >= timeout {
                    warn!(applied = index, ?timeout, "run timed out");
                    return Err(QsimError::Timeout { applied: index, timeout });
                }
            }
            if let Err(err) = engine.apply_operation(index, op) {
                warn!(index, op = %op, %err, "run halted");
                return Err(err);
            }
        }

        info!(qubits = register.qubit_count(), operations = program.len(), "run complete");
        Ok(Statevector::new(register.qubit_count(), register.snapshot()))
    }
}
