// src/simulation/engine.rs
use crate::circuits::{GateApplication, Placement};
use crate::core::{QuantumRegister, Result};
use crate::simulation::SimulatorConfig;
use crate::validation::check_normalization;
use tracing::debug;

/// Applies resolved gate applications to one register.
/// Borrowed mutably for the duration of a single run; nothing else touches the
/// amplitudes while it is alive.
pub(crate) struct SimulationEngine<'a> {
    register: &'a mut QuantumRegister,
    config: &'a SimulatorConfig,
}

impl<'a> SimulationEngine<'a> {
    pub(crate) fn new(register: &'a mut QuantumRegister, config: &'a SimulatorConfig) -> Self {
        register.set_parallel_threshold(config.parallel_threshold);
        Self { register, config }
    }

    /// Resolves `op` and applies it. On error the register holds the state left by
    /// the previous operation: resolution and range checks happen before any
    /// amplitude is written.
    pub(crate) fn apply_operation(&mut self, index: usize, op: &GateApplication) -> Result<()> {
        let gate = op.gate()?;
        let matrix = gate.kernel();
        let placement = op.placement(gate, self.register.qubit_count())?;
        debug!(index, gate = gate.name(), ?placement, "applying operation");

        match placement {
            Placement::Single { target } => self.register.apply_single_qubit_gate(&matrix, target)?,
            Placement::Controlled { control, target } => {
                self.register.apply_controlled_gate(&matrix, control, target)?
            }
        }

        if self.config.strict_normalization {
            check_normalization(self.register.amplitudes(), Some(self.config.norm_tolerance))?;
        }
        Ok(())
    }
}
