// src/lib.rs

//! `qsim` - statevector simulation of small quantum circuits
//!
//! A [`QuantumRegister`] holds the `2^n` complex amplitudes of an n-qubit register.
//! A [`Program`] records gate applications by catalog name; the [`Simulator`]
//! resolves each one against the fixed [`Gate`] catalog and applies it in place,
//! pair by pair, without ever building a `2^n x 2^n` matrix.
//!
//! Basis states are indexed big-endian: qubit 0 is the most significant bit.

pub mod core;
pub mod gates;
pub mod circuits;
pub mod simulation;
pub mod sensor;
pub mod session;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{ErrorKind, Matrix2, QsimError, QuantumRegister, Result};
pub use gates::Gate;
pub use circuits::{GateApplication, Placement, Program, ProgramBuilder};
pub use simulation::{Simulator, SimulatorConfig, Statevector};
pub use sensor::{SimulatedSensor, derive_preparation_ops};
pub use session::{Session, build_program, create_register, derive_sensor_preparation, run};
pub use validation::{check_normalization, check_unitary};

// Example 1: Bell state
// Hadamard on qubit 0, then CNOT named on qubit 0 (which flips qubit 1).
/// ```
/// use qsim::{ProgramBuilder, Simulator, QsimError};
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// let simulator = Simulator::new();
/// let mut register = simulator.create_register(2)?;
/// let program = ProgramBuilder::new(2)
///     .gate("Hadamard", 0)
///     .gate("CNOT", 0)
///     .build();
///
/// let state = simulator.run(&program, &mut register)?;
/// println!("{}", program);
/// println!("{}", state);
///
/// let p = state.probabilities();
/// assert!((p[0b00] - 0.5).abs() < 1e-12);
/// assert!(p[0b01].abs() < 1e-12);
/// assert!(p[0b10].abs() < 1e-12);
/// assert!((p[0b11] - 0.5).abs() < 1e-12);
/// assert!((state.amplitudes()[0].re - FRAC_1_SQRT_2).abs() < 1e-12);
/// # Ok::<(), QsimError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: failing fast
// An out-of-range qubit stops the run; earlier gates stay applied.
/// ```
/// use qsim::{ErrorKind, Program, Simulator, QsimError};
///
/// let simulator = Simulator::new();
/// let mut register = simulator.create_register(1)?;
/// let mut program = Program::new(1);
/// program.append("Pauli-X", 0, None);
/// program.append("Hadamard", 4, None);
///
/// let err = simulator.run(&program, &mut register).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::QubitIndex);
/// // the X already happened
/// assert!((register.probabilities()[1] - 1.0).abs() < 1e-12);
/// # Ok::<(), QsimError>(())
/// ```
#[doc(hidden)]
const _: () = ();
