// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod register;

pub use error::{ErrorKind, QsimError, Result};
pub use register::{Matrix2, QuantumRegister};

pub mod constants;
pub use constants::qsim_constants::{
    DEFAULT_MAX_QUBITS, MAX_QUBITS_CEILING, NORM_TOLERANCE, PARALLEL_THRESHOLD, UNITARY_TOLERANCE,
};
