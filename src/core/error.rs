//! Error taxonomy for register construction, program execution and sensor encoding.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QsimError>;

/// Errors surfaced synchronously by the operation that detects them.
///
/// Every variant carries enough structure to render a precise message; front
/// ends that need to branch on the failure class should use [`QsimError::kind`]
/// instead of matching on the message text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QsimError {
    /// Register construction with a qubit count outside `1..=max`.
    #[error("invalid register size: {qubit_count} qubits (allowed range 1..={max})")]
    InvalidSize {
        /// Requested qubit count.
        qubit_count: usize,
        /// Configured upper bound.
        max: usize,
    },

    /// Gate name not present in the catalog.
    #[error("unknown gate '{name}'")]
    UnknownGate {
        /// The name that failed to resolve.
        name: String,
    },

    /// Qubit index outside `0..qubit_count`.
    #[error("qubit index {index} out of range for a {qubit_count}-qubit register")]
    QubitIndex {
        /// Offending index.
        index: usize,
        /// Size of the register the index was checked against.
        qubit_count: usize,
    },

    /// Argument rejected on semantic grounds (negative signal, control equal to target, ...).
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Human readable reason.
        message: String,
    },

    /// A program built for one register size was run against another.
    #[error("program expects {program} qubits but the register has {register}")]
    QubitCountMismatch {
        /// Qubit count the program was built for.
        program: usize,
        /// Qubit count of the register it was run against.
        register: usize,
    },

    /// Total probability drifted beyond the configured tolerance.
    #[error("normalization drift: sum |a|^2 = {norm_sqr} (tolerance {tolerance:e})")]
    NormalizationDrift {
        /// Observed sum of squared magnitudes.
        norm_sqr: f64,
        /// Tolerance in force.
        tolerance: f64,
    },

    /// The caller deadline passed between two gate applications.
    #[error("run timed out after {timeout:?} with {applied} operations applied")]
    Timeout {
        /// Number of operations that completed before the deadline check failed.
        applied: usize,
        /// The deadline that was exceeded.
        timeout: Duration,
    },
}

/// Fieldless classification of [`QsimError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSize,
    UnknownGate,
    QubitIndex,
    InvalidArgument,
    QubitCountMismatch,
    NormalizationDrift,
    Timeout,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidSize => "InvalidSizeError",
            ErrorKind::UnknownGate => "UnknownGateError",
            ErrorKind::QubitIndex => "QubitIndexError",
            ErrorKind::InvalidArgument => "InvalidArgumentError",
            ErrorKind::QubitCountMismatch => "QubitCountMismatchError",
            ErrorKind::NormalizationDrift => "NormalizationDriftError",
            ErrorKind::Timeout => "TimeoutError",
        };
        f.write_str(name)
    }
}

impl QsimError {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QsimError::InvalidSize { .. } => ErrorKind::InvalidSize,
            QsimError::UnknownGate { .. } => ErrorKind::UnknownGate,
            QsimError::QubitIndex { .. } => ErrorKind::QubitIndex,
            QsimError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            QsimError::QubitCountMismatch { .. } => ErrorKind::QubitCountMismatch,
            QsimError::NormalizationDrift { .. } => ErrorKind::NormalizationDrift,
            QsimError::Timeout { .. } => ErrorKind::Timeout,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        QsimError::InvalidArgument { message: message.into() }
    }

    pub(crate) fn unknown_gate(name: impl Into<String>) -> Self {
        QsimError::UnknownGate { name: name.into() }
    }
}
