//! Numeric constants shared by the register, the gate catalog and validation.

/// Limits and tolerances used when no explicit configuration is given.
pub mod qsim_constants {
    /// Default upper bound on register size (2^24 amplitudes, 256 MiB).
    pub const DEFAULT_MAX_QUBITS: usize = 24;
    /// Hard ceiling; no configuration may raise the bound past this.
    pub const MAX_QUBITS_CEILING: usize = 30;
    /// Allowed deviation of the total probability from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Allowed element-wise deviation of `U * U^dagger` from the identity.
    pub const UNITARY_TOLERANCE: f64 = 1e-9;
    /// Registers with at least this many amplitudes use the parallel kernels.
    pub const PARALLEL_THRESHOLD: usize = 1 << 14;
}
