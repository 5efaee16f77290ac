// src/gates/mod.rs

//! The fixed gate catalog.
//!
//! Each catalog entry is a variant of [`Gate`]; resolving a name is a total match
//! over the variants with an explicit [`QsimError::UnknownGate`] fallback, so an
//! unrecognised name can never silently turn into a no-op.

use crate::core::{Matrix2, QsimError, Result};
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

/// A gate from the fixed catalog.
///
/// Arity-1 gates carry a 2x2 unitary. `Cnot` has arity 2; its action on the target
/// qubit, applied when the control bit is 1, is Pauli-X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    S,
    T,
    Cnot,
}

impl Gate {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Gate; 7] = [
        Gate::Hadamard,
        Gate::PauliX,
        Gate::PauliY,
        Gate::PauliZ,
        Gate::S,
        Gate::T,
        Gate::Cnot,
    ];

    /// Resolves a catalog name (`"Hadamard"`, `"Pauli-X"`, ...) or circuit symbol
    /// (`"H"`, `"X"`, ..., `"CX"`). Matching is exact.
    pub fn lookup(name: &str) -> Result<Gate> {
        match name {
            "Hadamard" | "H" => Ok(Gate::Hadamard),
            "Pauli-X" | "X" => Ok(Gate::PauliX),
            "Pauli-Y" | "Y" => Ok(Gate::PauliY),
            "Pauli-Z" | "Z" => Ok(Gate::PauliZ),
            "S" => Ok(Gate::S),
            "T" => Ok(Gate::T),
            "CNOT" | "CX" => Ok(Gate::Cnot),
            _ => Err(QsimError::unknown_gate(name)),
        }
    }

    /// Canonical catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Hadamard => "Hadamard",
            Gate::PauliX => "Pauli-X",
            Gate::PauliY => "Pauli-Y",
            Gate::PauliZ => "Pauli-Z",
            Gate::S => "S",
            Gate::T => "T",
            Gate::Cnot => "CNOT",
        }
    }

    /// Short symbol used in circuit diagrams.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Hadamard => "H",
            Gate::PauliX => "X",
            Gate::PauliY => "Y",
            Gate::PauliZ => "Z",
            Gate::S => "S",
            Gate::T => "T",
            Gate::Cnot => "CX",
        }
    }

    /// Number of qubits the gate acts on.
    pub fn arity(&self) -> usize {
        match self {
            Gate::Cnot => 2,
            _ => 1,
        }
    }

    /// The 2x2 matrix applied to the target pair. For `Cnot` this is Pauli-X,
    /// applied only where the control bit is 1.
    pub fn kernel(&self) -> Matrix2 {
        let zero = Complex64::zero();
        let one = Complex64::one();
        let i = Complex64::i();
        match self {
            Gate::Hadamard => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            Gate::PauliX | Gate::Cnot => [[zero, one], [one, zero]],
            Gate::PauliY => [[zero, -i], [i, zero]],
            Gate::PauliZ => [[one, zero], [zero, -one]],
            Gate::S => [[one, zero], [zero, i]],
            // e^(i*pi/4)
            Gate::T => [[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
        }
    }

    /// The full `2^arity x 2^arity` unitary, row-major.
    ///
    /// For `Cnot` the basis order is `|control, target>`: `|00>, |01>, |10>, |11>`.
    pub fn unitary(&self) -> Vec<Vec<Complex64>> {
        let u = self.kernel();
        match self.arity() {
            1 => u.iter().map(|row| row.to_vec()).collect(),
            _ => {
                let zero = Complex64::zero();
                let one = Complex64::one();
                vec![
                    // control |0>: identity on target
                    vec![one, zero, zero, zero],
                    vec![zero, one, zero, zero],
                    // control |1>: kernel on target
                    vec![zero, zero, u[0][0], u[0][1]],
                    vec![zero, zero, u[1][0], u[1][1]],
                ]
            }
        }
    }
}

/// Resolves `name` in the catalog. See [`Gate::lookup`].
pub fn lookup(name: &str) -> Result<Gate> {
    Gate::lookup(name)
}

impl FromStr for Gate {
    type Err = QsimError;

    fn from_str(s: &str) -> Result<Self> {
        Gate::lookup(s)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UNITARY_TOLERANCE;
    use crate::validation::check_unitary;

    #[test]
    fn test_catalog_is_unitary() -> Result<()> {
        for gate in Gate::ALL {
            let u = gate.unitary();
            assert_eq!(u.len(), 1 << gate.arity(), "{} has wrong dimension", gate);
            check_unitary(&u, Some(UNITARY_TOLERANCE))?;
        }
        Ok(())
    }

    #[test]
    fn test_lookup_names_and_symbols() -> Result<()> {
        for gate in Gate::ALL {
            assert_eq!(Gate::lookup(gate.name())?, gate);
            assert_eq!(Gate::lookup(gate.symbol())?, gate);
            assert_eq!(gate.to_string().parse::<Gate>()?, gate);
        }
        Ok(())
    }

    #[test]
    fn test_lookup_unknown_is_error() {
        assert_eq!(
            lookup("Toffoli"),
            Err(QsimError::UnknownGate { name: "Toffoli".to_string() })
        );
        // exact matching, no case folding
        assert!(lookup("hadamard").is_err());
        assert!(lookup("").is_err());
    }

    #[test]
    fn test_cnot_unitary_layout() {
        let u = Gate::Cnot.unitary();
        assert_eq!(u[2][3], Complex64::one());
        assert_eq!(u[3][2], Complex64::one());
        assert_eq!(u[2][2], Complex64::zero());
        assert_eq!(u[0][0], Complex64::one());
    }

    #[test]
    fn test_t_squared_is_s() {
        let t = Gate::T.kernel()[1][1];
        let s = Gate::S.kernel()[1][1];
        assert!((t * t - s).norm() < 1e-12);
    }
}
