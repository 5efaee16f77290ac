// src/simulation/results.rs
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amplitudes below this squared magnitude are omitted from the `Display` output.
const DISPLAY_CUTOFF: f64 = 1e-12;

/// The amplitude vector produced by a successful run.
///
/// Indexing follows the register convention: qubit 0 is the most significant bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statevector {
    qubit_count: usize,
    amplitudes: Vec<Complex64>,
}

impl Statevector {
    pub(crate) fn new(qubit_count: usize, amplitudes: Vec<Complex64>) -> Self {
        Self { qubit_count, amplitudes }
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// The amplitudes in basis-index order; length `2^qubit_count`.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Squared magnitude of each amplitude.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Ket label of basis state `index`, qubit 0 first: `basis_label(1)` on two qubits is `|01>`.
    pub fn basis_label(&self, index: usize) -> String {
        format!("|{:0width$b}>", index, width = self.qubit_count)
    }
}

impl fmt::Display for Statevector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statevector ({} qubits):", self.qubit_count)?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > DISPLAY_CUTOFF {
                writeln!(f, "  {}: {:.4}  p={:.4}", self.basis_label(i), amp, p)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_label_is_big_endian() {
        let sv = Statevector::new(3, vec![Complex64::new(0.0, 0.0); 8]);
        assert_eq!(sv.basis_label(0), "|000>");
        assert_eq!(sv.basis_label(1), "|001>");
        assert_eq!(sv.basis_label(6), "|110>");
    }

    #[test]
    fn test_display_skips_zero_amplitudes() {
        let sv = Statevector::new(1, vec![Complex64::new(0.0, 0.0), Complex64::new(0.0, 1.0)]);
        let text = sv.to_string();
        assert!(!text.contains("|0>"));
        assert!(text.contains("|1>"));
        assert!((sv.norm_sqr() - 1.0).abs() < 1e-12);
        assert_eq!(sv.probabilities(), vec![0.0, 1.0]);
    }
}
