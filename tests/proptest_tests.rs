//! Property-based tests using proptest
//!
//! Random gate programs over small registers, checked against invariants that
//! must hold for any input.

use proptest::prelude::*;
use qsim::{GateApplication, Program, Simulator, SimulatorConfig, derive_sensor_preparation};

const GATE_NAMES: [&str; 7] = ["Hadamard", "Pauli-X", "Pauli-Y", "Pauli-Z", "S", "T", "CNOT"];

/// A program of in-range operations for an `n`-qubit register (n >= 2).
fn program_strategy() -> impl Strategy<Value = Program> {
    (2usize..=5).prop_flat_map(|n| {
        prop::collection::vec((0..GATE_NAMES.len(), 0..n), 0..40).prop_map(move |ops| {
            let mut program = Program::new(n);
            program.extend(ops.into_iter().map(|(g, q)| GateApplication::new(GATE_NAMES[g], q)));
            program
        })
    })
}

proptest! {
    /// Property: every successful run preserves total probability.
    #[test]
    fn unitarity_preserved(program in program_strategy()) {
        let simulator = Simulator::new();
        let mut register = simulator.create_register(program.qubit_count()).unwrap();
        let state = simulator.run(&program, &mut register).unwrap();

        prop_assert_eq!(state.len(), 1 << program.qubit_count());
        prop_assert!(
            (state.norm_sqr() - 1.0).abs() < 1e-9,
            "norm drifted to {}", state.norm_sqr()
        );
    }

    /// Property: serial and parallel kernels agree exactly.
    #[test]
    fn parallel_matches_serial(program in program_strategy()) {
        let serial = Simulator::with_config(SimulatorConfig { parallel_threshold: usize::MAX, ..Default::default() }).unwrap();
        let parallel = Simulator::with_config(SimulatorConfig { parallel_threshold: 1, ..Default::default() }).unwrap();
        let mut r1 = serial.create_register(program.qubit_count()).unwrap();
        let mut r2 = parallel.create_register(program.qubit_count()).unwrap();

        prop_assert_eq!(serial.run(&program, &mut r1).unwrap(), parallel.run(&program, &mut r2).unwrap());
    }

    /// Property: an empty program leaves |0...0> untouched.
    #[test]
    fn empty_program_identity(n in 1usize..=8) {
        let simulator = Simulator::new();
        let mut register = simulator.create_register(n).unwrap();
        let state = simulator.run(&Program::new(n), &mut register).unwrap();
        let probabilities = state.probabilities();
        prop_assert_eq!(probabilities[0], 1.0);
        prop_assert!(probabilities[1..].iter().all(|p| *p == 0.0));
    }

    /// Property: running a sensor preparation lands on basis state `signal mod 2^n`.
    #[test]
    fn sensor_preparation_lands_on_signal(signal in 0i64..1_000_000, n in 1usize..=8) {
        let ops = derive_sensor_preparation(signal, n).unwrap();
        prop_assert_eq!(&ops, &derive_sensor_preparation(signal, n).unwrap());
        prop_assert!(ops.iter().all(|op| op.target_qubit < n));

        let mut program = Program::new(n);
        program.extend(ops);
        let simulator = Simulator::new();
        let mut register = simulator.create_register(n).unwrap();
        let state = simulator.run(&program, &mut register).unwrap();
        let expected = (signal as usize) % (1 << n);
        prop_assert!((state.probabilities()[expected] - 1.0).abs() < 1e-12);
    }

    /// Property: negative signals are always rejected.
    #[test]
    fn negative_signal_rejected(signal in i64::MIN..0, n in 1usize..=8) {
        prop_assert!(derive_sensor_preparation(signal, n).is_err());
    }
}
