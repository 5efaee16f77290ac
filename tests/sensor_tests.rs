// tests/sensor_tests.rs

use num_complex::Complex64;
use qsim::{ErrorKind, Gate, Program, QsimError, SimulatedSensor, Simulator, derive_sensor_preparation};

fn flipped_qubits(signal: i64, qubit_count: usize) -> Result<Vec<usize>, QsimError> {
    Ok(derive_sensor_preparation(signal, qubit_count)?
        .iter()
        .map(|op| op.target_qubit)
        .collect())
}

#[test]
fn test_five_on_four_qubits() -> Result<(), QsimError> {
    // 5 = 0101: digits 1 and 3 (counted from the most significant end) are set
    assert_eq!(flipped_qubits(5, 4)?, [1, 3]);
    for op in derive_sensor_preparation(5, 4)? {
        assert_eq!(op.gate()?, Gate::PauliX);
    }
    Ok(())
}

#[test]
fn test_derivation_is_deterministic() -> Result<(), QsimError> {
    let first = derive_sensor_preparation(5, 4)?;
    for _ in 0..10 {
        assert_eq!(derive_sensor_preparation(5, 4)?, first);
    }
    Ok(())
}

#[test]
fn test_prepared_state_matches_signal() -> Result<(), QsimError> {
    let simulator = Simulator::new();
    for signal in 0..16 {
        let mut program = Program::new(4);
        program.extend(derive_sensor_preparation(signal, 4)?);
        let mut register = simulator.create_register(4)?;
        let state = simulator.run(&program, &mut register)?;
        for (index, amp) in state.amplitudes().iter().enumerate() {
            let expected = if index == signal as usize { 1.0 } else { 0.0 };
            assert!((amp - Complex64::new(expected, 0.0)).norm() < 1e-12, "signal {}", signal);
        }
    }
    Ok(())
}

#[test]
fn test_negative_signal_is_invalid_argument() {
    let err = derive_sensor_preparation(-5, 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("-5"));
}

#[test]
fn test_simulated_sensor_feeds_program() -> Result<(), QsimError> {
    let mut sensor = SimulatedSensor::with_seed(3, 7)?;
    let (signal, ops) = sensor.read_preparation()?;
    assert!((0..8).contains(&signal));
    assert_eq!(ops, derive_sensor_preparation(signal, 3)?);

    let mut replay = SimulatedSensor::with_seed(3, 7)?;
    assert_eq!(replay.read(), signal);
    Ok(())
}
