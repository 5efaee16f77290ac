//! Reads a few values from a seeded simulated sensor, prepares each as a basis
//! state, then entangles the register.

use qsim::{QsimError, Session, SimulatedSensor};

fn main() -> Result<(), QsimError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let qubits = 4;
    let mut sensor = SimulatedSensor::with_seed(qubits, 2024)?;
    let mut session = Session::new(qubits)?;

    for _ in 0..3 {
        let signal = sensor.read();
        session.reset_circuit();
        let flips = session.simulate_sensor_data(signal)?;
        session.add_gate("Hadamard", 0, None);
        session.add_gate("CNOT", 0, None);

        let state = session.compute()?;
        println!("signal {:>2} = {:0width$b} ({} flips)", signal, signal, flips, width = qubits);
        println!("{}", session.program());
        println!("{}", state);
    }

    // Invalid input is reported, not coerced
    if let Err(err) = session.simulate_sensor_data(-1) {
        println!("{}: {}", err.kind(), err);
    }
    Ok(())
}
