//! Builds a Bell pair and a three-qubit GHZ state and prints the amplitudes.

use qsim::{ProgramBuilder, QsimError, Simulator};

fn main() -> Result<(), QsimError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let simulator = Simulator::new();

    // --- Bell pair: H on q0, then CNOT named on q0 (flips q1) ---
    let bell = ProgramBuilder::new(2).gate("Hadamard", 0).gate("CNOT", 0).build();
    let mut register = simulator.create_register(2)?;
    let state = simulator.run(&bell, &mut register)?;
    println!("{}", bell);
    println!("{}", state);

    // --- GHZ: the CNOT chain walks down the register ---
    let ghz = ProgramBuilder::new(3)
        .gate("Hadamard", 0)
        .gate("CNOT", 0)
        .gate("CNOT", 1)
        .build();
    let mut register = simulator.create_register(3)?;
    let state = simulator.run(&ghz, &mut register)?;
    println!("{}", ghz);
    println!("{}", state);

    Ok(())
}
