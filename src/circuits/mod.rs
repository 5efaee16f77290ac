// src/circuits/mod.rs

//! Ordered, mutable gate programs.
//!
//! A [`Program`] is a list of [`GateApplication`]s recorded by gate *name*. Nothing
//! is validated when an operation is appended: names and qubit indices are resolved
//! by the simulator when the program runs, so a program can be built before the
//! register it targets exists.

use crate::core::{QsimError, Result};
use crate::gates::Gate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One gate application: a catalog name, the qubit it targets and an optional control.
///
/// For `CNOT` the named qubit is the *control* and the flipped qubit is the next one,
/// wrapping modulo the register size. `control_qubit` must then be `None` or equal to
/// `target_qubit`. For single-qubit gates a `control_qubit` turns the gate into its
/// controlled form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateApplication {
    pub gate_name: String,
    pub target_qubit: usize,
    pub control_qubit: Option<usize>,
}

/// Where a resolved gate lands in the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Apply the kernel to every pair differing in `target`.
    Single { target: usize },
    /// Apply the kernel to the `target` pairs whose `control` bit is 1.
    Controlled { control: usize, target: usize },
}

impl GateApplication {
    /// An uncontrolled application of `gate_name` on `target_qubit`.
    pub fn new(gate_name: impl Into<String>, target_qubit: usize) -> Self {
        Self { gate_name: gate_name.into(), target_qubit, control_qubit: None }
    }

    /// A controlled application of `gate_name`.
    pub fn controlled(gate_name: impl Into<String>, control_qubit: usize, target_qubit: usize) -> Self {
        Self { gate_name: gate_name.into(), target_qubit, control_qubit: Some(control_qubit) }
    }

    /// Resolves the gate name against the catalog.
    pub fn gate(&self) -> Result<Gate> {
        Gate::lookup(&self.gate_name)
    }

    /// Computes the qubits `gate` acts on for a register of `qubit_count` qubits.
    ///
    /// Range checks are left to the register; this only applies the CNOT wrap rule
    /// and rejects contradictory control fields.
    pub fn placement(&self, gate: Gate, qubit_count: usize) -> Result<Placement> {
        if qubit_count == 0 {
            return Err(QsimError::invalid_argument("cannot place a gate on an empty register"));
        }
        match (gate.arity(), self.control_qubit) {
            (1, None) => Ok(Placement::Single { target: self.target_qubit }),
            (1, Some(control)) => Ok(Placement::Controlled { control, target: self.target_qubit }),
            (_, Some(control)) if control != self.target_qubit => Err(QsimError::invalid_argument(format!(
                "{} names its control through the target qubit ({}), got control {}",
                gate, self.target_qubit, control
            ))),
            _ => Ok(Placement::Controlled {
                control: self.target_qubit,
                target: (self.target_qubit + 1) % qubit_count,
            }),
        }
    }
}

impl fmt::Display for GateApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.control_qubit {
            Some(c) => write!(f, "{}(q{} -> q{})", self.gate_name, c, self.target_qubit),
            None => write!(f, "{}(q{})", self.gate_name, self.target_qubit),
        }
    }
}

/// An ordered sequence of gate applications for a register of `qubit_count` qubits.
///
/// Order is significant: gates do not commute in general.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    qubit_count: usize,
    operations: Vec<GateApplication>,
}

impl Program {
    /// Creates an empty program for a `qubit_count`-qubit register.
    pub fn new(qubit_count: usize) -> Self {
        Self { qubit_count, operations: Vec::new() }
    }

    /// Register size this program was built for.
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Appends `gate_name` on `target_qubit`, optionally controlled. Not validated here.
    pub fn append(&mut self, gate_name: impl Into<String>, target_qubit: usize, control_qubit: Option<usize>) {
        self.operations.push(GateApplication { gate_name: gate_name.into(), target_qubit, control_qubit });
    }

    /// Appends an already-built operation.
    pub fn push(&mut self, op: GateApplication) {
        self.operations.push(op);
    }

    /// Appends every operation yielded by `ops`, in order.
    pub fn extend<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = GateApplication>,
    {
        self.operations.extend(ops);
    }

    /// Removes all operations. Register amplitudes are not touched.
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Iterates the operations in program order. Each call starts from the beginning.
    pub fn operations(&self) -> std::slice::Iter<'_, GateApplication> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a GateApplication;
    type IntoIter = std::slice::Iter<'a, GateApplication>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations()
    }
}

//-------------------------------------------------------------------------
// Program Builder
//-------------------------------------------------------------------------

/// Chained construction of [`Program`]s.
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    pub fn new(qubit_count: usize) -> Self {
        Self { program: Program::new(qubit_count) }
    }

    /// Adds an uncontrolled gate.
    pub fn gate(mut self, gate_name: impl Into<String>, qubit: usize) -> Self {
        self.program.push(GateApplication::new(gate_name, qubit));
        self
    }

    /// Adds a controlled gate.
    pub fn controlled(mut self, gate_name: impl Into<String>, control: usize, target: usize) -> Self {
        self.program.push(GateApplication::controlled(gate_name, control, target));
        self
    }

    /// Adds a prepared operation.
    pub fn op(mut self, op: GateApplication) -> Self {
        self.program.push(op);
        self
    }

    /// Adds every operation from `ops`.
    pub fn ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = GateApplication>,
    {
        self.program.extend(ops);
        self
    }

    pub fn build(self) -> Program {
        self.program
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_ops = self.operations.len();
        let num_qubits = self.qubit_count;
        writeln!(f, "qsim::Program[{} operations on {} qubits]", num_ops, num_qubits)?;
        if num_ops == 0 || num_qubits == 0 {
            return Ok(());
        }

        const GATE_WIDTH: usize = 7; // e.g. "───H───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
            }
        }

        // op_grid[row][t] is the wire segment; v_connect[row][t] the connector below that row
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        for (t, op) in self.operations.iter().enumerate() {
            let Ok(gate) = op.gate() else {
                if let Some(row) = op_grid.get_mut(op.target_qubit) {
                    row[t] = format_gate("?");
                }
                continue;
            };
            match op.placement(gate, num_qubits) {
                Ok(Placement::Single { target }) if target < num_qubits => {
                    op_grid[target][t] = format_gate(gate.symbol());
                }
                Ok(Placement::Controlled { control, target }) if control < num_qubits && target < num_qubits => {
                    let target_symbol = if gate == Gate::Cnot { "X" } else { gate.symbol() };
                    op_grid[control][t] = format_gate("@");
                    op_grid[target][t] = format_gate(target_symbol);
                    let r_min = control.min(target);
                    let r_max = control.max(target);
                    for row in v_connect.iter_mut().take(r_max).skip(r_min) {
                        row[t] = V_WIRE;
                    }
                }
                // out-of-range or contradictory operations are reported by the simulator
                _ => {}
            }
        }

        let label_width = format!("q{}: ", num_qubits - 1).len();
        let label_padding = " ".repeat(label_width);
        for r in 0..num_qubits {
            write!(f, "{:<width$}", format!("q{}: ", r), width = label_width)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let padding_needed = GATE_WIDTH - 1;
                    let pre = padding_needed / 2;
                    let post = padding_needed - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), v_connect[r][t], " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
