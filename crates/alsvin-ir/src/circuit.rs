//! Step-structured circuit container and builder.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::QubitId;

/// One time slice of a circuit.
///
/// The executor requires the operations of a step to act on disjoint qubit
/// sets, which makes their order within the step unobservable.
pub type Step = Vec<Gate>;

/// A quantum circuit: a qubit count and an ordered sequence of steps.
///
/// Circuits are plain data and carry no validation of their own; the
/// executor validates each step as it runs. Once built, a circuit is
/// treated as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits the circuit acts on.
    #[serde(rename = "nQubits")]
    pub num_qubits: u32,
    /// Time steps, executed in order.
    pub steps: Vec<Step>,
}

impl Circuit {
    /// Create a new empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            steps: vec![],
        }
    }

    /// Append a step holding the given operations.
    pub fn add_step(&mut self, ops: impl IntoIterator<Item = Gate>) -> &mut Self {
        self.steps.push(ops.into_iter().collect());
        self
    }

    /// Append a step holding a single operation.
    pub fn push(&mut self, op: Gate) -> &mut Self {
        self.steps.push(vec![op]);
        self
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate in its own step.
    pub fn h(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::H {
            target: target.into(),
        })
    }

    /// Apply Pauli-X gate in its own step.
    pub fn x(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::X {
            target: target.into(),
        })
    }

    /// Apply Pauli-Y gate in its own step.
    pub fn y(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Y {
            target: target.into(),
        })
    }

    /// Apply Pauli-Z gate in its own step.
    pub fn z(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Z {
            target: target.into(),
        })
    }

    /// Apply S gate in its own step.
    pub fn s(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::S {
            target: target.into(),
        })
    }

    /// Apply T gate in its own step.
    pub fn t(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::T {
            target: target.into(),
        })
    }

    /// Apply Rx rotation in its own step.
    pub fn rx(&mut self, theta: f64, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Rx {
            target: target.into(),
            theta,
        })
    }

    /// Apply Ry rotation in its own step.
    pub fn ry(&mut self, theta: f64, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Ry {
            target: target.into(),
            theta,
        })
    }

    /// Apply Rz rotation in its own step.
    pub fn rz(&mut self, theta: f64, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Rz {
            target: target.into(),
            theta,
        })
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate in its own step.
    pub fn cnot(&mut self, control: impl Into<QubitId>, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Cnot {
            control: control.into(),
            target: target.into(),
        })
    }

    /// Apply CZ gate in its own step.
    pub fn cz(&mut self, control: impl Into<QubitId>, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Cz {
            control: control.into(),
            target: target.into(),
        })
    }

    /// Apply SWAP gate in its own step.
    pub fn swap(&mut self, a: impl Into<QubitId>, b: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Swap {
            a: a.into(),
            b: b.into(),
        })
    }

    /// Append a measurement marker in its own step.
    pub fn measure(&mut self, target: impl Into<QubitId>) -> &mut Self {
        self.push(Gate::Measure {
            target: target.into(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Circuit depth: the number of steps.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Total number of operations across all steps.
    pub fn num_gates(&self) -> usize {
        self.steps.iter().map(Vec::len).sum()
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Bell pair: H on q0, then CNOT(0 → 1).
    pub fn bell() -> Self {
        let mut circuit = Self::new(2);
        circuit.h(0_u32).cnot(0_u32, 1_u32);
        circuit
    }

    /// GHZ chain on `n` qubits: H on q0 followed by a CNOT ladder.
    pub fn ghz(n: u32) -> Self {
        let mut circuit = Self::new(n);
        if n == 0 {
            return circuit;
        }
        circuit.h(0_u32);
        for i in 0..n - 1 {
            circuit.cnot(i, i + 1);
        }
        circuit
    }
}
