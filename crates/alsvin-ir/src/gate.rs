//! Gate operations.

use serde::{Deserialize, Serialize};

use crate::qubit::QubitId;

/// A gate operation together with its operands.
///
/// Operations serialize as tagged records, e.g. `{"kind":"h","target":0}` or
/// `{"kind":"rx","target":1,"theta":0.785}`. Rotation angles are radians.
///
/// Dispatch over this enum is exhaustive everywhere in the workspace, so
/// adding a gate kind forces every dispatch site to be updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Gate {
    /// Hadamard gate.
    H { target: QubitId },
    /// Pauli-X gate.
    X { target: QubitId },
    /// Pauli-Y gate.
    Y { target: QubitId },
    /// Pauli-Z gate.
    Z { target: QubitId },
    /// S gate (sqrt(Z)).
    S { target: QubitId },
    /// T gate (fourth root of Z).
    T { target: QubitId },
    /// Rotation around the X axis.
    Rx { target: QubitId, theta: f64 },
    /// Rotation around the Y axis.
    Ry { target: QubitId, theta: f64 },
    /// Rotation around the Z axis.
    Rz { target: QubitId, theta: f64 },
    /// Controlled-X (CNOT) gate.
    Cnot { control: QubitId, target: QubitId },
    /// Controlled-Z gate.
    Cz { control: QubitId, target: QubitId },
    /// SWAP gate.
    Swap { a: QubitId, b: QubitId },
    /// Measurement marker.
    ///
    /// Recognized and validated like any other operation but applied as the
    /// identity: sampling happens once, against the final distribution.
    Measure { target: QubitId },
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H { .. } => "h",
            Gate::X { .. } => "x",
            Gate::Y { .. } => "y",
            Gate::Z { .. } => "z",
            Gate::S { .. } => "s",
            Gate::T { .. } => "t",
            Gate::Rx { .. } => "rx",
            Gate::Ry { .. } => "ry",
            Gate::Rz { .. } => "rz",
            Gate::Cnot { .. } => "cnot",
            Gate::Cz { .. } => "cz",
            Gate::Swap { .. } => "swap",
            Gate::Measure { .. } => "measure",
        }
    }

    /// Qubits this operation references, in operand order.
    ///
    /// The list is the raw operand list: `Swap { a, b }` with `a == b`
    /// repeats the qubit, and it is the executor's job to treat that case
    /// as the identity.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Gate::H { target }
            | Gate::X { target }
            | Gate::Y { target }
            | Gate::Z { target }
            | Gate::S { target }
            | Gate::T { target }
            | Gate::Rx { target, .. }
            | Gate::Ry { target, .. }
            | Gate::Rz { target, .. }
            | Gate::Measure { target } => vec![target],
            Gate::Cnot { control, target } | Gate::Cz { control, target } => {
                vec![control, target]
            }
            Gate::Swap { a, b } => vec![a, b],
        }
    }

    /// Number of operands this gate kind carries.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::H { .. }
            | Gate::X { .. }
            | Gate::Y { .. }
            | Gate::Z { .. }
            | Gate::S { .. }
            | Gate::T { .. }
            | Gate::Rx { .. }
            | Gate::Ry { .. }
            | Gate::Rz { .. }
            | Gate::Measure { .. } => 1,
            Gate::Cnot { .. } | Gate::Cz { .. } | Gate::Swap { .. } => 2,
        }
    }

    /// Check if this gate carries a rotation angle.
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            Gate::Rx { .. } | Gate::Ry { .. } | Gate::Rz { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_gate_properties() {
        let h = Gate::H { target: QubitId(0) };
        assert_eq!(h.name(), "h");
        assert_eq!(h.num_qubits(), 1);
        assert!(!h.is_parameterized());

        let rx = Gate::Rx {
            target: QubitId(1),
            theta: PI,
        };
        assert_eq!(rx.name(), "rx");
        assert!(rx.is_parameterized());

        let cx = Gate::Cnot {
            control: QubitId(0),
            target: QubitId(1),
        };
        assert_eq!(cx.name(), "cnot");
        assert_eq!(cx.num_qubits(), 2);
        assert_eq!(cx.qubits(), vec![QubitId(0), QubitId(1)]);
    }

    #[test]
    fn test_tagged_serialization() {
        let h = Gate::H { target: QubitId(0) };
        assert_eq!(
            serde_json::to_string(&h).unwrap(),
            r#"{"kind":"h","target":0}"#
        );

        let swap = Gate::Swap {
            a: QubitId(0),
            b: QubitId(2),
        };
        assert_eq!(
            serde_json::to_string(&swap).unwrap(),
            r#"{"kind":"swap","a":0,"b":2}"#
        );

        let rz: Gate = serde_json::from_str(r#"{"kind":"rz","target":1,"theta":0.5}"#).unwrap();
        assert_eq!(
            rz,
            Gate::Rz {
                target: QubitId(1),
                theta: 0.5
            }
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<Gate, _> = serde_json::from_str(r#"{"kind":"ccx","target":0}"#);
        assert!(result.is_err());
    }
}
