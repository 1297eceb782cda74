//! Property-based tests for share payload roundtrip conversion.
//!
//! Tests that circuit → JSON → circuit preserves structure exactly.

use proptest::prelude::*;
use std::f64::consts::TAU;

use alsvin_ir::{Circuit, Gate, QubitId};
use alsvin_share::{SharePayload, decode, encode};

/// Generate an arbitrary gate operation on a circuit of `num_qubits`.
fn arb_gate(num_qubits: u32) -> impl Strategy<Value = Gate> {
    let q = 0..num_qubits;
    let q2 = 0..num_qubits;
    let theta = 0.0..TAU;
    (0..13_u8, q, q2, theta).prop_map(move |(kind, q, q2, theta)| {
        let target = QubitId(q);
        // Force distinct operands for the controlled gates.
        let other = QubitId(if q2 == q { (q + 1) % num_qubits } else { q2 });
        match kind {
            0 => Gate::H { target },
            1 => Gate::X { target },
            2 => Gate::Y { target },
            3 => Gate::Z { target },
            4 => Gate::S { target },
            5 => Gate::T { target },
            6 => Gate::Rx { target, theta },
            7 => Gate::Ry { target, theta },
            8 => Gate::Rz { target, theta },
            9 => Gate::Cnot {
                control: target,
                target: other,
            },
            10 => Gate::Cz {
                control: target,
                target: other,
            },
            11 => Gate::Swap {
                a: target,
                b: other,
            },
            _ => Gate::Measure { target },
        }
    })
}

/// Generate a random circuit with 2-5 qubits and 1-10 single-gate steps.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate(num_qubits), 1..=10).prop_map(move |ops| {
            let mut circuit = Circuit::new(num_qubits);
            for op in ops {
                circuit.push(op);
            }
            circuit
        })
    })
}

proptest! {
    #[test]
    fn roundtrip_preserves_payload(
        circuit in arb_circuit(),
        seed in any::<u64>(),
        shots in 0_u32..=200_000,
    ) {
        let payload = SharePayload::new(circuit, seed, shots);
        let json = encode(&payload).unwrap();
        let back = decode(&json).unwrap();
        prop_assert_eq!(back, payload);
    }

    #[test]
    fn negative_seeds_clamp_to_zero(seed in i64::MIN..0) {
        let json = format!(
            r#"{{"v":1,"circuit":{{"nQubits":1,"steps":[]}},"seed":{seed},"shots":1}}"#
        );
        prop_assert_eq!(decode(&json).unwrap().seed, 0);
    }

    #[test]
    fn version_field_is_always_one(circuit in arb_circuit()) {
        let json = encode(&SharePayload::new(circuit, 0, 0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(value["v"].as_u64(), Some(1));
    }
}
