//! Circuit execution with per-step validation.

use tracing::debug;

use alsvin_ir::{Circuit, Gate, QubitId, Step};

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Run `circuit` from |0...0⟩ and return the final statevector.
///
/// Each step is validated before any of its operations touch the buffer:
/// every referenced qubit must lie in `[0, n)`, controlled gates must have
/// distinct operands, and no qubit may be touched by more than one
/// operation in the step. A failed step therefore leaves the state at its
/// pre-step value. Within a step the operations have disjoint support, so
/// they are applied in list order without observable effect.
pub fn simulate(circuit: &Circuit) -> SimResult<Statevector> {
    let mut state = Statevector::new(circuit.num_qubits as usize)?;
    debug!(
        num_qubits = circuit.num_qubits,
        steps = circuit.steps.len(),
        gates = circuit.num_gates(),
        "starting simulation"
    );

    for step in &circuit.steps {
        validate_step(step, state.num_qubits())?;
        for gate in step {
            state.apply_gate(gate)?;
        }
    }

    debug!("simulation complete");
    Ok(state)
}

/// Check one step: in-range references, valid gate arguments, disjoint
/// support. This is the only place step disjointness is enforced; the gate
/// kernels assume validated inputs.
fn validate_step(step: &Step, n_qubits: usize) -> SimResult<()> {
    // Occupancy bitmask over the step's qubits (n ≤ 20 fits easily).
    let mut occupied: u64 = 0;
    for gate in step {
        match *gate {
            Gate::H { target }
            | Gate::X { target }
            | Gate::Y { target }
            | Gate::Z { target }
            | Gate::S { target }
            | Gate::T { target }
            | Gate::Rx { target, .. }
            | Gate::Ry { target, .. }
            | Gate::Rz { target, .. }
            | Gate::Measure { target } => {
                check_range(target, n_qubits)?;
                claim(&mut occupied, target)?;
            }
            Gate::Cnot { control, target } | Gate::Cz { control, target } => {
                check_range(control, n_qubits)?;
                check_range(target, n_qubits)?;
                if control == target {
                    return Err(SimError::InvalidGateArgs {
                        gate: gate.name(),
                        qubit: control,
                    });
                }
                claim(&mut occupied, control)?;
                claim(&mut occupied, target)?;
            }
            Gate::Swap { a, b } => {
                check_range(a, n_qubits)?;
                check_range(b, n_qubits)?;
                claim(&mut occupied, a)?;
                // SWAP of a qubit with itself is the identity and
                // occupies a single slot.
                if b != a {
                    claim(&mut occupied, b)?;
                }
            }
        }
    }
    Ok(())
}

fn check_range(qubit: QubitId, n_qubits: usize) -> SimResult<()> {
    if qubit.0 as usize >= n_qubits {
        return Err(SimError::InvalidQubitIndex { qubit, n_qubits });
    }
    Ok(())
}

fn claim(occupied: &mut u64, qubit: QubitId) -> SimResult<()> {
    let bit = 1_u64 << qubit.0;
    if *occupied & bit != 0 {
        return Err(SimError::InvalidStep { qubit });
    }
    *occupied |= bit;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_step_accepted() {
        let mut circuit = Circuit::new(3);
        circuit.add_step([
            Gate::H { target: QubitId(0) },
            Gate::Cnot {
                control: QubitId(1),
                target: QubitId(2),
            },
        ]);
        assert!(simulate(&circuit).is_ok());
    }

    #[test]
    fn test_overlapping_step_rejected() {
        let mut circuit = Circuit::new(2);
        circuit.add_step([
            Gate::H { target: QubitId(0) },
            Gate::X { target: QubitId(0) },
        ]);
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::InvalidStep { qubit: QubitId(0) })
        ));
    }

    #[test]
    fn test_controlled_overlap_rejected() {
        let mut circuit = Circuit::new(3);
        circuit.add_step([
            Gate::Cnot {
                control: QubitId(0),
                target: QubitId(1),
            },
            Gate::Z { target: QubitId(1) },
        ]);
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::InvalidStep { qubit: QubitId(1) })
        ));
    }

    #[test]
    fn test_out_of_range_rejected_before_apply() {
        let mut circuit = Circuit::new(2);
        circuit.h(0_u32);
        circuit.add_step([
            Gate::X { target: QubitId(1) },
            Gate::Y { target: QubitId(5) },
        ]);
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::InvalidQubitIndex {
                qubit: QubitId(5),
                n_qubits: 2
            })
        ));
    }

    #[test]
    fn test_equal_control_target_rejected() {
        let mut circuit = Circuit::new(2);
        circuit.cnot(1_u32, 1_u32);
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::InvalidGateArgs { gate: "cnot", .. })
        ));
    }

    #[test]
    fn test_swap_self_occupies_one_slot() {
        // SWAP(a, a) is the identity; pairing it with a gate on another
        // qubit in the same step is legal.
        let mut circuit = Circuit::new(2);
        circuit.add_step([
            Gate::Swap {
                a: QubitId(0),
                b: QubitId(0),
            },
            Gate::X { target: QubitId(1) },
        ]);
        assert!(simulate(&circuit).is_ok());
    }

    #[test]
    fn test_invalid_qubit_count() {
        let circuit = Circuit::new(0);
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::InvalidQubitCount { got: 0 })
        ));
        let circuit = Circuit::new(64);
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::InvalidQubitCount { got: 64 })
        ));
    }
}
