//! Error types for the simulation engine.

use alsvin_ir::QubitId;
use thiserror::Error;

use crate::statevector::MAX_QUBITS;

/// Errors produced by state construction, gate kernels, and the executor.
///
/// Failures are synchronous and atomic: a gate or step is either fully
/// applied or the state buffer is unchanged. Numerical drift is never
/// reported as an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Qubit count outside the supported range.
    #[error("qubit count must be between 1 and {}, got {got}", MAX_QUBITS)]
    InvalidQubitCount {
        /// The rejected qubit count.
        got: usize,
    },

    /// An operation references a qubit outside the state.
    #[error("operation references {qubit} but the state only has {n_qubits} qubits")]
    InvalidQubitIndex {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the state.
        n_qubits: usize,
    },

    /// A controlled gate was given identical control and target.
    #[error("{gate} requires distinct control and target, both were {qubit}")]
    InvalidGateArgs {
        /// Name of the gate.
        gate: &'static str,
        /// The duplicated qubit.
        qubit: QubitId,
    },

    /// Two operations in the same step touch the same qubit.
    #[error("step applies more than one operation to {qubit}")]
    InvalidStep {
        /// The qubit claimed twice.
        qubit: QubitId,
    },
}

/// Result type for engine operations.
pub type SimResult<T> = Result<T, SimError>;
