//! Alsvin Statevector Simulation Engine
//!
//! A small, deterministic quantum-circuit simulator: given a gate-level
//! circuit from `alsvin-ir`, it computes the exact final pure state,
//! derives observables from it (per-basis probabilities, single-qubit
//! Bloch vectors), and draws a histogram of measurement outcomes from a
//! seeded PRNG so that identical `(circuit, shots, seed)` triples yield
//! byte-identical counts.
//!
//! # Components
//!
//! - [`Statevector`] — the dense amplitude buffer and in-place gate kernels
//! - [`simulate`] — circuit execution with per-step disjointness validation
//! - [`probabilities`], [`bloch_vector`], [`bitstring`] — observables
//! - [`sample_all_qubits`], [`Mulberry32`], [`Counts`] — deterministic
//!   multinomial sampling
//!
//! # Performance
//!
//! Simulation is `O(steps · 2^n)` and sampling `O(shots · n + 2^n)`, both
//! single-threaded and allocation-light. Memory for the buffer:
//!
//! | Qubits | Memory |
//! |--------|--------|
//! | 10 | ~16 KB |
//! | 15 | ~512 KB |
//! | 20 | ~16 MB (engine cap) |
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::Circuit;
//! use alsvin_sim::{probabilities, sample_all_qubits, simulate};
//!
//! let state = simulate(&Circuit::bell()).unwrap();
//! let probs = probabilities(&state);
//!
//! // Only |00⟩ and |11⟩ carry mass.
//! assert!((probs[0] - 0.5).abs() < 1e-9);
//! assert!((probs[3] - 0.5).abs() < 1e-9);
//!
//! let counts = sample_all_qubits(&probs, 1024, 1337);
//! assert_eq!(counts.iter().sum::<u64>(), 1024);
//! ```

pub mod error;
pub mod executor;
pub mod observables;
pub mod sampler;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use executor::simulate;
pub use observables::{Bloch, bitstring, bloch_vector, probabilities};
pub use sampler::{Counts, Mulberry32, sample_all_qubits};
pub use statevector::{MAX_QUBITS, Statevector};
