//! Alsvin Circuit Data Model
//!
//! This crate provides the data structures for describing quantum circuits
//! consumed by the Alsvin statevector engine: qubit identifiers, the gate
//! catalogue, and the step-structured [`Circuit`] container.
//!
//! # Overview
//!
//! A circuit is a qubit count plus an ordered sequence of *steps*; each step
//! is a set of gate operations that act on disjoint qubits and therefore
//! commute. The types here are plain data — the engine crate validates and
//! executes them — and every type derives serde traits so the whole model
//! round-trips through the share-link payload.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use alsvin_ir::Circuit;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(0_u32).cnot(0_u32, 1_u32);
//!
//! assert_eq!(circuit.num_qubits, 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `T` | 1 | Phase gates (√Z and ⁴√Z) |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates (radians) |
//! | `Cnot` | 2 | Controlled-NOT |
//! | `Cz` | 2 | Controlled-Z |
//! | `Swap` | 2 | SWAP gate |
//! | `Measure` | 1 | Marker; applied as identity |
//!
//! # Basis-index convention
//!
//! Qubit `q` occupies bit `n-1-q` of a basis index: **q0 is the
//! most-significant bit**, and rendered bitstrings read q0-first. This is a
//! contract shared with the engine and every consumer of the model.

pub mod circuit;
pub mod gate;
pub mod qubit;

pub use circuit::{Circuit, Step};
pub use gate::Gate;
pub use qubit::QubitId;
