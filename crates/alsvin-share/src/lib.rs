//! Alsvin Share-Link Payload Codec
//!
//! Encodes and decodes the versioned JSON envelope that carries a circuit
//! and its sampling parameters between collaborators:
//!
//! ```json
//! { "v": 1,
//!   "circuit": { "nQubits": 2, "steps": [[{"kind":"h","target":0}]] },
//!   "seed": 1337,
//!   "shots": 1024 }
//! ```
//!
//! Decoding is strict: unknown versions, structurally malformed circuits,
//! and non-finite `seed` / `shots` values are rejected rather than
//! repaired. The engine itself knows nothing about this format; it only
//! guarantees that its data model round-trips through it.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::Circuit;
//! use alsvin_share::{SharePayload, decode, encode};
//!
//! let payload = SharePayload::new(Circuit::bell(), 1337, 1024);
//! let json = encode(&payload).unwrap();
//! assert_eq!(decode(&json).unwrap(), payload);
//! ```

pub mod error;
pub mod payload;

pub use error::{ShareError, ShareResult};
pub use payload::{PAYLOAD_VERSION, SharePayload, decode, encode};
