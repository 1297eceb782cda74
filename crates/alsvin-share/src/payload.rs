//! The versioned share payload and its JSON codec.

use serde::{Deserialize, Serialize};

use alsvin_ir::Circuit;

use crate::error::{ShareError, ShareResult};

/// The payload schema version this codec reads and writes.
pub const PAYLOAD_VERSION: u64 = 1;

/// A decoded share payload: a circuit plus the sampling parameters.
///
/// `seed` and `shots` arrive already coerced to the forms the engine
/// consumes: the seed truncated toward zero into `u64` (negatives clamp
/// to 0), the shot count floored and clamped to `[0, u32::MAX]`. The
/// sampler itself truncates the 64-bit seed to 32 bits when seeding its
/// PRNG.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    /// The circuit to simulate.
    pub circuit: Circuit,
    /// Sampler seed.
    pub seed: u64,
    /// Number of shots to draw.
    pub shots: u32,
}

impl SharePayload {
    /// Create a payload.
    pub fn new(circuit: Circuit, seed: u64, shots: u32) -> Self {
        Self {
            circuit,
            seed,
            shots,
        }
    }
}

/// Wire form used for encoding: integers serialize cleanly.
#[derive(Serialize)]
struct PayloadOut<'a> {
    v: u64,
    circuit: &'a Circuit,
    seed: u64,
    shots: u32,
}

/// Wire form used for decoding.
///
/// `seed` is read as a raw JSON number so that full 64-bit integer seeds
/// survive exactly (a double would lose precision above 2^53) while
/// fractional and negative values survive parsing long enough to be
/// coerced explicitly. `shots` is read as a double for the same coercion
/// reason; `v` and the circuit fields are strictly typed, so a fractional
/// `nQubits` or a non-list `steps` is rejected by serde.
#[derive(Deserialize)]
struct PayloadIn {
    v: u64,
    circuit: Circuit,
    seed: serde_json::Number,
    shots: f64,
}

/// Encode a payload to its JSON wire form.
pub fn encode(payload: &SharePayload) -> ShareResult<String> {
    let out = PayloadOut {
        v: PAYLOAD_VERSION,
        circuit: &payload.circuit,
        seed: payload.seed,
        shots: payload.shots,
    };
    Ok(serde_json::to_string(&out)?)
}

/// Decode a payload from its JSON wire form.
///
/// Rejects payloads whose version is not [`PAYLOAD_VERSION`], whose
/// structure does not match the schema, or whose `seed` / `shots` are not
/// finite.
pub fn decode(json: &str) -> ShareResult<SharePayload> {
    let raw: PayloadIn = serde_json::from_str(json)?;
    if raw.v != PAYLOAD_VERSION {
        return Err(ShareError::UnsupportedVersion { got: raw.v });
    }
    if !raw.shots.is_finite() {
        return Err(ShareError::NonFiniteField { field: "shots" });
    }

    let seed = decode_seed(&raw.seed)?;
    let shots = raw.shots.floor().clamp(0.0, f64::from(u32::MAX)) as u32;

    Ok(SharePayload {
        circuit: raw.circuit,
        seed,
        shots,
    })
}

/// Coerce the wire seed: exact `u64` integers pass through unchanged;
/// anything else is truncated toward zero with negatives clamping to 0.
fn decode_seed(seed: &serde_json::Number) -> ShareResult<u64> {
    if let Some(s) = seed.as_u64() {
        return Ok(s);
    }
    let f = seed
        .as_f64()
        .filter(|f| f.is_finite())
        .ok_or(ShareError::NonFiniteField { field: "seed" })?;
    Ok(f.trunc().max(0.0) as u64)
}
