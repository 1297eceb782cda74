//! Error types for the payload codec.

use thiserror::Error;

use crate::payload::PAYLOAD_VERSION;

/// Errors produced while encoding or decoding a share payload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShareError {
    /// The payload declares a version this codec does not understand.
    #[error("unsupported payload version {got}, expected {}", PAYLOAD_VERSION)]
    UnsupportedVersion {
        /// The version found in the payload.
        got: u64,
    },

    /// A numeric field was not finite.
    #[error("payload field `{field}` must be a finite number")]
    NonFiniteField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The payload is not structurally valid JSON for the schema.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for codec operations.
pub type ShareResult<T> = Result<T, ShareError>;
