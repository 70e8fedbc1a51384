//! Error taxonomy shared by the key, codec and encryption layers.

use thiserror::Error;

/// Errors raised when untrusted keys or encodings are rejected.
///
/// Every variant is a deterministic function of the input: retrying the
/// same call fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The point is not on the curve, or is not annihilated by the
    /// subgroup order `l`.
    #[error("invalid key: point is not in the prime-order subgroup")]
    InvalidKey,

    /// The packed bytes are not the canonical encoding of a curve point.
    #[error("invalid encoding: packed key is not a canonical curve point encoding")]
    InvalidEncoding,

    /// Hex decoding of a packed key failed.
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// A hex-decoded packed key did not have exactly 32 bytes.
    #[error("invalid packed key length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Result type for key, codec and encryption operations.
pub type Result<T> = std::result::Result<T, Error>;
