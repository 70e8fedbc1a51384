//! Plaintext recovery for exponential ElGamal.
//!
//! Decryption yields `m · BASE8`, not `m`. This module inverts that
//! embedding for plaintexts in a bounded range `[0, 2^max_bits)` with the
//! baby-step giant-step algorithm:
//!
//! - **Baby steps** (precomputed once): `j · BASE8` for
//!   `j in [0, n)`, `n = 2^ceil(max_bits / 2)`, stored in a hash table.
//! - **Giant steps** (per query): starting from the target, repeatedly
//!   subtract `n · BASE8` until a baby step matches.
//!
//! Memory is `O(n)` points and each query costs at most
//! `2^floor(max_bits / 2)` point additions. A table can be shared across
//! threads and reused for any number of queries. Queries return as soon as
//! a baby step matches.

mod bsgs;
mod params;

pub use bsgs::BabyStepGiantStep;
pub use params::{MAX_SUPPORTED_BITS, RecoveryParamError, RecoveryParams};

use thiserror::Error;

/// Errors raised by plaintext recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoveryError {
    /// The table parameters are unusable.
    #[error("invalid recovery parameters: {0}")]
    InvalidParams(#[from] RecoveryParamError),

    /// No `m < 2^bits` maps to the queried point.
    #[error("plaintext not found within the {bits}-bit search range")]
    OutOfRange { bits: u32 },
}
