//! Parameter definitions and validation for plaintext recovery.

use thiserror::Error;

/// Largest supported search range, in bits.
///
/// At 48 bits the baby-step table already holds 2²⁴ points.
pub const MAX_SUPPORTED_BITS: u32 = 48;

/// Configuration of a baby-step giant-step table.
///
/// `max_bits` bounds the recoverable plaintexts to `[0, 2^max_bits)` and
/// fixes the memory/time trade-off: the table stores
/// `2^ceil(max_bits / 2)` points and a query performs at most
/// `2^floor(max_bits / 2)` additions.
///
/// # Recommended Values
///
/// - `32`: full `u32` plaintexts, 65 536 table entries (default)
/// - `40`: the widest range practical for interactive use, ~1M entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveryParams {
    /// Bit length of the largest recoverable plaintext (1..=48).
    pub max_bits: u32,
}

/// Errors that can occur during parameter validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryParamError {
    /// The search range must cover at least one bit.
    #[error("max_bits must be at least 1")]
    ZeroBits,

    /// The search range exceeds [`MAX_SUPPORTED_BITS`].
    #[error("max_bits = {0} exceeds the supported maximum of 48")]
    TooManyBits(u32),
}

impl RecoveryParams {
    pub fn new(max_bits: u32) -> Self {
        Self { max_bits }
    }

    pub fn validate(&self) -> Result<(), RecoveryParamError> {
        if self.max_bits == 0 {
            return Err(RecoveryParamError::ZeroBits);
        }

        if self.max_bits > MAX_SUPPORTED_BITS {
            return Err(RecoveryParamError::TooManyBits(self.max_bits));
        }

        Ok(())
    }

    /// Number of baby steps, `2^ceil(max_bits / 2)`.
    pub(crate) fn baby_steps(&self) -> u64 {
        1u64 << self.max_bits.div_ceil(2)
    }

    /// Number of giant steps, `2^floor(max_bits / 2)`.
    pub(crate) fn giant_steps(&self) -> u64 {
        1u64 << (self.max_bits / 2)
    }
}

impl Default for RecoveryParams {
    /// Default parameters: 32-bit plaintexts.
    fn default() -> Self {
        Self { max_bits: 32 }
    }
}
