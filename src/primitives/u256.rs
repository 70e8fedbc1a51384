//! 256-bit unsigned integer primitive
//!
//! `U256` exists to order canonical field encodings. It is a comparable
//! value type, not a big-integer arithmetic library.
//!
//! The internal representation is big-endian, so the derived `Ord`
//! matches integer ordering. Field elements travel as little-endian bytes
//! and are converted on the way in.

use super::ct::ConstantTime;

/// Fixed-size 256-bit unsigned integer, stored as 32 big-endian bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// Builds a value from 32 little-endian bytes (least significant first).
    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut be = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            be[i] = bytes[31 - i];
            i += 1;
        }
        U256(be)
    }

    /// Strict `<` comparison.
    ///
    /// Without the `speed` feature every one of the 32 byte positions is
    /// visited, from most to least significant, and the first difference
    /// decides the result. With `speed` this is a plain short-circuiting
    /// comparison. Both return the same answer for every input.
    #[cfg(not(feature = "speed"))]
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.0.ct_lt(&other.0)
    }

    /// Strict `<` comparison (short-circuiting fast path).
    #[cfg(feature = "speed")]
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self < other
    }
}
