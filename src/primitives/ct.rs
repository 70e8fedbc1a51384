/// Fixed-shape comparison utilities.
///
/// Implementations visit every byte of both operands regardless of where
/// (or whether) they first differ, so the control flow does not depend on
/// the compared values.
pub trait ConstantTime {
    /// Returns `true` if `self == other`.
    ///
    /// This method must not introduce data-dependent branches or early exits.
    fn ct_eq(&self, other: &Self) -> bool;

    /// Returns `true` if `self < other` when both are read as big-endian
    /// unsigned integers.
    fn ct_lt(&self, other: &Self) -> bool;
}

impl ConstantTime for [u8; 32] {
    /// All bytes are XORed and accumulated before comparison, ensuring that
    /// the execution time does not depend on where the first difference occurs.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self.iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0, |acc, v| acc | v)
            == 0
    }

    /// Scans from the most significant byte down. The first differing
    /// position fixes the result; later positions are still visited but
    /// masked out by `decided`.
    #[inline(always)]
    fn ct_lt(&self, other: &Self) -> bool {
        let mut lt = 0u8;
        let mut decided = 0u8;

        for (&a, &b) in self.iter().zip(other) {
            let diff = ((((a ^ b) as u64).wrapping_sub(1) >> 63) as u8) ^ 1;
            let less = ((a as u16).wrapping_sub(b as u16) >> 15) as u8;
            let take = diff & !decided & 1;

            lt |= less & take;
            decided |= take;
        }

        lt == 1
    }
}
