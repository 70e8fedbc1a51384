//! Base field of the Baby Jubjub curve.
//!
//! Curve coordinates live in `F_p` where `p` is the scalar field prime of
//! BN254:
//!
//! `p = 21888242871839275222246405745257275088548364400416034343698204186575808495617`
//!
//! Arithmetic is delegated to `ark-bn254`. This module only adds what the
//! codec needs on top of it: the canonical 32-byte little-endian encoding,
//! integer ordering of canonical representatives, and a fallible square
//! root.

use ark_ff::{BigInteger, Field, MontFp, PrimeField};

use crate::primitives::{ConstantTime, U256};

/// An element of the Baby Jubjub base field.
///
/// This is BN254's *scalar* field (`ark_bn254::Fr`), renamed because it
/// is where curve coordinates live. It is unrelated to `ark_bn254::Fq`.
pub use ark_bn254::Fr as Fq;

/// `(p - 1) / 2`, the largest canonical value whose encoding leaves the
/// packed sign flag clear.
pub const HALF_MODULUS: Fq =
    MontFp!("10944121435919637611123202872628637544274182200208017171849102093287904247808");

/// Canonical little-endian encoding of `x`, i.e. of its representative in
/// `[0, p)`.
pub fn to_le_bytes(x: &Fq) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&x.into_bigint().to_bytes_le());
    out
}

/// Decodes 32 little-endian bytes, reducing modulo `p`.
///
/// Values `>= p` wrap silently; use [`from_canonical_le_bytes`] when the
/// encoding must be unique.
pub fn from_le_bytes_mod_order(bytes: &[u8; 32]) -> Fq {
    Fq::from_le_bytes_mod_order(bytes)
}

/// Decodes 32 little-endian bytes, accepting only the canonical
/// representative.
///
/// The decoded value is re-encoded and compared byte for byte with the
/// input, so any array whose integer value is `>= p` is rejected.
pub fn from_canonical_le_bytes(bytes: &[u8; 32]) -> Option<Fq> {
    let x = from_le_bytes_mod_order(bytes);

    if to_le_bytes(&x).ct_eq(bytes) {
        Some(x)
    } else {
        None
    }
}

/// Returns `true` iff the canonical value of `x` is strictly less than
/// that of `y`.
///
/// Both operands are compared through their 32-byte little-endian
/// encodings, most significant byte (index 31) first.
pub fn lt_bytes32(x: &Fq, y: &Fq) -> bool {
    let x = U256::from_le_bytes(to_le_bytes(x));
    let y = U256::from_le_bytes(to_le_bytes(y));

    x.less_than(&y)
}

/// Returns `true` iff `x` is in the upper half of the field, i.e. its
/// canonical value exceeds `(p - 1) / 2`.
#[inline]
pub fn is_upper_half(x: &Fq) -> bool {
    lt_bytes32(&HALF_MODULUS, x)
}

/// Square root of `x`, or `None` if `x` is not a quadratic residue.
///
/// Which of the two roots is returned is unspecified; callers that need a
/// particular one must normalize it themselves.
pub fn sqrt(x: &Fq) -> Option<Fq> {
    x.sqrt()
}
