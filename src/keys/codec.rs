//! Compressed point encoding.
//!
//! Layout of a packed key:
//!
//! ```text
//! byte  0 ............................. 31
//!       y (little-endian, canonical)   | bit 7 of byte 31: x > (p-1)/2
//! ```
//!
//! Since `p < 2²⁵⁴`, bit 7 of byte 31 is never part of a canonical `y`.

use ark_ff::{Field, One, Zero};
use tracing::{debug, trace};

use super::subgroup::is_valid_subgroup;
use crate::curve::{A, D, Point};
use crate::error::{Error, Result};
use crate::field::{self, Fq};

/// Sign flag for `x`, in byte 31 of a packed key.
pub const SIGN_MASK: u8 = 0x80;

/// Compresses a public key to 32 bytes.
///
/// # Errors
///
/// [`Error::InvalidKey`] if `point` fails [`is_valid_subgroup`].
pub fn pack_point(point: &Point) -> Result<[u8; 32]> {
    if !is_valid_subgroup(point) {
        debug!("refusing to pack a point outside the prime-order subgroup");
        return Err(Error::InvalidKey);
    }

    Ok(pack_unchecked(point))
}

/// Encoding step of [`pack_point`] for points already known to be valid.
pub(crate) fn pack_unchecked(point: &Point) -> [u8; 32] {
    let mut out = field::to_le_bytes(&point.y());

    if field::is_upper_half(&point.x()) {
        out[31] |= SIGN_MASK;
    }

    out
}

/// Decompresses and validates a packed public key.
///
/// # Errors
///
/// - [`Error::InvalidEncoding`] if `y` is not canonical, if no curve point
///   has this `y`, or if the sign flag is set on a point with `x = 0`.
/// - [`Error::InvalidKey`] if the recovered point is not in the
///   prime-order subgroup.
pub fn unpack_point(bytes: &[u8; 32]) -> Result<Point> {
    let point = decode_unchecked(bytes)?;

    if !is_valid_subgroup(&point) {
        debug!("packed key decodes to a point outside the prime-order subgroup");
        return Err(Error::InvalidKey);
    }

    trace!("unpacked public key");
    Ok(point)
}

/// Recovers the curve point named by `bytes` without the subgroup check.
///
/// The result is on the curve but may have small-order components.
pub(crate) fn decode_unchecked(bytes: &[u8; 32]) -> Result<Point> {
    let sign = bytes[31] & SIGN_MASK != 0;

    let mut raw = *bytes;
    raw[31] &= !SIGN_MASK;

    let Some(y) = field::from_canonical_le_bytes(&raw) else {
        debug!("packed key rejected: y is not the canonical representative");
        return Err(Error::InvalidEncoding);
    };

    // x² = (1 - y²) / (a - d·y²)
    let y2 = y.square();
    let Some(den_inv) = (A - D * y2).inverse() else {
        debug!("packed key rejected: a - d·y² vanishes");
        return Err(Error::InvalidEncoding);
    };

    let Some(mut x) = field::sqrt(&((Fq::one() - y2) * den_inv)) else {
        debug!("packed key rejected: no curve point has this y");
        return Err(Error::InvalidEncoding);
    };

    // The root returned by `sqrt` has no fixed sign; align it with the flag.
    if sign != field::is_upper_half(&x) {
        x = -x;
    }

    // -0 = 0: the flag cannot be honoured and the identity would gain a
    // second encoding.
    if sign && x.is_zero() {
        debug!("packed key rejected: sign flag set with x = 0");
        return Err(Error::InvalidEncoding);
    }

    Ok(Point::new(x, y))
}
