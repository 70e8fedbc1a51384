use crate::curve::{BASE8, Point, SUBGROUP_ORDER};
use crate::field::Fq;

/// Returns `true` iff `point` is on the curve and `l · point` is the
/// identity.
///
/// Every point received from outside the crate must pass this check
/// before it is used as a public key.
pub fn is_valid_subgroup(point: &Point) -> bool {
    point.is_on_curve() && point.mul_bigint(SUBGROUP_ORDER).is_zero()
}

/// Derives the public key `private_key · BASE8`.
///
/// The private key is expected to be sampled uniformly from `[0, l)`; its
/// range is not checked. Any scalar yields a point of the prime-order
/// subgroup since `BASE8` generates it.
pub fn priv_to_pub_key(private_key: &Fq) -> Point {
    BASE8.mul_scalar(private_key)
}
