//! Baby Jubjub twisted Edwards curve.
//!
//! The curve is defined over the BN254 scalar field by
//!
//! `a·x² + y² = 1 + d·x²·y²`, with `a = 168700` and `d = 168696`,
//!
//! using the same coordinates as circomlib (arkworks' `ed-on-bn254` uses
//! a rescaled `a = 1` model, so its points cannot be used directly here).
//!
//! The full group has order `8·l`. [`GENERATOR`] generates all of it;
//! [`BASE8`] `= 8·GENERATOR` generates the prime-order subgroup of order
//! [`SUBGROUP_ORDER`] `= l`, and is the base point for keys and for
//! embedding ElGamal plaintexts.
//!
//! Because `a` is a square and `d` is not, the addition law is complete:
//! it is valid for every pair of points on the curve, including doubling
//! and the identity `(0, 1)`.

mod point;
mod projective;

use ark_ff::{BigInt, MontFp, PrimeField};

use crate::field::Fq;

pub use point::Point;

/// Curve coefficient `a`.
pub const A: Fq = MontFp!("168700");

/// Curve coefficient `d`.
pub const D: Fq = MontFp!("168696");

/// Generator of the full curve group (order `8·l`).
pub const GENERATOR: Point = Point::new(
    MontFp!("995203441582195749578291179787384436505546430278305826713579947235728471134"),
    MontFp!("5472060717959818805561601436314318772137091100104008585924551046643952123905"),
);

/// Generator of the prime-order subgroup, `8·GENERATOR`.
pub const BASE8: Point = Point::new(
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553"),
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203"),
);

/// Prime order `l` of the subgroup generated by [`BASE8`].
///
/// `l = 2736030358979909402780800718157159386076813972158567259200215660948447373041`,
/// which is also the modulus of arkworks' Baby Jubjub scalar field.
pub const SUBGROUP_ORDER: BigInt<4> = ark_ed_on_bn254::Fr::MODULUS;

/// Cofactor of the curve group.
pub const COFACTOR: u64 = 8;
