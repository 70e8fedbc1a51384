use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, Neg, Sub};

use ark_ff::{BitIteratorBE, Field, MontFp, PrimeField};

use super::projective::Projective;
use super::{A, D};
use crate::field::Fq;

/// A point in affine coordinates `(x, y)`.
///
/// Construction performs no validation: a `Point` may lie off the curve or
/// outside the prime-order subgroup. Keys are validated at the `keys`
/// layer before they are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: Fq,
    y: Fq,
}

impl Point {
    /// The neutral element `(0, 1)`.
    pub const IDENTITY: Self = Self::new(MontFp!("0"), MontFp!("1"));

    /// Wraps a coordinate pair without checking it.
    pub const fn new(x: Fq, y: Fq) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> Fq {
        self.x
    }

    #[inline]
    pub fn y(&self) -> Fq {
        self.y
    }

    /// Checks `a·x² + y² = 1 + d·x²·y²`.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();

        A * x2 + y2 == Fq::from(1u64) + D * x2 * y2
    }

    /// Returns `true` for the identity `(0, 1)`.
    pub fn is_zero(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// `2·self`.
    pub fn double(&self) -> Self {
        Projective::from(*self).double().to_affine()
    }

    /// Multiplies by the canonical integer value of a field element.
    pub fn mul_scalar(&self, k: &Fq) -> Self {
        self.mul_bigint(k.into_bigint())
    }

    /// Multiplies by a small integer.
    pub fn mul_u64(&self, k: u64) -> Self {
        self.mul_bigint([k])
    }

    /// Multiplies by an unsigned integer given as little-endian `u64`
    /// limbs, using double-and-add over projective coordinates.
    ///
    /// `0·P` is the identity.
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, k: S) -> Self {
        let base = Projective::from(*self);
        let mut acc = Projective::IDENTITY;

        for bit in BitIteratorBE::without_leading_zeros(k) {
            acc = acc.double();
            if bit {
                acc = acc.add(&base);
            }
        }

        acc.to_affine()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Projective::from(self).add(&Projective::from(rhs)).to_affine()
    }
}

impl Neg for Point {
    type Output = Point;

    /// `-(x, y) = (-x, y)`.
    fn neg(self) -> Self::Output {
        Point::new(-self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        self + (-rhs)
    }
}

impl Display for Point {
    /// Formats the point as `(x, y)` with decimal coordinates.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
