//! Projective coordinates `(X : Y : Z)` with `x = X/Z`, `y = Y/Z`.
//!
//! Used internally so that a scalar multiplication costs a single field
//! inversion instead of one per addition.

use ark_ff::{Field, MontFp};

use super::point::Point;
use super::{A, D};
use crate::field::Fq;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Projective {
    x: Fq,
    y: Fq,
    z: Fq,
}

impl Projective {
    pub(crate) const IDENTITY: Self = Self {
        x: MontFp!("0"),
        y: MontFp!("1"),
        z: MontFp!("1"),
    };

    /// Unified addition (add-2008-bbjlp), complete on this curve.
    pub(crate) fn add(&self, other: &Self) -> Self {
        let a = self.z * other.z;
        let b = a.square();
        let c = self.x * other.x;
        let d = self.y * other.y;
        let e = D * c * d;
        let f = b - e;
        let g = b + e;

        let x = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        let y = a * g * (d - A * c);
        let z = f * g;

        Self { x, y, z }
    }

    #[inline]
    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// Converts back to affine coordinates.
    ///
    /// `Z = 0` only arises from inputs that are not on the curve; it maps
    /// to `(0, 0)`, which is itself off the curve and fails any later
    /// validation.
    pub(crate) fn to_affine(self) -> Point {
        match self.z.inverse() {
            Some(z_inv) => Point::new(self.x * z_inv, self.y * z_inv),
            None => Point::new(MontFp!("0"), MontFp!("0")),
        }
    }
}

impl From<Point> for Projective {
    fn from(p: Point) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            z: MontFp!("1"),
        }
    }
}
