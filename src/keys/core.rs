//! Typed Baby Jubjub keys.
//!
//! The raw-coordinate functions in this module's siblings accept any
//! `Point`. The wrappers below carry validity in the type instead: a
//! [`PublicKey`] can only be obtained from a private key or through a
//! subgroup check, so code holding one never needs to re-validate it.

use std::fmt::{Debug, Display, Formatter};

use ark_ff::{BigInteger, PrimeField, UniformRand};
use rand::{CryptoRng, RngCore};

use super::codec::{pack_unchecked, unpack_point};
use super::subgroup::{is_valid_subgroup, priv_to_pub_key};
use crate::curve::Point;
use crate::error::{Error, Result};
use crate::field::Fq;

/// A Baby Jubjub private key: a scalar intended to lie in `[0, l)`.
///
/// The scalar is stored as a base-field element, matching the way it is
/// fed to circuits. `Debug` output never reveals it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(Fq);

impl PrivateKey {
    /// Wraps an existing scalar. Its range is not checked.
    #[inline]
    pub fn from_scalar(scalar: Fq) -> Self {
        Self(scalar)
    }

    /// Samples a scalar uniformly from `[0, l)`.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let s = ark_ed_on_bn254::Fr::rand(rng);

        Self(Fq::from_le_bytes_mod_order(&s.into_bigint().to_bytes_le()))
    }

    #[inline]
    pub fn scalar(&self) -> Fq {
        self.0
    }

    /// Derives the matching public key, `scalar · BASE8`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(priv_to_pub_key(&self.0))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A point known to be in the prime-order subgroup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Validates `point` and wraps it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] if `point` fails [`is_valid_subgroup`].
    pub fn new(point: Point) -> Result<Self> {
        if !is_valid_subgroup(&point) {
            return Err(Error::InvalidKey);
        }

        Ok(Self(point))
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.0
    }

    /// Compresses the key. Infallible: validity was established on
    /// construction.
    pub fn pack(&self) -> PackedPublicKey {
        PackedPublicKey(pack_unchecked(&self.0))
    }

    /// Decompresses and validates a packed key.
    pub fn unpack(packed: &PackedPublicKey) -> Result<Self> {
        unpack_point(&packed.0).map(Self)
    }
}

impl From<PublicKey> for Point {
    fn from(value: PublicKey) -> Self {
        value.0
    }
}

/// The 32-byte wire form of a public key.
///
/// Holding a `PackedPublicKey` says nothing about validity; it is checked
/// when the key is unpacked or encrypted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedPublicKey([u8; 32]);

impl PackedPublicKey {
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parses 64 hex characters.
    ///
    /// # Errors
    ///
    /// [`Error::Hex`] on malformed hex, [`Error::InvalidLength`] if the
    /// input does not decode to exactly 32 bytes.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        let len = bytes.len();

        let bytes: [u8; 32] = bytes.try_into().map_err(|_| Error::InvalidLength(len))?;

        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Shorthand for [`PublicKey::unpack`].
    pub fn unpack(&self) -> Result<PublicKey> {
        PublicKey::unpack(self)
    }
}

impl Display for PackedPublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 32]> for PackedPublicKey {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl From<PackedPublicKey> for [u8; 32] {
    fn from(value: PackedPublicKey) -> Self {
        value.0
    }
}

/// Generates a fresh key pair from `rng`.
///
/// Returns `(public, private)`.
pub fn generate_keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (PublicKey, PrivateKey) {
    let private = PrivateKey::random(rng);
    let public = private.public_key();

    (public, private)
}
