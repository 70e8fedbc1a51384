use std::ops::Add;

use tracing::{debug, trace};

use crate::curve::{BASE8, Point};
use crate::error::{Error, Result};
use crate::field::Fq;
use crate::keys::{PrivateKey, PublicKey, decode_unchecked, is_valid_subgroup};
use crate::recovery::{BabyStepGiantStep, RecoveryError};

/// An ElGamal ciphertext `(C1, C2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    c1: Point,
    c2: Point,
}

impl Ciphertext {
    pub const fn new(c1: Point, c2: Point) -> Self {
        Self { c1, c2 }
    }

    /// The ephemeral component `r · BASE8`.
    #[inline]
    pub fn c1(&self) -> Point {
        self.c1
    }

    /// The masked component `r · P + m · BASE8`.
    #[inline]
    pub fn c2(&self) -> Point {
        self.c2
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;

    /// Homomorphic addition of the underlying plaintexts.
    fn add(self, rhs: Ciphertext) -> Self::Output {
        Ciphertext::new(self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

/// Embeds a plaintext as `m · BASE8`.
pub fn embed(plaintext: u64) -> Point {
    BASE8.mul_u64(plaintext)
}

/// Encrypts `plaintext` under `public_key` with randomness `randomness`.
///
/// # Errors
///
/// [`Error::InvalidKey`] if `public_key` fails [`is_valid_subgroup`].
pub fn exp_elgamal_encrypt(
    public_key: &Point,
    plaintext: u64,
    randomness: &Fq,
) -> Result<Ciphertext> {
    if !is_valid_subgroup(public_key) {
        debug!("refusing to encrypt to a point outside the prime-order subgroup");
        return Err(Error::InvalidKey);
    }

    Ok(encrypt_unchecked(public_key, plaintext, randomness))
}

/// Decrypts to the embedded plaintext point `m · BASE8`.
pub fn exp_elgamal_decrypt(private_key: &Fq, ciphertext: &Ciphertext) -> Point {
    let shared = ciphertext.c1.mul_scalar(private_key);

    ciphertext.c2 - shared
}

/// Decodes a packed public key and encrypts to it, checking the subgroup
/// once.
///
/// Produces exactly the ciphertext `unpack_point` followed by
/// [`exp_elgamal_encrypt`] would.
///
/// # Errors
///
/// [`Error::InvalidEncoding`] or [`Error::InvalidKey`], as for
/// `unpack_point`, before any encryption work is done.
pub fn exp_elgamal_encrypt_packed(
    packed_public_key: &[u8; 32],
    plaintext: u64,
    randomness: &Fq,
) -> Result<Ciphertext> {
    let public_key = decode_unchecked(packed_public_key)?;

    if !is_valid_subgroup(&public_key) {
        debug!("packed key decodes to a point outside the prime-order subgroup");
        return Err(Error::InvalidKey);
    }

    Ok(encrypt_unchecked(&public_key, plaintext, randomness))
}

/// Decrypts and recovers the integer plaintext with a precomputed table.
///
/// # Errors
///
/// [`RecoveryError::OutOfRange`] if the plaintext is outside the table's
/// search range (or the ciphertext was not produced under this key).
pub fn exp_elgamal_decrypt_to_u64(
    private_key: &Fq,
    ciphertext: &Ciphertext,
    table: &BabyStepGiantStep,
) -> std::result::Result<u64, RecoveryError> {
    table.recover(&exp_elgamal_decrypt(private_key, ciphertext))
}

fn encrypt_unchecked(public_key: &Point, plaintext: u64, randomness: &Fq) -> Ciphertext {
    let c1 = BASE8.mul_scalar(randomness);
    let shared = public_key.mul_scalar(randomness);
    let c2 = shared + embed(plaintext);

    trace!("encrypted plaintext");
    Ciphertext::new(c1, c2)
}

impl PublicKey {
    /// Encrypts to this key. Infallible: the key is already validated.
    pub fn encrypt(&self, plaintext: u64, randomness: &Fq) -> Ciphertext {
        encrypt_unchecked(&self.point(), plaintext, randomness)
    }
}

impl PrivateKey {
    /// See [`exp_elgamal_decrypt`].
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Point {
        exp_elgamal_decrypt(&self.scalar(), ciphertext)
    }
}
