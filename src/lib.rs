//! Exponential ElGamal over the Baby Jubjub curve
//!
//! This crate provides Baby Jubjub key handling and additively homomorphic
//! ElGamal encryption of small integers, bit-compatible with the
//! circomlib-style JavaScript tooling used to produce circuit inputs.
//!
//! The focus is on **auditability**: the subtle properties live in a small
//! number of explicit checks (canonical point encoding, sign-bit
//! disambiguation, subgroup validation of every externally supplied key).
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size value types (`U256`) and fixed-shape byte comparisons used
//!   to order canonical field encodings.
//!
//! - `field`
//!   The base field `F_p` (BN254 scalar field), its canonical 32-byte
//!   little-endian encoding, the `lt_bytes32` comparator and square roots.
//!
//! - `curve`
//!   The twisted Edwards curve `168700·x² + y² = 1 + 168696·x²·y²`, its
//!   constants and affine point arithmetic.
//!
//! - `keys`
//!   Subgroup validation, key derivation, and the 32-byte packed public
//!   key format, together with typed `PrivateKey` / `PublicKey` /
//!   `PackedPublicKey` wrappers.
//!
//! - `encryption`
//!   Exponential ElGamal: encryption to raw, typed and packed public keys,
//!   decryption to the embedded point, and homomorphic ciphertext addition.
//!
//! - `recovery`
//!   Bounded baby-step giant-step search that maps a decrypted point
//!   `m·BASE8` back to the integer `m`.
//!
//! # Design goals
//!
//! - Every entry point that consumes a point or packed key validates it
//!   before doing any further algebra, and fails with an explicit
//!   [`Error`] rather than panicking.
//! - All operations are pure functions over `Copy` values: there is no
//!   shared mutable state, and everything is safe to call concurrently.
//! - Randomness is always supplied by the caller. Each encryption needs a
//!   fresh, uniformly random scalar; this is a precondition, not a check.
//!
//! # Example
//!
//! ```rust
//! use babyjub_elgamal::encryption::exp_elgamal_decrypt_to_u64;
//! use babyjub_elgamal::keys::{PrivateKey, generate_keypair};
//! use babyjub_elgamal::recovery::{BabyStepGiantStep, RecoveryParams};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let (public, private) = generate_keypair(&mut rng);
//! let r = PrivateKey::random(&mut rng).scalar();
//!
//! let ciphertext = public.encrypt(42, &r);
//!
//! let table = BabyStepGiantStep::new(RecoveryParams::new(16)).unwrap();
//! let m = exp_elgamal_decrypt_to_u64(&private.scalar(), &ciphertext, &table).unwrap();
//! assert_eq!(m, 42);
//! ```

mod error;

pub mod curve;
pub mod encryption;
pub mod field;
pub mod keys;
pub mod primitives;
pub mod recovery;

pub use error::{Error, Result};
