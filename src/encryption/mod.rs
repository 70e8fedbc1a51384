//! Exponential ElGamal over Baby Jubjub.
//!
//! A plaintext `m` is embedded as `m · BASE8` and encrypted under a public
//! key `P` with randomness `r` as
//!
//! - `C1 = r · BASE8`
//! - `C2 = r · P + m · BASE8`
//!
//! Decryption with the private key `sk` returns `C2 - sk · C1 = m · BASE8`.
//! Turning that point back into `m` requires a bounded discrete-log search,
//! provided by the `recovery` module.
//!
//! Because plaintexts live in the exponent, ciphertexts under the same key
//! add component-wise: `Enc(a) + Enc(b)` decrypts to `(a + b) · BASE8`.
//!
//! # Notes
//!
//! - `r` must be sampled uniformly from `[0, l)` and never reused.
//!   Reusing it across two encryptions under the same key reveals the
//!   difference of the plaintexts. This is not checked.
//! - Decryption does not validate the ciphertext; a malformed one yields a
//!   meaningless point, not an error.

mod elgamal;

pub use elgamal::*;
