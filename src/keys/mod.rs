//! Baby Jubjub key material.
//!
//! This module groups everything that turns scalars and bytes into
//! trusted public keys:
//!
//! - **Subgroup validation**: a point is admissible as a key only if it is
//!   on the curve and annihilated by the subgroup order `l`. Points in the
//!   small cofactor subgroup, or mixed with it, are rejected.
//! - **Key derivation**: `pk = sk · BASE8`.
//! - **Point codec**: the 32-byte packed format shared with circomlib-style
//!   JavaScript tooling (little-endian `y`, sign of `x` in bit 7 of byte
//!   31), with strict canonicity so that every valid key has exactly one
//!   accepted encoding.
//!
//! ## Structure
//!
//! - `subgroup`  
//!   The admissibility predicate and key derivation.
//!
//! - `codec`  
//!   `pack_point` / `unpack_point` over raw coordinates.
//!
//! - `core`  
//!   Typed wrappers (`PrivateKey`, `PublicKey`, `PackedPublicKey`) whose
//!   constructors route through the checks above.

mod codec;
mod core;
mod subgroup;

pub(crate) use codec::decode_unchecked;
pub use codec::{SIGN_MASK, pack_point, unpack_point};
pub use self::core::*;
pub use subgroup::{is_valid_subgroup, priv_to_pub_key};
