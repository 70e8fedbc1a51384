//! Primitive types
//!
//! This module defines the low-level value types the field and codec
//! layers are built on.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate a full-featured
//! big-integer library: all modular arithmetic lives in the `field` module.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer with explicit
//!   little-endian conversions, used to order canonical field encodings
//! - `ConstantTime`: fixed-shape comparisons over 32-byte arrays

mod ct;
mod u256;

pub use ct::ConstantTime;
pub use u256::U256;
