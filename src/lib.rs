//! Limb Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers kept as a sign and a trimmed vector of 32-bit limbs.
//!   Shifts behave as if BigInt were represented in infinite two's-complement notation.
//! - [`FormatError`]: the one way construction can fail, a malformed decimal literal.

mod arith;
mod big_int;
mod big_num_cache;
mod big_num_constants;
mod codec;
mod error;
mod shift;

pub use big_int::BigInt;
pub use error::{FormatError, ParseResult};
