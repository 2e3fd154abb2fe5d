//! Errors surfaced by [`BigInt`](crate::BigInt) construction.
//!
//! Only text parsing can fail. Arithmetic, comparison, shifts and conversion
//! from machine integers are total.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing but whitespace was supplied.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// The text is not an optionally signed run of decimal digits.
    #[error("invalid decimal integer literal: {input:?}")]
    Malformed { input: String },
}

pub type ParseResult<T> = Result<T, FormatError>;
