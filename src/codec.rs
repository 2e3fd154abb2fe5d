//! Conversion between [`BigInt`] and machine integers or decimal text.
//!
//! Decimal text goes through an intermediate base `10^9` digit vector. The
//! same exact radix conversion moves that vector into base `2^32` limbs on the
//! way in and back out again for printing.

use std::fmt::{self, Display};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::BigInt;
use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{FormatError, ParseResult};

// 实现转换
macro_rules! impl_unsigned_to_big_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_num {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_num!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_num!(i8, i16, i32, i64, i128, isize);

impl BigInt {
    fn value_of(mut val: u128, negative: bool) -> BigInt {
        if val <= MAX_CONSTANT as u128 {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut limbs = Vec::with_capacity(4);
        while val != 0 {
            limbs.push(val as u32);
            val >>= LIMB_BITS;
        }
        BigInt::from_limbs(negative, limbs)
    }
}

// 实现解析
impl BigInt {
    /// Parses an optionally signed decimal literal.
    ///
    /// Leading and trailing whitespace is ignored, as is whitespace between
    /// the sign and the first digit. Leading zeros are accepted.
    pub fn parse(text: &str) -> ParseResult<BigInt> {
        let caps = match DECIMAL_LITERAL.captures(text) {
            Some(caps) => caps,
            None => {
                let err = if text.trim().is_empty() {
                    FormatError::Empty
                } else {
                    FormatError::Malformed { input: text.to_owned() }
                };
                debug!(input = text, error = %err, "rejected integer literal");
                return Err(err);
            }
        };
        let negative = caps.get(1).map_or(false, |m| m.as_str() == "-");
        let digits = caps.get(2).map_or("", |m| m.as_str());

        let chunks = decimal_chunks(digits);
        let num_chunks = chunks.len();
        let limbs = convert_radix(chunks, DECIMAL_CHUNK_RADIX, LIMB_RADIX);
        trace!(chunks = num_chunks, limbs = limbs.len(), "converted decimal literal");

        Ok(BigInt::from_limbs(negative, limbs))
    }
}

impl FromStr for BigInt {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = FormatError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInt::parse(val)
    }
}

impl TryFrom<String> for BigInt {
    type Error = FormatError;

    fn try_from(val: String) -> Result<Self, Self::Error> {
        BigInt::parse(&val)
    }
}

/// Splits an ASCII digit string into base `10^9` digits, least significant
/// first. The last (most significant) chunk may be shorter than nine digits.
fn decimal_chunks(digits: &str) -> Vec<u32> {
    digits
        .as_bytes()
        .rchunks(DECIMAL_CHUNK_DIGITS)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32)
        })
        .collect()
}

/// Rewrites a little-endian number from radix `from` into radix `to`.
///
/// Every input digit must be below `from`, and both radices must be at most
/// `2^32` so that `digit * from + digit` always fits in a `u64`.
///
/// Pass `k` divides the digits above position `k` (still in radix `from`) by
/// `to`, working from the top down: the quotient digit of each two-digit
/// window lands one position up and the remainder is carried into the lower
/// slot. After the pass, position `k` holds the next radix `to` digit.
fn convert_radix(mut digits: Vec<u32>, from: u64, to: u64) -> Vec<u32> {
    let mut k = 0;
    while k < digits.len() {
        // The leading window must start below `to` or its quotient overflows.
        if digits.last().map_or(false, |&top| top as u64 >= to) {
            digits.push(0);
        }
        for i in (k + 1..digits.len()).rev() {
            let acc = digits[i] as u64 * from + digits[i - 1] as u64;
            digits[i] = (acc / to) as u32;
            digits[i - 1] = (acc % to) as u32;
        }
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        k += 1;
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

// 实现打印
impl BigInt {
    /// Decimal digits of the magnitude, without sign.
    fn magnitude_to_decimal(&self) -> String {
        let chunks = convert_radix(self.limbs.clone(), LIMB_RADIX, DECIMAL_CHUNK_RADIX);
        let mut result = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            result.push_str(&top.to_string());
        }
        for chunk in iter {
            result.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        result
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.sign, "", &self.magnitude_to_decimal())
    }
}
