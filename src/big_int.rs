//! # BigInt
//! Arbitrary-precision signed integers stored as a sign flag plus a magnitude
//! of 32-bit limbs, least significant limb first.
//! Shifts behave as if BigInt were represented in infinite two's-complement notation.
//! # Example
//! ```
//! use limbint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a << 10i32).to_string(), "10240000000000000");
//! assert_eq!((&a >> 10i32).to_string(), "9765625000");
//! ```

use std::cmp::Ordering;

use crate::big_num_constants::LIMB_BITS;

/// An integer of unbounded magnitude.
///
/// The limb vector is never empty and never carries a redundant zero limb at
/// the top; zero is always `sign = false, limbs = [0]`. Every constructor and
/// every operator re-establishes this before handing the value back, so
/// equality is plain structural equality of sign and limbs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: bool,
    pub(crate) limbs: Vec<u32>,
}

// 实现构造
impl BigInt {
    /// Builds a value from a sign and raw little-endian limbs.
    ///
    /// The limbs need not be trimmed; an empty vector is read as zero and a
    /// zero magnitude drops the sign.
    pub fn from_limbs(negative: bool, limbs: Vec<u32>) -> Self {
        let mut val = BigInt { sign: negative, limbs };
        val.trim();
        val
    }

    pub fn zero() -> Self {
        BigInt { sign: false, limbs: vec![0] }
    }

    pub fn one() -> Self {
        BigInt { sign: false, limbs: vec![1] }
    }

    /// Drops redundant most significant limbs and normalises the sign of zero.
    ///
    /// Idempotent. Must run after every mutation of `limbs`.
    pub(crate) fn trim(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.limbs[0] == 0 && self.limbs.len() == 1 {
            self.sign = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 杂项辅助函数
impl BigInt {
    /// The magnitude, least significant limb first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn is_negative(&self) -> bool {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { sign: false, limbs: self.limbs.clone() }
    }

    /// Number of bits in the minimal two's-complement representation of this
    /// value, excluding the sign bit.
    ///
    /// For non-negative values this is the bit length of the magnitude. For
    /// negative values it is the bit length of `|x| - 1`, so `-1` has length
    /// zero and `-256` fits in eight bits.
    pub fn bit_length(&self) -> u64 {
        let len = self.limbs.len();
        let top = self.limbs[len - 1];
        let mag_bit_len = (len as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64;
        if self.sign && self.is_power_of_two() {
            mag_bit_len - 1
        } else {
            mag_bit_len
        }
    }

    fn is_power_of_two(&self) -> bool {
        let (top, rest) = match self.limbs.split_last() {
            Some(split) => split,
            None => return false,
        };
        top.count_ones() == 1 && rest.iter().all(|&l| l == 0)
    }

    /// Narrows back to a machine integer, `None` if the value does not fit.
    pub fn to_i128(&self) -> Option<i128> {
        if self.limbs.len() > 4 {
            return None;
        }
        let mag = self
            .limbs
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | limb as u128);
        if self.sign {
            if mag <= i128::MIN.unsigned_abs() {
                Some((mag as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(mag).ok()
        }
    }
}

// 实现大小比较
/// Compares two trimmed magnitudes.
pub(crate) fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
    match x.len().cmp(&y.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for (a, b) in x.iter().rev().zip(y.iter().rev()) {
        if a != b {
            return a.cmp(b);
        }
    }
    Ordering::Equal
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_mag(&self.limbs, &other.limbs),
            (true, true) => compare_mag(&self.limbs, &other.limbs).reverse(),
        }
    }
}
