//! Bit shifts with infinite two's-complement semantics.
//!
//! `x << k` is `x * 2^k` and `x >> k` is `floor(x / 2^k)`, so negative values
//! round toward negative infinity and settle at `-1`. A negative amount shifts
//! the other way. Amounts may be any primitive integer or a [`BigInt`].

use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use tracing::trace;

use crate::BigInt;
use crate::big_num_constants::LIMB_BITS;

/// Splits a shift amount into its direction and a magnitude in bits.
///
/// Magnitudes past `u64::MAX` saturate. No value has that many bits, so a
/// right shift by a saturated amount still collapses correctly; a left shift
/// by one cannot be held in memory either way.
trait ShiftAmount {
    /// `(reversed, bits)`.
    fn split(self) -> (bool, u64);
}

macro_rules! impl_unsigned_shift_amount {
    ($($u: ty),*) => {
    $(
    impl ShiftAmount for $u {
        fn split(self) -> (bool, u64) {
            (false, u64::try_from(self).unwrap_or(u64::MAX))
        }
    }
    )*
    };
}

macro_rules! impl_signed_shift_amount {
    ($($i: ty),*) => {
    $(
    impl ShiftAmount for $i {
        fn split(self) -> (bool, u64) {
            (self < 0, u64::try_from(self.unsigned_abs()).unwrap_or(u64::MAX))
        }
    }
    )*
    };
}
impl_unsigned_shift_amount!(u8, u16, u32, u64, u128, usize);
impl_signed_shift_amount!(i8, i16, i32, i64, i128, isize);

impl ShiftAmount for &BigInt {
    fn split(self) -> (bool, u64) {
        let bits = match self.limbs.as_slice() {
            [low] => *low as u64,
            [low, high] => ((*high as u64) << LIMB_BITS) | *low as u64,
            _ => u64::MAX,
        };
        (self.sign, bits)
    }
}

impl ShiftAmount for BigInt {
    fn split(self) -> (bool, u64) {
        (&self).split()
    }
}

// 实现移位
impl BigInt {
    fn shift(&self, left: bool, n: u64) -> BigInt {
        if left {
            self.shift_left(n)
        } else {
            self.shift_right(n)
        }
    }

    /// `self * 2^n`.
    fn shift_left(&self, n: u64) -> BigInt {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let n_limbs = usize::try_from(n / LIMB_BITS as u64).unwrap_or(usize::MAX);
        let n_bits = (n % LIMB_BITS as u64) as u32;

        let mut mag = Vec::with_capacity(n_limbs.saturating_add(self.limbs.len() + 1));
        mag.resize(n_limbs, 0);
        if n_bits == 0 {
            mag.extend_from_slice(&self.limbs);
        } else {
            let mut carry = 0u32;
            for &limb in &self.limbs {
                mag.push((limb << n_bits) | carry);
                carry = limb >> (LIMB_BITS - n_bits);
            }
            mag.push(carry);
        }
        BigInt::from_limbs(self.sign, mag)
    }

    /// `floor(self / 2^n)`.
    fn shift_right(&self, n: u64) -> BigInt {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let n_limbs = n / LIMB_BITS as u64;
        if n_limbs >= self.limbs.len() as u64 {
            trace!(shift = n, negative = self.sign, "right shift collapsed value");
            return if self.sign { BigInt::from(-1) } else { BigInt::zero() };
        }
        let n_limbs = n_limbs as usize;
        let n_bits = (n % LIMB_BITS as u64) as u32;

        let (dropped, kept) = self.limbs.split_at(n_limbs);
        let mut one_lost = dropped.iter().any(|&limb| limb != 0);
        let mut mag: Vec<u32> = if n_bits == 0 {
            kept.to_vec()
        } else {
            one_lost |= (kept[0] & ((1u32 << n_bits) - 1)) != 0;
            kept.iter()
                .enumerate()
                .map(|(i, &limb)| {
                    let high = kept.get(i + 1).map_or(0, |&next| next << (LIMB_BITS - n_bits));
                    (limb >> n_bits) | high
                })
                .collect()
        };

        // A negative magnitude that lost set bits rounds away from zero.
        if self.sign && one_lost {
            increment(&mut mag);
        }
        BigInt::from_limbs(self.sign, mag)
    }
}

fn increment(mag: &mut Vec<u32>) {
    for limb in mag.iter_mut() {
        let (val, overflow) = limb.overflowing_add(1);
        *limb = val;
        if !overflow {
            return;
        }
    }
    mag.push(1);
}

macro_rules! impl_shift {
    ($($t: ty),*) => {
    $(
    impl Shl<$t> for &BigInt {
        type Output = BigInt;

        fn shl(self, n: $t) -> Self::Output {
            let (reversed, bits) = n.split();
            self.shift(!reversed, bits)
        }
    }

    impl Shl<$t> for BigInt {
        type Output = BigInt;

        fn shl(self, n: $t) -> Self::Output {
            &self << n
        }
    }

    impl ShlAssign<$t> for BigInt {
        fn shl_assign(&mut self, n: $t) {
            *self = &*self << n;
        }
    }

    impl Shr<$t> for &BigInt {
        type Output = BigInt;

        fn shr(self, n: $t) -> Self::Output {
            let (reversed, bits) = n.split();
            self.shift(reversed, bits)
        }
    }

    impl Shr<$t> for BigInt {
        type Output = BigInt;

        fn shr(self, n: $t) -> Self::Output {
            &self >> n
        }
    }

    impl ShrAssign<$t> for BigInt {
        fn shr_assign(&mut self, n: $t) {
            *self = &*self >> n;
        }
    }
    )*
    };
}
impl_shift!(u8, u16, u32, u64, u128, usize);
impl_shift!(i8, i16, i32, i64, i128, isize);
impl_shift!(BigInt, &BigInt);

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_shl() {
        assert_eq!(BigInt::from(1) << 0u32, BigInt::one());
        assert_eq!(BigInt::from(1) << 32u32, BigInt::from(1u64 << 32));
        assert_eq!(BigInt::from(3) << 63u32, BigInt::from(3u128 << 63));
        assert_eq!(BigInt::from(-2) << 31, BigInt::from(-4294967296i64));
        assert_eq!(BigInt::from(u32::MAX) << 4, BigInt::from((u32::MAX as u64) << 4));
        assert_eq!(BigInt::zero() << 1_000_000_000u64, BigInt::zero());

        let a = big("123456789123456789123456789");
        assert_eq!(&a << 100, &a * &(BigInt::one() << 100));
        assert_eq!((&a << 100i32).bit_length(), a.bit_length() + 100);
    }

    #[test]
    fn test_shr() {
        assert_eq!(BigInt::from(1024) >> 3, BigInt::from(128));
        assert_eq!(BigInt::from(1023) >> 3, BigInt::from(127));
        assert_eq!(BigInt::from(u64::MAX) >> 32, BigInt::from(u32::MAX));
        assert_eq!(BigInt::from(5) >> 64, BigInt::zero());
        assert_eq!(BigInt::from(5) >> 3, BigInt::zero());

        // rounds toward negative infinity
        assert_eq!(BigInt::from(-2) >> 1, BigInt::from(-1));
        assert_eq!(BigInt::from(-2) >> 31, BigInt::from(-1));
        assert_eq!(BigInt::from(-2) >> 999_999_999, BigInt::from(-1));
        assert_eq!(BigInt::from(-7) >> 1, BigInt::from(-4));
        assert_eq!(BigInt::from(-8) >> 2, BigInt::from(-2));
        assert_eq!(BigInt::from(-9) >> 2, BigInt::from(-3));

        // exactly on a limb boundary
        let a = BigInt::from(-(1i128 << 64));
        assert_eq!(&a >> 64, BigInt::from(-1));
        assert_eq!(&a >> 32, BigInt::from(-(1i64 << 32)));
        let a = BigInt::from(-(1i128 << 64) - 1);
        assert_eq!(&a >> 64, BigInt::from(-2));
        assert_eq!(&a >> 32, BigInt::from(-(1i64 << 32) - 1));

        // rounding carries through every limb
        let a = BigInt::from(-((u64::MAX as i128) << 1) - 1);
        assert_eq!(&a >> 1, BigInt::from(-(1i128 << 64)));
        let a = BigInt::from(-((u64::MAX as i128) << 32) - 1);
        assert_eq!((&a >> 32i32).limbs(), &[0, 0, 1]);
        assert!((&a >> 32i32).is_negative());
    }

    #[test]
    fn test_negative_amount_reverses() {
        let x = big("-98765432109876543210");
        for k in [0i64, 1, 31, 32, 33, 95, 200] {
            assert_eq!(&x << -k, &x >> k);
            assert_eq!(&x >> -k, &x << k);
        }
        assert_eq!(BigInt::from(-2) << -1_000i32, BigInt::from(-1));
    }

    #[test]
    fn test_big_int_amount() {
        let x = BigInt::from(-12345);
        assert_eq!(&x << &BigInt::from(40), &x << 40);
        assert_eq!(&x >> BigInt::from(-40), &x << 40);
        assert_eq!(&x >> &BigInt::from(1u64 << 40), BigInt::from(-1));

        let huge = big("100000000000000000000000000000");
        assert_eq!(&x >> &huge, BigInt::from(-1));
        assert_eq!(BigInt::from(12345) >> &huge, BigInt::zero());
        assert_eq!(BigInt::from(12345) << -&huge, BigInt::zero());
    }

    #[test]
    fn test_shift_assign() {
        let mut a = BigInt::from(-5);
        a <<= 70u8;
        assert_eq!(a, BigInt::from(-5i128 << 70));
        a >>= 69i64;
        assert_eq!(a, BigInt::from(-10));
        a >>= BigInt::from(4);
        assert_eq!(a, BigInt::from(-1));
        a <<= &BigInt::from(3);
        assert_eq!(a, BigInt::from(-8));
    }
}
