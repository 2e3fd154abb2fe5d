//! Sign-magnitude arithmetic: negation, addition, subtraction and schoolbook
//! multiplication. Every result is trimmed before it is returned.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::BigInt;
use crate::big_int::compare_mag;
use crate::big_num_constants::LIMB_BITS;

/// `x + y` on magnitudes.
fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry: u64 = 0;
    for (i, &a) in long.iter().enumerate() {
        let sum = a as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        result.push(sum as u32);
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        result.push(carry as u32);
    }
    result
}

/// `big - little` on magnitudes. Requires `big >= little`.
fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
    debug_assert!(compare_mag(big, little) != Ordering::Less);
    let mut result = Vec::with_capacity(big.len());
    let mut borrow: i64 = 0;
    for (i, &a) in big.iter().enumerate() {
        let difference = a as i64 - little.get(i).copied().unwrap_or(0) as i64 + borrow;
        result.push(difference as u32);
        borrow = difference >> LIMB_BITS;
    }
    debug_assert_eq!(borrow, 0);
    result
}

/// Schoolbook `x * y` on magnitudes.
fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
    let mut result = vec![0u32; x.len() + y.len()];
    for (i, &b) in y.iter().enumerate() {
        if b == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &a) in x.iter().enumerate() {
            // (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1, never overflows
            let product = a as u64 * b as u64 + result[i + j] as u64 + carry;
            result[i + j] = product as u32;
            carry = product >> LIMB_BITS;
        }
        result[i + x.len()] = carry as u32;
    }
    result
}

/// Signed sum of `(x_neg, x)` and `(y_neg, y)`.
fn add_signed(x_neg: bool, x: &[u32], y_neg: bool, y: &[u32]) -> BigInt {
    if x_neg == y_neg {
        return BigInt::from_limbs(x_neg, add_mag(x, y));
    }
    match compare_mag(x, y) {
        Ordering::Less => BigInt::from_limbs(y_neg, sub_mag(y, x)),
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_limbs(x_neg, sub_mag(x, y)),
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.sign = !self.sign;
        self.trim();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        add_signed(self.sign, &self.limbs, rhs.sign, &rhs.limbs)
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    /// `a - b` is `a + (-b)`; the negation is folded into the sign flag.
    fn sub(self, rhs: &BigInt) -> Self::Output {
        let rhs_neg = !rhs.sign && !rhs.is_zero();
        add_signed(self.sign, &self.limbs, rhs_neg, &rhs.limbs)
    }
}

// 实现乘法
impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_limbs(self.sign != rhs.sign, mul_mag(&self.limbs, &rhs.limbs))
    }
}

/// Forwards the owned and mixed operand forms, and the compound assignment
/// forms, to the `&BigInt op &BigInt` implementation.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_neg() {
        assert_eq!(-BigInt::from(5), BigInt::from(-5));
        assert_eq!(-&BigInt::from(-5), BigInt::from(5));
        let z = -BigInt::zero();
        assert!(!z.is_negative());
        assert_eq!(z, BigInt::zero());
    }

    #[test]
    fn test_add() {
        assert_eq!(BigInt::from(2) + BigInt::from(3), BigInt::from(5));
        assert_eq!(BigInt::from(-2) + BigInt::from(3), BigInt::from(1));
        assert_eq!(BigInt::from(2) + BigInt::from(-3), BigInt::from(-1));
        assert_eq!(BigInt::from(-2) + BigInt::from(-3), BigInt::from(-5));
        assert_eq!(BigInt::from(7) + BigInt::from(-7), BigInt::zero());

        // carry into a new limb
        let a = BigInt::from(u32::MAX);
        assert_eq!(&a + &BigInt::one(), BigInt::from(1u64 << 32));
        let a = BigInt::from(u128::MAX);
        assert_eq!((&a + &BigInt::one()).limbs(), &[0, 0, 0, 0, 1]);

        let a = big("999999999999999999999999999999");
        let b = big("1");
        assert_eq!(a + b, big("1000000000000000000000000000000"));
    }

    #[test]
    fn test_sub() {
        assert_eq!(BigInt::from(5) - BigInt::from(8), BigInt::from(-3));
        assert_eq!(BigInt::from(-5) - BigInt::from(-8), BigInt::from(3));
        assert_eq!(BigInt::from(-5) - BigInt::from(8), BigInt::from(-13));
        assert_eq!(BigInt::zero() - BigInt::from(8), BigInt::from(-8));
        assert_eq!(BigInt::from(8) - BigInt::zero(), BigInt::from(8));
        let d = BigInt::from(8) - BigInt::from(8);
        assert!(d.is_zero() && !d.is_negative());

        // borrow across several limbs, result loses its top limbs
        let a = BigInt::from(1u128 << 96);
        let b = BigInt::from((1u128 << 96) - 1);
        assert_eq!((&a - &b).limbs(), &[1]);
        assert_eq!(&b - &a, BigInt::from(-1));
    }

    #[test]
    fn test_assign() {
        let mut a = BigInt::from(10);
        a += BigInt::from(5);
        a -= &BigInt::from(20);
        assert_eq!(a, BigInt::from(-5));
        a *= BigInt::from(-3);
        assert_eq!(a, BigInt::from(15));
        a *= &BigInt::zero();
        assert_eq!(a, BigInt::zero());
    }

    #[test]
    fn test_mul() {
        assert_eq!(BigInt::from(-3) * BigInt::from(4), BigInt::from(-12));
        assert_eq!(BigInt::from(-3) * BigInt::from(-4), BigInt::from(12));
        let z = BigInt::from(-3) * BigInt::zero();
        assert!(!z.is_negative());

        let a = BigInt::from(u64::MAX);
        assert_eq!(&a * &a, BigInt::from(u64::MAX as u128 * u64::MAX as u128));

        let a = big("123456789012345678901234567890");
        let b = big("-987654321098765432109876543210");
        assert_eq!(
            a * b,
            big("-121932631137021795226185032733622923332237463801111263526900")
        );
    }

    #[test]
    fn test_sum_product() {
        let values: Vec<BigInt> = (1..=25i32).map(BigInt::from).collect();
        assert_eq!(values.iter().sum::<BigInt>(), BigInt::from(325));
        // 25!
        assert_eq!(
            values.into_iter().product::<BigInt>(),
            big("15511210043330985984000000")
        );
        assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), BigInt::one());
    }
}
