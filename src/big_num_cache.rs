use lazy_static::*;
use regex::Regex;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_limbs(false, vec![0]),
        BigInt::from_limbs(false, vec![1]),
        BigInt::from_limbs(false, vec![2]),
        BigInt::from_limbs(false, vec![3]),
        BigInt::from_limbs(false, vec![4]),
        BigInt::from_limbs(false, vec![5]),
        BigInt::from_limbs(false, vec![6]),
        BigInt::from_limbs(false, vec![7]),
        BigInt::from_limbs(false, vec![8]),
        BigInt::from_limbs(false, vec![9]),
        BigInt::from_limbs(false, vec![10]),
        BigInt::from_limbs(false, vec![11]),
        BigInt::from_limbs(false, vec![12]),
        BigInt::from_limbs(false, vec![13]),
        BigInt::from_limbs(false, vec![14]),
        BigInt::from_limbs(false, vec![15]),
        BigInt::from_limbs(false, vec![16]),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_limbs(true, vec![0]),
        BigInt::from_limbs(true, vec![1]),
        BigInt::from_limbs(true, vec![2]),
        BigInt::from_limbs(true, vec![3]),
        BigInt::from_limbs(true, vec![4]),
        BigInt::from_limbs(true, vec![5]),
        BigInt::from_limbs(true, vec![6]),
        BigInt::from_limbs(true, vec![7]),
        BigInt::from_limbs(true, vec![8]),
        BigInt::from_limbs(true, vec![9]),
        BigInt::from_limbs(true, vec![10]),
        BigInt::from_limbs(true, vec![11]),
        BigInt::from_limbs(true, vec![12]),
        BigInt::from_limbs(true, vec![13]),
        BigInt::from_limbs(true, vec![14]),
        BigInt::from_limbs(true, vec![15]),
        BigInt::from_limbs(true, vec![16]),
    ];
    /// Optional whitespace, optional sign, optional whitespace, digits, optional whitespace.
    pub static ref DECIMAL_LITERAL: Regex =
        Regex::new(r"^\s*([+-])?\s*([0-9]+)\s*$").expect("decimal literal pattern is valid");
}
