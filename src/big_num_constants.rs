/// Width of one limb in bits.
pub const LIMB_BITS: u32 = u32::BITS;

/// `2^LIMB_BITS`, the radix of the limb representation.
pub const LIMB_RADIX: u64 = 1 << LIMB_BITS;

/// Decimal digits packed into one chunk during text conversion.
pub const DECIMAL_CHUNK_DIGITS: usize = 9;

/// `10^DECIMAL_CHUNK_DIGITS`, the largest power of ten below `LIMB_RADIX`.
pub const DECIMAL_CHUNK_RADIX: u64 = 1_000_000_000;

/// Largest magnitude kept in the small constant cache.
pub const MAX_CONSTANT: usize = 16;
