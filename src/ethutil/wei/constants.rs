//! Amount constants.

/// Number of wei in one gwei.
pub const WEI_PER_GWEI: u64 = 1_000_000_000;
/// Number of wei in one ether.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;
/// Power-of-ten exponent of the largest named denomination.
pub const MAX_UNIT_SCALE: i64 = 24;
