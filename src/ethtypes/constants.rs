//! Wire type constants.

/// Size of array used to store an account address.
pub const ADDRESS_SIZE: usize = 20;

/// Size of array used to store block and transaction hashes.
pub const HASH_SIZE: usize = 32;

/// Maximum length of an address string, excluding the `0x` prefix.
pub const MAX_ADDRESS_STRING_SIZE: usize = ADDRESS_SIZE * 2;

/// Maximum length of a hash string, excluding the `0x` prefix.
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;
