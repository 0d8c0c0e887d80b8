//! Hexadecimal quantity codec.
//!
//! JSON-RPC encodes unsigned integers as `0x`-prefixed hex with no
//! leading zeros, so zero encodes as `0x0`.

use super::EthTypesError;

/// Encodes an unsigned integer as a minimal hex quantity.
pub fn encode(value: u64) -> String {
    format!("0x{:x}", value)
}

/// Decodes a hex quantity string.  The `0x` prefix is required.
pub fn decode(value: &str) -> Result<u64, EthTypesError> {
    let digits = match value.strip_prefix("0x") {
        Some(digits) => digits,

        None => return Err(EthTypesError::InvalidQuantity(value.to_string())),
    };

    if digits.is_empty() {
        return Err(EthTypesError::InvalidQuantity(value.to_string()));
    }

    match u64::from_str_radix(digits, 16) {
        Ok(v) => Ok(v),

        Err(_) => Err(EthTypesError::InvalidQuantity(value.to_string())),
    }
}
