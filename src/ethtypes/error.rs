//! Contains all wire type errors.

use thiserror::Error;

/// Wire type errors.
#[derive(Error, Debug)]
pub enum EthTypesError {
    /// Hex string length does not match the fixed byte size of the type.
    #[error("invalid hex string length, expected {expected} digits, got {actual}")]
    InvalidLength {
        /// Number of hex digits the type requires.
        expected: usize,
        /// Number of hex digits supplied.
        actual: usize,
    },

    /// Invalid hex decoding.
    #[error("error decoding hex: {0}")]
    HexDecode(hex::FromHexError),

    /// Malformed hexadecimal quantity.
    #[error("invalid hex quantity: {0}")]
    InvalidQuantity(String),
}
