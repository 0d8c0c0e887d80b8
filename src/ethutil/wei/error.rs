//! Amount related errors.

use {bigdecimal::ParseBigDecimalError, thiserror::Error};

/// Amount related errors.
#[derive(Error, Debug)]
pub enum AmountError {
    /// Floating point input was NaN or infinite.
    #[error("invalid amount, not a finite number")]
    NotANumber,

    /// The scaled amount is below zero.  Wei magnitudes are unsigned.
    #[error("negative amount cannot be represented in wei")]
    Negative,

    /// Error parsing a decimal number.
    #[error("error parsing decimal amount: {0}")]
    ParseDecimal(#[from] ParseBigDecimalError),

    /// Malformed hexadecimal amount string.
    #[error("invalid hex amount: {0}")]
    HexDecode(String),

    /// Denomination name lookup failed.
    #[error("unknown denomination name: {0}")]
    UnknownUnit(String),
}
