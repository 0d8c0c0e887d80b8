#![cfg(feature = "ethutil")]
//! Package ethutil provides Ethereum-specific convenience types.
//!
//! Currently this is the wei amount type along with conversion between
//! the base unit and the named denominations.

pub mod wei;

pub use wei::{AmountError, Unit, Wei};
