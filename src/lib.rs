//! rusteth is a client library for Ethereum JSON-RPC nodes.
//!
//! The `ethutil` module houses the wei amount type with exact conversion
//! between the base unit and the named denominations.  The `rpcclient`
//! module implements an asynchronous client which issues named JSON-RPC
//! calls over a pluggable transport and decodes results into typed values.

pub mod ethjson;
pub mod ethtypes;
pub mod ethutil;
pub mod rpcclient;
