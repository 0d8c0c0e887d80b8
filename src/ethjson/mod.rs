//! Ethereum JSON-RPC types.
//! Contains the request/response envelope, the named method constants and
//! the typed results returned by the server.

pub(crate) mod commands;
mod cmd_types;
mod error;
mod result_types;
mod types_test;

pub use cmd_types::BlockTag;
pub use error::RpcServerError;
pub use result_types::{BlockResult, JsonResponse, RpcError, SyncProgress, SyncStatus};

pub(crate) use result_types::JsonRequest;
