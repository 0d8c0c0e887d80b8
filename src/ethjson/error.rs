//! JSON errors.
//! Contains all possible JSON errors for an RPC result.

use thiserror::Error;

/// RPC result errors.
#[derive(Error, Debug)]
pub enum RpcServerError {
    /// Error marshalling server response.
    #[error("marshaller error: {0}")]
    Marshaller(serde_json::Error),

    /// Empty response returned by server.
    #[error("empty response from server")]
    EmptyResponse,

    /// Response shape is not what the command expects.
    #[error("invalid response from server: {0}")]
    InvalidResponse(String),

    /// Error returned to client by server.
    #[error("server returned an error: {0:?}")]
    ServerError(super::RpcError),
}
