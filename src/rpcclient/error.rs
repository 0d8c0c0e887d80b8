//! Contains all RPC client errors.
use thiserror::Error;

/// RPC client errors.
#[derive(Error, Debug)]
pub enum RpcClientError {
    /// On json marshalling error.
    #[error("marshaller error: {0}")]
    Marshaller(serde_json::Error),

    /// Invalid tls certificate for the HTTP client.
    #[error("http tls certificate error: {0}")]
    HttpTlsCertificate(reqwest::Error),

    /// Failed to set a default request header.
    #[error("http header error: {0}")]
    HttpHeader(reqwest::header::InvalidHeaderValue),

    /// Error building the HTTP client.
    #[error("http handshake error: {0}")]
    HttpHandshake(reqwest::Error),

    /// Invalid proxy connection.
    #[error("invalid proxy connection")]
    ProxyConnection,

    /// Transport task is no longer serving commands.
    #[error("rpc client disconnected")]
    RpcDisconnected,
}
