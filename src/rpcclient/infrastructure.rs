//! Command plumbing between the client and its transport.

use {crate::ethjson::JsonResponse, tokio::sync::mpsc};

/// Contains RPC Json ID, channel used to send RPC result and message to be
/// sent to server.
pub struct Command {
    /// ID to track server to client commands.
    pub id: u64,
    /// Channel to send received message from server.
    pub user_channel: mpsc::Sender<JsonResponse>,
    /// Message to be sent to the server.
    pub rpc_message: Vec<u8>,
}
