//! RPC client implementation.

use {
    super::{connection::RpcTransport, constants, error::RpcClientError, infrastructure::Command},
    crate::ethjson::{JsonRequest, JsonResponse},
    log::{info, trace, warn},
    std::sync::atomic::{AtomicU64, Ordering},
    tokio::sync::mpsc,
};

/// Creates a new RPC client based on the provided transport configuration
/// details.  A background task serving the transport is spawned on the
/// current runtime and runs until the client is dropped or shut down.
pub fn new<C: 'static + RpcTransport>(config: C) -> Result<Client<C>, RpcClientError> {
    let (command_sender, command_receiver) = mpsc::channel(constants::SEND_BUFFER_SIZE);

    info!("Dialing JSON-RPC server {}", config.url());

    let transport = config.clone();

    tokio::spawn(async move {
        if let Err(e) = transport.handle_commands(command_receiver).await {
            warn!("RPC transport stopped, error: {}", e);
        }
    });

    Ok(Client {
        configuration: config,
        command_sender,
        next_id: AtomicU64::new(0),
    })
}

/// Represents an Ethereum JSON-RPC client which allows easy access to the
/// various RPC methods available on the server.  Each of the wrapper
/// functions handles the details of converting the passed and return types
/// to and from the underlying JSON types which are required for the
/// JSON-RPC invocations.
///
/// Each wrapper returns a future type which promises to deliver the
/// decoded result of the invocation at some later time.  Awaiting the
/// returned future blocks until the result is available.
pub struct Client<C: RpcTransport> {
    /// Holds the transport configuration associated with the client.
    configuration: C,

    /// Feeds serialized commands to the transport task.
    command_sender: mpsc::Sender<Command>,

    /// Last JSON-RPC request id handed out.
    next_id: AtomicU64,
}

impl<C: RpcTransport> Client<C> {
    /// Returns the next unused request id.
    pub(crate) fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True when the transport task is no longer serving commands.
    pub fn is_disconnected(&self) -> bool {
        self.command_sender.is_closed()
    }

    /// Endpoint the client delivers requests to.
    pub fn url(&self) -> String {
        self.configuration.url()
    }

    /// Marshals a command and queues it on the transport, returning the id
    /// assigned to the request and the channel its response arrives on.
    pub(crate) async fn send_custom_command(
        &self,
        method: &str,
        params: &[serde_json::Value],
    ) -> Result<(u64, mpsc::Receiver<JsonResponse>), RpcClientError> {
        let id = self.next_id();

        let request = JsonRequest {
            jsonrpc: "2.0",
            method,
            id,
            params,
        };

        let rpc_message = match serde_json::to_vec(&request) {
            Ok(msg) => msg,

            Err(e) => return Err(RpcClientError::Marshaller(e)),
        };

        trace!("Sending {} command with id {}", method, id);

        let (response_sender, response_receiver) = mpsc::channel(constants::RESPONSE_BUFFER_SIZE);

        let command = Command {
            id,
            rpc_message,
            user_channel: response_sender,
        };

        if self.command_sender.send(command).await.is_err() {
            return Err(RpcClientError::RpcDisconnected);
        }

        Ok((id, response_receiver))
    }

    /// Shuts the client down.  The command channel is closed which stops
    /// the transport task; commands still waiting on a response resolve
    /// with an empty response error.
    pub fn shutdown(self) {
        info!("Shutting down RPC client");
    }
}
