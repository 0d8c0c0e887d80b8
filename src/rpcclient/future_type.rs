//! Future types.
//! Contains all asynchronous command structures.

use {
    crate::ethjson::{BlockResult, JsonResponse, RpcError, RpcServerError, SyncStatus},
    crate::ethtypes::{quantity, Hash},
    crate::ethutil::wei::Wei,
    core::future::Future,
    core::pin::Pin,
    core::task::{Context, Poll},
    log::{trace, warn},
    tokio::sync::mpsc,
};

macro_rules! build_future {
    ($struct_name:ident, $output:ty) => {
        pub struct $struct_name {
            pub(crate) message: mpsc::Receiver<JsonResponse>,
        }

        impl $struct_name {
            pub(crate) fn new(message: mpsc::Receiver<JsonResponse>) -> Self {
                Self { message }
            }
        }

        impl Future for $struct_name {
            type Output = $output;

            fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
                match self.message.poll_recv(cx) {
                    Poll::Ready(message) => match message {
                        Some(msg) => {
                            let val = self.on_message(msg);
                            Poll::Ready(val)
                        }

                        None => {
                            warn!("Server sent an empty response");
                            Poll::Ready(Err(RpcServerError::EmptyResponse))
                        }
                    },

                    Poll::Pending => Poll::Pending,
                }
            }
        }
    };
}

build_future![ClientVersionFuture, Result<String, RpcServerError>];

impl ClientVersionFuture {
    fn on_message(&self, message: JsonResponse) -> Result<String, RpcServerError> {
        trace!("Server sent a Client Version result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        match serde_json::from_value(message.result) {
            Ok(val) => Ok(val),

            Err(e) => {
                warn!("Error marshalling Client Version result.");
                Err(RpcServerError::Marshaller(e))
            }
        }
    }
}

build_future![NetVersionFuture, Result<String, RpcServerError>];

impl NetVersionFuture {
    fn on_message(&self, message: JsonResponse) -> Result<String, RpcServerError> {
        trace!("Server sent a Net Version result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        match serde_json::from_value(message.result) {
            Ok(val) => Ok(val),

            Err(e) => {
                warn!("Error marshalling Net Version result.");
                Err(RpcServerError::Marshaller(e))
            }
        }
    }
}

build_future![ChainIdFuture, Result<u64, RpcServerError>];

impl ChainIdFuture {
    fn on_message(&self, message: JsonResponse) -> Result<u64, RpcServerError> {
        trace!("Server sent a Chain Id result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        let encoded: String = match serde_json::from_value(message.result) {
            Ok(val) => val,

            Err(e) => {
                warn!("Error marshalling Chain Id result.");
                return Err(RpcServerError::Marshaller(e));
            }
        };

        match quantity::decode(&encoded) {
            Ok(id) => Ok(id),

            Err(e) => {
                warn!("Invalid chain id quantity from server, error: {}.", e);
                Err(RpcServerError::InvalidResponse(format!("{}", e)))
            }
        }
    }
}

build_future![BlockNumberFuture, Result<u64, RpcServerError>];

impl BlockNumberFuture {
    fn on_message(&self, message: JsonResponse) -> Result<u64, RpcServerError> {
        trace!("Server sent a Block Number result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        let encoded: String = match serde_json::from_value(message.result) {
            Ok(val) => val,

            Err(e) => {
                warn!("Error marshalling Block Number result.");
                return Err(RpcServerError::Marshaller(e));
            }
        };

        match quantity::decode(&encoded) {
            Ok(number) => Ok(number),

            Err(e) => {
                warn!("Invalid block number quantity from server, error: {}.", e);
                Err(RpcServerError::InvalidResponse(format!("{}", e)))
            }
        }
    }
}

build_future![TransactionCountFuture, Result<u64, RpcServerError>];

impl TransactionCountFuture {
    fn on_message(&self, message: JsonResponse) -> Result<u64, RpcServerError> {
        trace!("Server sent a Transaction Count result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        let encoded: String = match serde_json::from_value(message.result) {
            Ok(val) => val,

            Err(e) => {
                warn!("Error marshalling Transaction Count result.");
                return Err(RpcServerError::Marshaller(e));
            }
        };

        match quantity::decode(&encoded) {
            Ok(count) => Ok(count),

            Err(e) => {
                warn!("Invalid transaction count quantity from server, error: {}.", e);
                Err(RpcServerError::InvalidResponse(format!("{}", e)))
            }
        }
    }
}

build_future![GetBalanceFuture, Result<Wei, RpcServerError>];

impl GetBalanceFuture {
    fn on_message(&self, message: JsonResponse) -> Result<Wei, RpcServerError> {
        trace!("Server sent a Get Balance result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        match serde_json::from_value(message.result) {
            Ok(balance) => Ok(balance),

            Err(e) => {
                warn!("Error marshalling Get Balance result.");
                Err(RpcServerError::Marshaller(e))
            }
        }
    }
}

build_future![GasPriceFuture, Result<Wei, RpcServerError>];

impl GasPriceFuture {
    fn on_message(&self, message: JsonResponse) -> Result<Wei, RpcServerError> {
        trace!("Server sent a Gas Price result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        match serde_json::from_value(message.result) {
            Ok(price) => Ok(price),

            Err(e) => {
                warn!("Error marshalling Gas Price result.");
                Err(RpcServerError::Marshaller(e))
            }
        }
    }
}

build_future![GetBlockFuture, Result<Option<BlockResult>, RpcServerError>];

impl GetBlockFuture {
    fn on_message(&self, message: JsonResponse) -> Result<Option<BlockResult>, RpcServerError> {
        trace!("Server sent a Get Block result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        // The server answers null for an unknown block.
        if message.result.is_null() {
            return Ok(None);
        }

        match serde_json::from_value(message.result) {
            Ok(block) => Ok(Some(block)),

            Err(e) => {
                warn!("Error marshalling Get Block result.");
                Err(RpcServerError::Marshaller(e))
            }
        }
    }
}

build_future![SyncingFuture, Result<SyncStatus, RpcServerError>];

impl SyncingFuture {
    fn on_message(&self, message: JsonResponse) -> Result<SyncStatus, RpcServerError> {
        trace!("Server sent a Syncing result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        match serde_json::from_value(message.result) {
            Ok(status) => Ok(status),

            Err(e) => {
                warn!("Error marshalling Syncing result.");
                Err(RpcServerError::Marshaller(e))
            }
        }
    }
}

build_future![SendRawTransactionFuture, Result<Hash, RpcServerError>];

impl SendRawTransactionFuture {
    fn on_message(&self, message: JsonResponse) -> Result<Hash, RpcServerError> {
        trace!("Server sent a Send Raw Transaction result.");

        if !message.error.is_null() {
            return Err(get_error_value(message.error));
        }

        let encoded: String = match serde_json::from_value(message.result) {
            Ok(val) => val,

            Err(e) => {
                warn!("Error marshalling Send Raw Transaction result.");
                return Err(RpcServerError::Marshaller(e));
            }
        };

        match Hash::from_hex(&encoded) {
            Ok(hash) => Ok(hash),

            Err(e) => {
                warn!("Invalid transaction hash from server, error: {}.", e);
                Err(RpcServerError::InvalidResponse(format!("{}", e)))
            }
        }
    }
}

fn get_error_value(error: serde_json::Value) -> RpcServerError {
    let error_value: RpcError = match serde_json::from_value(error) {
        Ok(val) => val,

        Err(e) => {
            warn!("Error marshalling error value.");
            return RpcServerError::Marshaller(e);
        }
    };

    RpcServerError::ServerError(error_value)
}
