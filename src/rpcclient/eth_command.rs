//! Ethereum chain commands.

use {
    super::{
        check_client, client::Client, connection::RpcTransport, error::RpcClientError, future_type,
    },
    crate::ethjson::{commands, BlockTag},
    crate::ethtypes::{Address, Hash},
};

/// Generates clients command
macro_rules! command_generator {
    ($doc: tt, $name: ident, $output_type: ty, $command: expr, $json_params: expr, $($fn_params:ident : $fn_type: ty),*) => {
        #[doc = $doc]
        pub async fn $name(&self, $($fn_params : $fn_type),*) -> Result<$output_type, RpcClientError> {
            // Error if the transport task has gone away.
            check_client!(self);

            let cmd_result = self.send_custom_command($command, $json_params).await;

            match cmd_result {
                Ok(e) => Ok(<$output_type>::new(e.1)),

                Err(e) => Err(e),
            }
        }
    };
}

impl<C: 'static + RpcTransport> Client<C> {
    command_generator!(
        "client_version returns the version string of the connected server software.",
        client_version,
        future_type::ClientVersionFuture,
        commands::METHOD_CLIENT_VERSION,
        &[],
    );

    command_generator!(
        "net_version returns the identifier of the network the server is attached to.",
        net_version,
        future_type::NetVersionFuture,
        commands::METHOD_NET_VERSION,
        &[],
    );

    command_generator!(
        "chain_id returns the chain id the server uses for transaction signing.",
        chain_id,
        future_type::ChainIdFuture,
        commands::METHOD_CHAIN_ID,
        &[],
    );

    command_generator!(
        "block_number returns the number of the most recent block known to the server.",
        block_number,
        future_type::BlockNumberFuture,
        commands::METHOD_BLOCK_NUMBER,
        &[],
    );

    command_generator!(
        "get_balance returns the wei balance of the given account at the given block.",
        get_balance,
        future_type::GetBalanceFuture,
        commands::METHOD_GET_BALANCE,
        &[
            serde_json::json!(address.to_hex()),
            serde_json::json!(block)
        ],
        address: &Address,
        block: BlockTag
    );

    command_generator!(
        "gas_price returns the current price per unit of gas in wei.",
        gas_price,
        future_type::GasPriceFuture,
        commands::METHOD_GAS_PRICE,
        &[],
    );

    command_generator!(
        "get_transaction_count returns the number of transactions sent from the given
        account up to the given block, which is also the account's next nonce.",
        get_transaction_count,
        future_type::TransactionCountFuture,
        commands::METHOD_GET_TRANSACTION_COUNT,
        &[
            serde_json::json!(address.to_hex()),
            serde_json::json!(block)
        ],
        address: &Address,
        block: BlockTag
    );

    command_generator!(
        "get_block_by_number returns a data structure from the server with information
        about the block at the given number or tag.  Transactions are returned as full
        objects when full_transactions is set and as hashes otherwise.  Resolves to
        None when no such block exists.",
        get_block_by_number,
        future_type::GetBlockFuture,
        commands::METHOD_GET_BLOCK_BY_NUMBER,
        &[
            serde_json::json!(block),
            serde_json::json!(full_transactions)
        ],
        block: BlockTag,
        full_transactions: bool
    );

    command_generator!(
        "get_block_by_hash returns a data structure from the server with information
        about the block with the given hash.  Transactions are returned as full
        objects when full_transactions is set and as hashes otherwise.  Resolves to
        None when no such block exists.",
        get_block_by_hash,
        future_type::GetBlockFuture,
        commands::METHOD_GET_BLOCK_BY_HASH,
        &[
            serde_json::json!(block_hash.to_hex()),
            serde_json::json!(full_transactions)
        ],
        block_hash: &Hash,
        full_transactions: bool
    );

    command_generator!(
        "syncing returns the server's chain import progress, or a not-syncing flag
        when the server is idle.",
        syncing,
        future_type::SyncingFuture,
        commands::METHOD_SYNCING,
        &[],
    );

    command_generator!(
        "send_raw_transaction submits a pre-signed serialized transaction for
        broadcast and returns its hash.",
        send_raw_transaction,
        future_type::SendRawTransactionFuture,
        commands::METHOD_SEND_RAW_TRANSACTION,
        &[serde_json::json!(format!("0x{}", hex::encode(signed_tx)))],
        signed_tx: &[u8]
    );
}
