//! JSON-RPC method names.
//! The names are a wire compatibility surface shared with every
//! Ethereum-compatible server.

/// Returns the version of the connected client software.
pub(crate) const METHOD_CLIENT_VERSION: &str = "web3_clientVersion";
/// Returns the identifier of the network the server is attached to.
pub(crate) const METHOD_NET_VERSION: &str = "net_version";
/// Returns the chain id used for transaction signing.
pub(crate) const METHOD_CHAIN_ID: &str = "eth_chainId";
/// Returns the number of the most recent block.
pub(crate) const METHOD_BLOCK_NUMBER: &str = "eth_blockNumber";
/// Returns the wei balance of an account at a block.
pub(crate) const METHOD_GET_BALANCE: &str = "eth_getBalance";
/// Returns the current price per unit of gas in wei.
pub(crate) const METHOD_GAS_PRICE: &str = "eth_gasPrice";
/// Returns the number of transactions sent from an address.
pub(crate) const METHOD_GET_TRANSACTION_COUNT: &str = "eth_getTransactionCount";
/// Returns information about a block given its number or tag.
pub(crate) const METHOD_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";
/// Returns information about a block given its hash.
pub(crate) const METHOD_GET_BLOCK_BY_HASH: &str = "eth_getBlockByHash";
/// Returns the sync progress of the server, or false when idle.
pub(crate) const METHOD_SYNCING: &str = "eth_syncing";
/// Submits a pre-signed transaction for broadcast.
pub(crate) const METHOD_SEND_RAW_TRANSACTION: &str = "eth_sendRawTransaction";
