//! Houses all JSON result types.

/// Implements JSON RPC request structure to server.
#[derive(serde::Serialize)]
pub(crate) struct JsonRequest<'a> {
    pub jsonrpc: &'a str,
    pub method: &'a str,
    pub id: u64,
    pub params: &'a [serde_json::Value],
}

/// Implements JSON RPC response structure from server.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(default)]
pub struct JsonResponse {
    pub jsonrpc: String,
    pub id: serde_json::Value,
    pub result: serde_json::Value,
    pub error: serde_json::Value,
}

/// Error returned by server.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug)]
#[serde(default)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// BlockResult models the data from the eth_getBlockByNumber and
/// eth_getBlockByHash commands.  Quantity fields are kept in their hex
/// string wire form.  Fields which are null for pending blocks are
/// optional.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug, Clone)]
#[serde(default)]
pub struct BlockResult {
    pub number: Option<String>,
    pub hash: Option<String>,
    pub nonce: Option<String>,
    #[serde(rename = "parentHash")]
    pub parent_hash: String,
    #[serde(rename = "sha3Uncles")]
    pub sha3_uncles: String,
    #[serde(rename = "logsBloom")]
    pub logs_bloom: Option<String>,
    #[serde(rename = "transactionsRoot")]
    pub transactions_root: String,
    #[serde(rename = "stateRoot")]
    pub state_root: String,
    #[serde(rename = "receiptsRoot")]
    pub receipts_root: String,
    pub miner: Option<String>,
    pub difficulty: String,
    #[serde(rename = "totalDifficulty")]
    pub total_difficulty: Option<String>,
    #[serde(rename = "extraData")]
    pub extra_data: String,
    pub size: String,
    #[serde(rename = "gasLimit")]
    pub gas_limit: String,
    #[serde(rename = "gasUsed")]
    pub gas_used: String,
    #[serde(rename = "baseFeePerGas")]
    pub base_fee_per_gas: Option<String>,
    pub timestamp: String,
    /// Transaction hashes, or full transaction objects when the command
    /// was issued with the full transactions flag set.
    pub transactions: Vec<serde_json::Value>,
    pub uncles: Vec<String>,
}

/// Sync progress reported while the server is importing the chain.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug, Clone)]
#[serde(default)]
pub struct SyncProgress {
    #[serde(rename = "startingBlock")]
    pub starting_block: String,
    #[serde(rename = "currentBlock")]
    pub current_block: String,
    #[serde(rename = "highestBlock")]
    pub highest_block: String,
}

/// SyncStatus models the data from the eth_syncing command, which returns
/// false when the server is idle and a progress object otherwise.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum SyncStatus {
    /// The server is not importing blocks.
    NotSyncing(bool),
    /// Import in progress.
    Syncing(SyncProgress),
}

impl SyncStatus {
    /// True while the server is importing blocks.
    pub fn is_syncing(&self) -> bool {
        match self {
            SyncStatus::NotSyncing(flag) => *flag,
            SyncStatus::Syncing(_) => true,
        }
    }
}
