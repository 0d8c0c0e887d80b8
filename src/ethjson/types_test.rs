#[cfg(test)]
mod ethjson {
    use crate::ethjson::{BlockResult, BlockTag, JsonResponse, RpcError, SyncStatus};

    #[test]
    fn test_block_tag_codes() {
        let tests = vec![
            (BlockTag::Latest, "latest"),
            (BlockTag::Earliest, "earliest"),
            (BlockTag::Pending, "pending"),
            (BlockTag::Number(0), "0x0"),
            (BlockTag::Number(1207), "0x4b7"),
        ];

        for (tag, expected) in tests {
            if tag.code() != expected {
                panic!("{:?}: wire code {} does not match {}", tag, tag.code(), expected);
            }

            let serialized = serde_json::json!(tag);
            assert_eq!(
                serialized,
                serde_json::Value::String(expected.to_string()),
                "{:?}: serialized form mismatch",
                tag
            );
        }
    }

    #[test]
    fn test_json_response() {
        // A result carrying response.
        let raw = r#"{"jsonrpc":"2.0","id":7,"result":"0x4b7"}"#;

        let response: JsonResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.jsonrpc, "2.0");
        assert_eq!(response.id, serde_json::json!(7));
        assert_eq!(response.result, serde_json::json!("0x4b7"));
        assert!(response.error.is_null(), "error is not null");

        // An error carrying response.
        let raw = r#"{"jsonrpc":"2.0","id":8,"error":{"code":-32601,"message":"method not found"}}"#;

        let response: JsonResponse = serde_json::from_str(raw).unwrap();
        assert!(response.result.is_null(), "result is not null");

        let rpc_error: RpcError = serde_json::from_value(response.error).unwrap();
        assert_eq!(rpc_error.code, -32601);
        assert_eq!(rpc_error.message, "method not found");
    }

    #[test]
    fn test_block_result() {
        let raw = r#"{
            "number": "0x1b4",
            "hash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
            "parentHash": "0xe99e022112df268087ea7eafaf4790497fd21dbeeb6bd7a1721df161a6657a54",
            "nonce": "0x689056015818adbe",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "logsBloom": "0x00",
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "stateRoot": "0xddc8b0234c2e0cad087c8b389aa7ef01f7d79b2570bccb77ce48738e25c26bc1",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "miner": "0xbb7b8287f3f0a933474a79eae42cbca977791171",
            "difficulty": "0x4ea3f27bc",
            "totalDifficulty": "0x78ed983323d",
            "extraData": "0x476574682f4c5649562f76312e302e302f6c696e75782f676f312e342e32",
            "size": "0x220",
            "gasLimit": "0x1388",
            "gasUsed": "0x0",
            "timestamp": "0x55ba467c",
            "transactions": [],
            "uncles": []
        }"#;

        let block: BlockResult = serde_json::from_str(raw).unwrap();

        assert_eq!(block.number.as_deref(), Some("0x1b4"));
        assert_eq!(block.gas_limit, "0x1388");
        assert_eq!(block.timestamp, "0x55ba467c");
        assert_eq!(
            block.miner.as_deref(),
            Some("0xbb7b8287f3f0a933474a79eae42cbca977791171")
        );
        assert!(block.transactions.is_empty(), "expected no transactions");
        assert!(
            block.base_fee_per_gas.is_none(),
            "pre-london block carries no base fee"
        );

        // Pending blocks leave unsealed fields null.
        let raw = r#"{"number": null, "hash": null, "parentHash": "0x00", "transactions": []}"#;

        let pending: BlockResult = serde_json::from_str(raw).unwrap();
        assert!(pending.number.is_none(), "pending block number is not none");
        assert!(pending.hash.is_none(), "pending block hash is not none");
    }

    #[test]
    fn test_sync_status() {
        let idle: SyncStatus = serde_json::from_str("false").unwrap();
        assert!(!idle.is_syncing(), "idle server reported as syncing");

        let raw = r#"{"startingBlock":"0x384","currentBlock":"0x386","highestBlock":"0x454"}"#;

        let status: SyncStatus = serde_json::from_str(raw).unwrap();
        assert!(status.is_syncing(), "importing server reported as idle");

        match status {
            SyncStatus::Syncing(progress) => {
                assert_eq!(progress.starting_block, "0x384");
                assert_eq!(progress.current_block, "0x386");
                assert_eq!(progress.highest_block, "0x454");
            }

            SyncStatus::NotSyncing(_) => panic!("progress object decoded as flag"),
        }
    }
}
