#[cfg(test)]
mod test {
    use {
        crate::ethjson::{BlockTag, JsonResponse, RpcServerError, SyncStatus},
        crate::ethtypes::{Address, Hash},
        crate::ethutil::wei::{Unit, Wei},
        crate::rpcclient::{
            client, connection::RpcTransport, error::RpcClientError, infrastructure::Command,
        },
        async_trait::async_trait,
        bigdecimal::BigDecimal,
        std::sync::{Arc, Mutex},
        tokio::sync::mpsc,
    };

    const TEST_ADDRESS: &str = "0x00000000219ab540356cbb839cbe05303d7705fa";
    const TEST_TX_HASH: &str = "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3";

    /// Transport which answers every command from a canned method table
    /// and records each request it serves.
    #[derive(Clone)]
    struct MockTransport {
        requests: Arc<Mutex<Vec<serde_json::Value>>>,
    }

    impl MockTransport {
        fn new() -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn canned_result(method: &str) -> serde_json::Value {
            match method {
                "web3_clientVersion" => {
                    serde_json::json!("Geth/v1.13.0-stable/linux-amd64/go1.21.0")
                }
                "net_version" => serde_json::json!("1"),
                "eth_chainId" => serde_json::json!("0x1"),
                "eth_blockNumber" => serde_json::json!("0x4b7"),
                "eth_getBalance" => serde_json::json!("0xde0b6b3a7640000"),
                "eth_gasPrice" => serde_json::json!("0x4a817c800"),
                "eth_getTransactionCount" => serde_json::json!("0x10"),
                "eth_syncing" => serde_json::json!(false),
                "eth_sendRawTransaction" => serde_json::json!(TEST_TX_HASH),
                "eth_getBlockByNumber" => serde_json::json!({
                    "number": "0x4b7",
                    "hash": TEST_TX_HASH,
                    "parentHash": TEST_TX_HASH,
                    "gasLimit": "0x1388",
                    "gasUsed": "0x0",
                    "timestamp": "0x55ba467c",
                    "difficulty": "0x4ea3f27bc",
                    "transactions": [],
                    "uncles": []
                }),
                // Unknown blocks resolve to a null result.
                _ => serde_json::Value::Null,
            }
        }
    }

    #[async_trait]
    impl RpcTransport for MockTransport {
        async fn handle_commands(
            &self,
            mut user_command: mpsc::Receiver<Command>,
        ) -> Result<(), RpcClientError> {
            while let Some(cmd) = user_command.recv().await {
                let request: serde_json::Value = serde_json::from_slice(&cmd.rpc_message).unwrap();
                let method = request["method"].as_str().unwrap_or_default().to_string();

                self.requests.lock().unwrap().push(request.clone());

                let response = JsonResponse {
                    jsonrpc: "2.0".to_string(),
                    id: serde_json::json!(cmd.id),
                    result: Self::canned_result(&method),
                    ..Default::default()
                };

                cmd.user_channel.send(response).await.unwrap();
            }

            Ok(())
        }

        fn url(&self) -> String {
            "mock://".to_string()
        }
    }

    /// Transport which answers every command with a server error object.
    #[derive(Clone)]
    struct ErroringTransport {}

    #[async_trait]
    impl RpcTransport for ErroringTransport {
        async fn handle_commands(
            &self,
            mut user_command: mpsc::Receiver<Command>,
        ) -> Result<(), RpcClientError> {
            while let Some(cmd) = user_command.recv().await {
                let response = JsonResponse {
                    jsonrpc: "2.0".to_string(),
                    id: serde_json::json!(cmd.id),
                    error: serde_json::json!({"code": -32601, "message": "method not found"}),
                    ..Default::default()
                };

                cmd.user_channel.send(response).await.unwrap();
            }

            Ok(())
        }

        fn url(&self) -> String {
            "mock://".to_string()
        }
    }

    /// Transport which refuses to serve, standing in for a dead server.
    #[derive(Clone)]
    struct DeadTransport {}

    #[async_trait]
    impl RpcTransport for DeadTransport {
        async fn handle_commands(
            &self,
            _user_command: mpsc::Receiver<Command>,
        ) -> Result<(), RpcClientError> {
            Ok(())
        }

        fn url(&self) -> String {
            "mock://".to_string()
        }
    }

    #[tokio::test]
    async fn test_typed_commands() {
        let transport = MockTransport::new();
        let client = client::new(transport.clone()).unwrap();

        let version = client.client_version().await.unwrap().await.unwrap();
        assert!(version.starts_with("Geth/"), "unexpected version {}", version);

        let network = client.net_version().await.unwrap().await.unwrap();
        assert_eq!(network, "1");

        let chain_id = client.chain_id().await.unwrap().await.unwrap();
        assert_eq!(chain_id, 1);

        let number = client.block_number().await.unwrap().await.unwrap();
        assert_eq!(number, 1207);

        let address = Address::from_hex(TEST_ADDRESS).unwrap();
        let balance = client
            .get_balance(&address, BlockTag::Latest)
            .await
            .unwrap()
            .await
            .unwrap();
        assert_eq!(balance, Wei::from(1_000_000_000_000_000_000u128));
        assert_eq!(balance.to_unit(Unit::Ether), BigDecimal::from(1));

        let gas_price = client.gas_price().await.unwrap().await.unwrap();
        assert_eq!(gas_price, Wei::from(20_000_000_000u64));

        let nonce = client
            .get_transaction_count(&address, BlockTag::Pending)
            .await
            .unwrap()
            .await
            .unwrap();
        assert_eq!(nonce, 16);

        match client.syncing().await.unwrap().await.unwrap() {
            SyncStatus::NotSyncing(false) => {}

            other => panic!("unexpected sync status {:?}", other),
        }

        let block = client
            .get_block_by_number(BlockTag::Number(1207), false)
            .await
            .unwrap()
            .await
            .unwrap();
        let block = block.expect("known block resolved to none");
        assert_eq!(block.number.as_deref(), Some("0x4b7"));
        assert_eq!(block.gas_limit, "0x1388");

        // Unknown block hashes resolve to None.
        let missing = client
            .get_block_by_hash(&Hash::from_hex(TEST_TX_HASH).unwrap(), false)
            .await
            .unwrap()
            .await
            .unwrap();
        assert!(missing.is_none(), "unknown block resolved to a value");

        let tx_hash = client
            .send_raw_transaction(&[0xf8, 0x6b])
            .await
            .unwrap()
            .await
            .unwrap();
        assert_eq!(tx_hash, Hash::from_hex(TEST_TX_HASH).unwrap());
    }

    #[tokio::test]
    async fn test_request_wire_format() {
        let transport = MockTransport::new();
        let client = client::new(transport.clone()).unwrap();

        client.block_number().await.unwrap().await.unwrap();

        let address = Address::from_hex(TEST_ADDRESS).unwrap();
        client
            .get_balance(&address, BlockTag::Latest)
            .await
            .unwrap()
            .await
            .unwrap();
        client
            .get_block_by_number(BlockTag::Number(1207), true)
            .await
            .unwrap()
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);

        assert_eq!(requests[0]["jsonrpc"], "2.0");
        assert_eq!(requests[0]["method"], "eth_blockNumber");
        assert_eq!(requests[0]["params"], serde_json::json!([]));
        assert_eq!(requests[0]["id"], 1);

        assert_eq!(requests[1]["method"], "eth_getBalance");
        assert_eq!(
            requests[1]["params"],
            serde_json::json!([TEST_ADDRESS, "latest"])
        );
        assert_eq!(requests[1]["id"], 2);

        assert_eq!(requests[2]["method"], "eth_getBlockByNumber");
        assert_eq!(requests[2]["params"], serde_json::json!(["0x4b7", true]));
        assert_eq!(requests[2]["id"], 3);
    }

    #[tokio::test]
    async fn test_server_error() {
        let client = client::new(ErroringTransport {}).unwrap();

        match client.chain_id().await.unwrap().await {
            Err(RpcServerError::ServerError(e)) => {
                assert_eq!(e.code, -32601);
                assert_eq!(e.message, "method not found");
            }

            other => panic!("expected server error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_dead_transport() {
        let client = client::new(DeadTransport {}).unwrap();

        // The transport task exits immediately.  Depending on when it is
        // scheduled the command either fails to queue or queues and is then
        // dropped unanswered.
        match client.block_number().await {
            Err(RpcClientError::RpcDisconnected) => {}

            Ok(future) => match future.await {
                Err(RpcServerError::EmptyResponse) => {}

                other => panic!("expected empty response, got {:?}", other.map(|_| ())),
            },

            Err(e) => panic!("unexpected error: {}", e),
        }
    }
}
