use rusteth::{
    ethjson::BlockTag,
    ethtypes::Address,
    ethutil::wei::Unit,
    rpcclient::{client, connection},
};

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    // A local node serving plain HTTP on the default port.
    let config = connection::ConnConfig {
        host: "127.0.0.1:8545".to_string(),

        ..Default::default()
    };

    let client = client::new(config).expect("error creating RPC client");

    let version = client
        .client_version()
        .await
        .expect("error sending client version command")
        .await
        .expect("client version command failed");

    println!("connected to {}", version);

    let number = client
        .block_number()
        .await
        .expect("error sending block number command")
        .await
        .expect("block number command failed");

    println!("best block: {}", number);

    let address = Address::from_hex("0x00000000219ab540356cbb839cbe05303d7705fa")
        .expect("error parsing address");

    let balance = client
        .get_balance(&address, BlockTag::Latest)
        .await
        .expect("error sending get balance command")
        .await
        .expect("get balance command failed");

    println!(
        "balance of {}: {} ({} ether)",
        address,
        balance,
        balance.to_unit_rounded(Unit::Ether, 6)
    );

    let gas_price = client
        .gas_price()
        .await
        .expect("error sending gas price command")
        .await
        .expect("gas price command failed");

    println!("gas price: {} Gwei", gas_price.to_unit_rounded(Unit::Gwei, 2));
}
