use mockall::predicate;
use serde_json::json;

use crate::integration::mocks::MockRpc;
use polychain_client::{
	models::{Address, Asset},
	services::blockchain::{BitcoinClient, ChainClient, ChainError},
};

fn client(mock: MockRpc) -> BitcoinClient<MockRpc> {
	BitcoinClient::new_with_transport(mock)
}

fn block_payload() -> serde_json::Value {
	json!({
		"hash": "00000000000000000004a5",
		"height": 700_000,
		"previousblockhash": "00000000000000000003f4",
		"time": 1_631_234_567,
		"size": 1_523_041,
		"difficulty": 18_415_156_832_118.59,
		"nonce": 1_324_561_078u64,
		"tx": ["aa11", "bb22"]
	})
}

#[tokio::test]
async fn test_get_block_by_hash() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.with(
			predicate::eq("getblock"),
			predicate::eq(json!(["00000000000000000004a5"])),
		)
		.times(1)
		.returning(|_, _| Ok(block_payload()));

	let block = client(mock)
		.get_block_by_hash("00000000000000000004a5", false)
		.await
		.unwrap();
	assert_eq!(block.number, 700_000);
	assert_eq!(block.hash, "00000000000000000004a5");
	assert_eq!(block.parent_hash, "00000000000000000003f4");
	assert_eq!(block.nonce, Some(1_324_561_078));
	// The raw verbose payload keeps the txid list
	assert_eq!(block.raw["tx"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_block_by_number_resolves_hash_first() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.with(predicate::eq("getblockhash"), predicate::eq(json!([700_000])))
		.times(1)
		.returning(|_, _| Ok(json!("00000000000000000004a5")));
	mock.expect_call()
		.with(
			predicate::eq("getblock"),
			predicate::eq(json!(["00000000000000000004a5"])),
		)
		.times(1)
		.returning(|_, _| Ok(block_payload()));

	let block = client(mock).get_block_by_number(700_000, false).await.unwrap();
	assert_eq!(block.number, 700_000);
}

#[tokio::test]
async fn test_get_block_by_number_out_of_range() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.with(
			predicate::eq("getblockhash"),
			predicate::eq(json!([99_000_000])),
		)
		.times(1)
		.returning(|_, _| Err(anyhow::anyhow!("Block height out of range")));

	let result = client(mock).get_block_by_number(99_000_000, false).await;
	assert!(matches!(result, Err(ChainError::BlockNotFound(_))));
}

#[tokio::test]
async fn test_get_block_unknown_hash() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.with(predicate::eq("getblock"), predicate::eq(json!(["ff00"])))
		.times(1)
		.returning(|_, _| Err(anyhow::anyhow!("Block not found")));

	let result = client(mock).get_block_by_hash("ff00", false).await;
	assert!(matches!(result, Err(ChainError::BlockNotFound(_))));
}

#[tokio::test]
async fn test_include_tx_not_supported() {
	let result = client(MockRpc::new())
		.get_block_by_hash("00ff", true)
		.await;
	assert!(matches!(result, Err(ChainError::NotImplemented(_))));
}

#[tokio::test]
async fn test_get_block_height() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.with(predicate::eq("getblockcount"), predicate::eq(json!([])))
		.times(1)
		.returning(|_, _| Ok(json!(700_123)));

	let height = client(mock).get_block_height().await.unwrap();
	assert_eq!(height, 700_123);
}

#[tokio::test]
async fn test_unsupported_operations() {
	let client = client(MockRpc::new());
	assert!(matches!(
		client.get_transaction_by_hash("aa11").await,
		Err(ChainError::NotImplemented(_))
	));
	assert!(matches!(
		client
			.get_balance(&[Address::from("bc1qaddr")], &[Asset::native("BTC")])
			.await,
		Err(ChainError::NotImplemented(_))
	));
	assert!(matches!(
		client.get_fees(None).await,
		Err(ChainError::NotImplemented(_))
	));
}

#[tokio::test]
async fn test_send_raw_transaction() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.with(
			predicate::eq("sendrawtransaction"),
			predicate::eq(json!(["0200000001ab"])),
		)
		.times(1)
		.returning(|_, _| Ok(json!("c0ffee")));

	let hash = client(mock).send_raw_transaction("0200000001ab").await.unwrap();
	assert_eq!(hash, "c0ffee");
}

#[tokio::test]
async fn test_send_raw_transaction_rejection() {
	let mut mock = MockRpc::new();
	mock.expect_call()
		.withf(|method, _| method == "sendrawtransaction")
		.times(1)
		.returning(|_, _| Err(anyhow::anyhow!("bad-txns-inputs-missingorspent")));

	let result = client(mock).send_raw_transaction("00").await;
	assert!(matches!(result, Err(ChainError::Broadcast(_))));
}
