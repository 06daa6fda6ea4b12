use mockall::predicate;
use serde_json::json;

use crate::integration::mocks::MockRest;
use polychain_client::{
	models::{Address, Asset, FeeData, TransactionStatus, TERRA_MAINNET},
	services::blockchain::{ChainClient, ChainError, TerraClient},
};

fn client(lcd: MockRest) -> TerraClient<MockRest> {
	TerraClient::new_with_transport(lcd, MockRest::new(), TERRA_MAINNET.clone())
}

fn client_with_feed(lcd: MockRest, gas_prices: MockRest) -> TerraClient<MockRest> {
	TerraClient::new_with_transport(lcd, gas_prices, TERRA_MAINNET.clone())
}

fn block_payload(height: &str) -> serde_json::Value {
	json!({
		"block_id": { "hash": "ABCDEF" },
		"block": {
			"header": {
				"height": height,
				"time": "2021-06-24T12:00:00Z",
				"chain_id": "columbus-5"
			},
			"last_commit": { "block_id": { "hash": "PARENT" } }
		}
	})
}

#[tokio::test]
async fn test_get_block_by_number() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/blocks/100"))
		.times(1)
		.returning(|_| Ok(block_payload("100")));

	let block = client(lcd).get_block_by_number(100, false).await.unwrap();
	assert_eq!(block.number, 100);
	assert_eq!(block.hash, "ABCDEF");
	assert_eq!(block.parent_hash, "PARENT");
	assert_eq!(block.timestamp, 1_624_536_000);
	assert!(block.transactions.is_none());
}

#[tokio::test]
async fn test_get_block_by_number_not_found() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/blocks/999999999"))
		.times(1)
		.returning(|_| Err(anyhow::anyhow!("HTTP 404: requested block height is bigger then the chain length")));

	let result = client(lcd).get_block_by_number(999_999_999, false).await;
	assert!(matches!(result, Err(ChainError::BlockNotFound(_))));
}

#[tokio::test]
async fn test_get_block_by_number_with_transactions() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/blocks/100"))
		.times(1)
		.returning(|_| Ok(block_payload("100")));
	lcd.expect_get_json()
		.with(predicate::eq("/cosmos/tx/v1beta1/txs?events=tx.height%3D100"))
		.times(1)
		.returning(|_| {
			Ok(json!({
				"tx_responses": [{
					"height": "100",
					"txhash": "AA11",
					"raw_log": "[]"
				}]
			}))
		});

	let block = client(lcd).get_block_by_number(100, true).await.unwrap();
	let txs = block.transactions.unwrap();
	assert_eq!(txs.len(), 1);
	assert_eq!(txs[0].hash, "AA11");
	assert_eq!(txs[0].confirmations, Some(0));
}

#[tokio::test]
async fn test_get_block_by_hash_not_implemented() {
	let result = client(MockRest::new()).get_block_by_hash("ABCDEF", false).await;
	assert!(matches!(result, Err(ChainError::NotImplemented(_))));
}

#[tokio::test]
async fn test_get_block_height() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/blocks/latest"))
		.times(1)
		.returning(|_| Ok(block_payload("4724005")));

	let height = client(lcd).get_block_height().await.unwrap();
	assert_eq!(height, 4_724_005);
}

#[tokio::test]
async fn test_get_transaction_by_hash_decodes_swap_params() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/cosmos/tx/v1beta1/txs/AA11"))
		.times(1)
		.returning(|_| {
			Ok(json!({
				"tx_response": {
					"height": "100",
					"txhash": "AA11",
					"raw_log": "[]",
					"logs": [{
						"msg_index": 0,
						"events": [{
							"type": "execute_contract",
							"attributes": [
								{ "key": "contract_address", "value": "terra1contract" }
							]
						}]
					}],
					"tx": {
						"body": {
							"messages": [{
								"sender": "terra1sender",
								"contract": "terra1contract",
								"init_coins": [{ "denom": "uluna", "amount": "500" }],
								"execute_msg": { "claim": { "secret": "cafebabe" } }
							}]
						},
						"auth_info": {
							"fee": {
								"amount": [{ "denom": "uluna", "amount": "1500" }]
							}
						}
					}
				}
			}))
		});
	lcd.expect_get_json()
		.with(predicate::eq("/blocks/latest"))
		.times(1)
		.returning(|_| Ok(block_payload("105")));

	let tx = client(lcd).get_transaction_by_hash("AA11").await.unwrap();
	assert_eq!(tx.hash, "AA11");
	assert_eq!(tx.value, 500);
	assert_eq!(tx.fee, Some(1500));
	assert_eq!(tx.block_number, Some(100));
	assert_eq!(tx.confirmations, Some(5));
	assert_eq!(tx.status, TransactionStatus::Success);
	assert_eq!(tx.raw["contractAddress"], "terra1contract");
	assert_eq!(tx.raw["secret"], "cafebabe");
}

#[tokio::test]
async fn test_get_transaction_by_hash_failed_execution() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/cosmos/tx/v1beta1/txs/BB22"))
		.times(1)
		.returning(|_| {
			Ok(json!({
				"tx_response": {
					"height": "100",
					"txhash": "BB22",
					"raw_log": "failed to execute message; message index: 0"
				}
			}))
		});
	lcd.expect_get_json()
		.with(predicate::eq("/blocks/latest"))
		.times(1)
		.returning(|_| Ok(block_payload("100")));

	let tx = client(lcd).get_transaction_by_hash("BB22").await.unwrap();
	assert_eq!(tx.status, TransactionStatus::Failed);
}

#[tokio::test]
async fn test_get_transaction_by_hash_not_found() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/cosmos/tx/v1beta1/txs/MISSING"))
		.times(1)
		.returning(|_| Err(anyhow::anyhow!("HTTP 404: tx not found")));

	let result = client(lcd).get_transaction_by_hash("MISSING").await;
	assert!(matches!(result, Err(ChainError::TransactionNotFound(_))));
}

#[tokio::test]
async fn test_get_balance_native_denom() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.with(predicate::eq("/cosmos/bank/v1beta1/balances/terra1addr"))
		.times(1)
		.returning(|_| {
			Ok(json!({
				"balances": [
					{ "denom": "uusd", "amount": "9" },
					{ "denom": "uluna", "amount": "42" }
				]
			}))
		});

	let addresses = [Address::from("terra1addr")];
	let assets = [Asset::native("LUNA")];
	let balances = client(lcd).get_balance(&addresses, &assets).await.unwrap();
	assert_eq!(balances, vec![42]);
}

#[tokio::test]
async fn test_get_balance_token_contract() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.withf(|path| path.starts_with("/terra/wasm/v1beta1/contracts/terra1token/store?query_msg="))
		.times(1)
		.returning(|_| Ok(json!({ "query_result": { "balance": "777" } })));

	let addresses = [Address::from("terra1addr")];
	let assets = [Asset::token("aUST", "terra1token")];
	let balances = client(lcd).get_balance(&addresses, &assets).await.unwrap();
	assert_eq!(balances, vec![777]);
}

#[tokio::test]
async fn test_get_balance_absorbs_nonexistent_state() {
	let mut lcd = MockRest::new();
	lcd.expect_get_json()
		.withf(|path| path.starts_with("/terra/wasm/v1beta1/contracts/"))
		.times(1)
		.returning(|_| {
			Err(anyhow::anyhow!(
				"contract query failed: state does not exist for this account"
			))
		});

	let addresses = [Address::from("terra1fresh")];
	let assets = [Asset::token("aUST", "terra1token")];
	let balances = client(lcd).get_balance(&addresses, &assets).await.unwrap();
	assert_eq!(balances, vec![0]);
}

#[tokio::test]
async fn test_get_fees_from_price_feed() {
	let mut feed = MockRest::new();
	feed.expect_get_json()
		.with(predicate::eq(""))
		.times(1)
		.returning(|_| Ok(json!({ "uluna": "0.015", "uusd": "0.15" })));

	let fees = client_with_feed(MockRest::new(), feed)
		.get_fees(None)
		.await
		.unwrap();
	assert_eq!(fees, FeeData::Legacy { fee: 0.015 });
}

#[tokio::test]
async fn test_get_fees_resolves_stable_fee_denom() {
	let mut feed = MockRest::new();
	feed.expect_get_json()
		.with(predicate::eq(""))
		.times(1)
		.returning(|_| Ok(json!({ "uluna": "0.015", "uusd": "0.15" })));

	let asset = Asset::native("UST");
	let fees = client_with_feed(MockRest::new(), feed)
		.get_fees(Some(&asset))
		.await
		.unwrap();
	assert_eq!(fees, FeeData::Legacy { fee: 0.15 });
}

#[tokio::test]
async fn test_get_fees_missing_denom_fails() {
	let mut feed = MockRest::new();
	feed.expect_get_json()
		.with(predicate::eq(""))
		.times(1)
		.returning(|_| Ok(json!({ "uusd": "0.15" })));

	let result = client_with_feed(MockRest::new(), feed).get_fees(None).await;
	assert!(matches!(result, Err(ChainError::Response(_))));
}

#[tokio::test]
async fn test_broadcast_not_supported() {
	let result = client(MockRest::new()).send_raw_transaction("0a0b").await;
	assert!(matches!(result, Err(ChainError::NotImplemented(_))));

	let result = client(MockRest::new())
		.send_rpc_request("status", json!([]))
		.await;
	assert!(matches!(result, Err(ChainError::NotImplemented(_))));
}
