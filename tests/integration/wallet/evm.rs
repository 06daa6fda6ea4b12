use mockall::predicate;
use serde_json::json;

use crate::integration::mocks::{init_test_tracing, MockChainBackend};
use polychain_client::{
	models::{
		Eip1559Fee, EvmNetwork, FeeData, FeePreference, SendOptions, Transaction,
		TransactionStatus,
	},
	services::{blockchain::ChainError, wallet::EvmWallet},
};

const PHRASE: &str = "test test test test test test test test test test test junk";
const PATH: &str = "m/44'/60'/0'/0/0";
const ACCOUNT: &str = "f39fd6e51aad88f6f4ce6ab8827279cfffb92266";

fn network() -> EvmNetwork {
	EvmNetwork {
		name: "local".into(),
		rpc_url: "http://localhost:8545".into(),
		chain_id: 1337,
		native_asset: "ETH".into(),
		is_testnet: true,
	}
}

fn wallet(chain: MockChainBackend) -> EvmWallet<MockChainBackend> {
	init_test_tracing();
	EvmWallet::new(chain, network(), PHRASE, PATH).unwrap()
}

#[tokio::test]
async fn test_send_transaction_signs_and_broadcasts() {
	let mut chain = MockChainBackend::new();
	chain
		.expect_get_transaction_count()
		.with(predicate::eq(ACCOUNT), predicate::eq("pending"))
		.times(1)
		.returning(|_, _| Ok(7));
	chain
		.expect_estimate_gas()
		.times(1)
		.returning(|_| Ok(21_000));
	chain
		.expect_send_raw_transaction()
		.withf(|raw| !raw.is_empty())
		.times(1)
		.returning(|_| Ok("0xbeef".to_string()));

	let tx = wallet(chain)
		.send_transaction(SendOptions {
			to: Some("bb00000000000000000000000000000000000002".into()),
			value: 100,
			data: None,
			fee: Some(FeePreference::PerUnit(20.0)),
		})
		.await
		.unwrap();

	assert_eq!(tx.hash, "beef");
	assert_eq!(tx.value, 100);
	assert_eq!(tx.status, TransactionStatus::Pending);
	assert!(tx.block_number.is_none());
	assert_eq!(tx.raw["nonce"], "0x7");
}

#[tokio::test]
async fn test_send_transaction_falls_back_to_chain_fees() {
	let mut chain = MockChainBackend::new();
	chain
		.expect_get_transaction_count()
		.returning(|_, _| Ok(0));
	chain
		.expect_get_fees()
		.times(1)
		.returning(|_| {
			Ok(FeeData::Eip1559(Eip1559Fee {
				max_fee_per_gas: 3.0,
				max_priority_fee_per_gas: 1.0,
			}))
		});
	chain
		.expect_estimate_gas()
		.withf(|request| {
			request.max_fee_per_gas.is_some() && request.gas_price.is_none()
		})
		.times(1)
		.returning(|_| Ok(21_000));
	chain
		.expect_send_raw_transaction()
		// EIP-1559 payloads carry the type-2 envelope marker
		.withf(|raw| raw.starts_with("02"))
		.times(1)
		.returning(|_| Ok("0xfeed".to_string()));

	let tx = wallet(chain)
		.send_transaction(SendOptions {
			to: Some("bb00000000000000000000000000000000000002".into()),
			value: 1,
			data: None,
			fee: None,
		})
		.await
		.unwrap();

	assert_eq!(tx.hash, "feed");
}

#[tokio::test]
async fn test_update_transaction_fee_preserves_nonce() {
	let raw_tx = json!({
		"hash": "0xabc",
		"value": "0x64",
		"from": format!("0x{}", ACCOUNT),
		"to": "0xbb00000000000000000000000000000000000002",
		"nonce": "0x5",
		"gas": "0x5208",
		"gasPrice": "0x1"
	});

	let mut chain = MockChainBackend::new();
	chain
		.expect_get_transaction_by_hash()
		.with(predicate::eq("abc"))
		.times(1)
		.returning(move |_| {
			Ok(Transaction::pending("abc", 100, raw_tx.clone()))
		});
	chain
		.expect_estimate_gas()
		.withf(|request| request.nonce.as_deref() == Some("0x5"))
		.times(1)
		.returning(|_| Ok(21_000));
	chain
		.expect_send_raw_transaction()
		.times(1)
		.returning(|_| Ok("0xdef".to_string()));

	let tx = wallet(chain)
		.update_transaction_fee("abc", FeePreference::PerUnit(40.0))
		.await
		.unwrap();

	assert_eq!(tx.hash, "def");
	assert_eq!(tx.value, 100);
	assert_eq!(tx.raw["nonce"], "0x5");
	// 40 gwei replacement price
	assert_eq!(tx.raw["gasPrice"], "0x9502f9000");
}

#[tokio::test]
async fn test_sweep_sends_balance_minus_fee_reserve() {
	// 1 gwei price: reserve = 21000 * 1e9
	let reserve: u128 = 21_000 * 1_000_000_000;
	let balance = reserve + 500;

	let mut chain = MockChainBackend::new();
	chain
		.expect_get_balance()
		.withf(|addresses, assets| addresses.len() == 1 && assets.len() == 1)
		.times(1)
		.returning(move |_, _| Ok(vec![balance]));
	chain
		.expect_get_transaction_count()
		.returning(|_, _| Ok(0));
	chain
		.expect_estimate_gas()
		.returning(|_| Ok(21_000));
	chain
		.expect_send_raw_transaction()
		.returning(|_| Ok("0xswept".to_string()));

	let tx = wallet(chain)
		.send_sweep_transaction(
			"bb00000000000000000000000000000000000002",
			Some(FeePreference::PerUnit(1.0)),
		)
		.await
		.unwrap();

	assert_eq!(tx.value, 500);
}

#[tokio::test]
async fn test_sweep_queries_network_native_asset() {
	let mut chain = MockChainBackend::new();
	chain
		.expect_get_balance()
		.withf(|_, assets| {
			assets.len() == 1
				&& assets[0].name == "MATIC"
				&& assets[0].contract_address.is_none()
		})
		.times(1)
		.returning(|_, _| Ok(vec![1_000]));

	let polygon = EvmNetwork {
		name: "polygon".into(),
		rpc_url: "http://localhost:8545".into(),
		chain_id: 137,
		native_asset: "MATIC".into(),
		is_testnet: false,
	};
	let wallet = EvmWallet::new(chain, polygon, PHRASE, PATH).unwrap();

	// The reserve exceeds the balance, so the sweep stops after the
	// balance query.
	let result = wallet
		.send_sweep_transaction(
			"bb00000000000000000000000000000000000002",
			Some(FeePreference::PerUnit(20.0)),
		)
		.await;

	assert!(matches!(
		result,
		Err(ChainError::InsufficientBalance { .. })
	));
}

#[tokio::test]
async fn test_sweep_insufficient_balance() {
	let mut chain = MockChainBackend::new();
	chain
		.expect_get_balance()
		.times(1)
		.returning(|_, _| Ok(vec![1_000]));

	let result = wallet(chain)
		.send_sweep_transaction(
			"bb00000000000000000000000000000000000002",
			Some(FeePreference::PerUnit(20.0)),
		)
		.await;

	assert!(matches!(
		result,
		Err(ChainError::InsufficientBalance { .. })
	));
}
