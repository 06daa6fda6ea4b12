//! Network definitions and connection details per supported chain.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::models::core::asset::{SupportedAsset, SupportedAssets};

/// An EVM-compatible network.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvmNetwork {
	pub name: String,
	pub rpc_url: String,
	pub chain_id: u64,
	/// Ticker of the coin that pays for gas, e.g. "ETH" or "MATIC"
	pub native_asset: String,
	pub is_testnet: bool,
}

/// A Terra (Cosmos SDK) network reached over the LCD REST API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TerraNetwork {
	pub name: String,
	pub network_id: String,
	/// LCD endpoint
	pub rpc_url: String,
	pub helper_url: String,
	/// Stable-fee price feed endpoint
	pub gas_prices_url: String,
	pub chain_id: String,
	/// BIP-44 coin type for address derivation
	pub coin_type: String,
	/// Code id of the deployed swap contract
	pub code_id: u64,
	pub is_testnet: bool,
	pub supported_assets: SupportedAssets,
}

/// A Bitcoin network reached over the node JSON-RPC API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BitcoinNetwork {
	pub name: String,
	pub rpc_url: String,
	pub is_testnet: bool,
}

fn terra_supported_assets() -> SupportedAssets {
	SupportedAssets::from([
		(
			"LUNA".to_string(),
			SupportedAsset {
				asset: "uluna".to_string(),
				fee_asset: "uluna".to_string(),
				token_address: None,
				stable_fee: false,
			},
		),
		(
			"UST".to_string(),
			SupportedAsset {
				asset: "uusd".to_string(),
				fee_asset: "uusd".to_string(),
				token_address: None,
				stable_fee: true,
			},
		),
	])
}

lazy_static! {
	pub static ref TERRA_MAINNET: TerraNetwork = TerraNetwork {
		name: "mainnet".to_string(),
		network_id: "mainnet".to_string(),
		rpc_url: "https://lcd.terra.dev".to_string(),
		helper_url: "https://fcd.terra.dev/v1".to_string(),
		gas_prices_url: "https://fcd.terra.dev/v1/txs/gas_prices".to_string(),
		chain_id: "columbus-5".to_string(),
		coin_type: "370".to_string(),
		code_id: 1480,
		is_testnet: false,
		supported_assets: terra_supported_assets(),
	};
	pub static ref TERRA_TESTNET: TerraNetwork = TerraNetwork {
		name: "testnet".to_string(),
		network_id: "testnet".to_string(),
		rpc_url: "https://bombay-lcd.terra.dev".to_string(),
		helper_url: "https://bombay-fcd.terra.dev/v1".to_string(),
		gas_prices_url: "https://bombay-fcd.terra.dev/v1/txs/gas_prices".to_string(),
		chain_id: "bombay-12".to_string(),
		coin_type: "370".to_string(),
		code_id: 23733,
		is_testnet: true,
		supported_assets: terra_supported_assets(),
	};
}
