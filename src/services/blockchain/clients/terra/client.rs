//! Terra chain provider.
//!
//! Implements the uniform [`ChainClient`] facade on top of the LCD REST
//! API plus the stable-fee gas-prices feed. Terra is an account-model
//! chain: balance queries against contracts an address never touched fail
//! node-side with a "does not exist" error, which this client absorbs to
//! zero at exactly one point.

use async_trait::async_trait;
use base64::Engine;
use futures::future::try_join_all;
use serde_json::Value;
use tracing::instrument;

use crate::{
	models::{
		Address, Asset, Block, FeeData, TerraBlock, TerraNetwork, TerraTxInfo, Transaction,
	},
	services::{
		blockchain::{
			client::ChainClient,
			error::ChainError,
			transports::{RestClient, RestTransport},
		},
		normalization::terra::{normalize_block, normalize_transaction},
	},
};

/// Node-side marker for per-asset state that was never created.
const NONEXISTENT_STATE_MARKER: &str = "does not exist";

/// Client implementation for Terra (Cosmos SDK) chains.
#[derive(Clone)]
pub struct TerraClient<R: Send + Sync> {
	/// LCD transport
	lcd: R,
	/// Gas-prices price feed transport, queried at its base URL
	gas_prices: R,
	network: TerraNetwork,
}

impl<R: Send + Sync> TerraClient<R> {
	/// Creates a new Terra client with specific transports
	pub fn new_with_transport(lcd: R, gas_prices: R, network: TerraNetwork) -> Self {
		Self {
			lcd,
			gas_prices,
			network,
		}
	}
}

impl TerraClient<RestClient> {
	/// Creates a new Terra client for the given network.
	pub fn new(network: &TerraNetwork) -> Result<Self, ChainError> {
		let lcd = RestClient::new(&network.rpc_url)?;
		let gas_prices = RestClient::new(&network.gas_prices_url)?;
		Ok(Self::new_with_transport(lcd, gas_prices, network.clone()))
	}
}

impl<R: Send + Sync + RestTransport> TerraClient<R> {
	/// Fetches and normalizes the transactions of a block.
	async fn transactions_at_height(
		&self,
		height: u64,
	) -> Result<Vec<Transaction>, ChainError> {
		let response = self
			.lcd
			.get_json(&format!(
				"/cosmos/tx/v1beta1/txs?events=tx.height%3D{}",
				height
			))
			.await?;

		let tx_responses: Vec<TerraTxInfo> = response
			.get("tx_responses")
			.cloned()
			.map(serde_json::from_value)
			.transpose()
			.map_err(ChainError::invalid_transaction)?
			.unwrap_or_default();

		tx_responses
			.iter()
			.map(|tx| {
				normalize_transaction(tx, &self.network.supported_assets, Some(height))
			})
			.collect()
	}

	/// Balance of one address for one asset, with the documented
	/// zero-absorption for nonexistent per-asset state.
	async fn single_balance(&self, address: &str, asset: &Asset) -> Result<u128, ChainError> {
		let result = match &asset.contract_address {
			Some(contract) => self.token_balance(address, contract).await,
			None => self.native_balance(address, asset).await,
		};

		match result {
			Err(ChainError::Transport(e)) if e.to_string().contains(NONEXISTENT_STATE_MARKER) => {
				Ok(0)
			}
			other => other,
		}
	}

	async fn token_balance(&self, address: &str, contract: &str) -> Result<u128, ChainError> {
		let query = serde_json::json!({ "balance": { "address": address } });
		let encoded = base64::engine::general_purpose::STANDARD.encode(query.to_string());
		let response = self
			.lcd
			.get_json(&format!(
				"/terra/wasm/v1beta1/contracts/{}/store?query_msg={}",
				contract, encoded
			))
			.await?;

		parse_amount(response.get("query_result").and_then(|r| r.get("balance")))
	}

	async fn native_balance(&self, address: &str, asset: &Asset) -> Result<u128, ChainError> {
		let denom = self
			.network
			.supported_assets
			.get(&asset.name)
			.map(|supported| supported.asset.clone())
			.unwrap_or_else(|| asset.name.clone());

		let response = self
			.lcd
			.get_json(&format!("/cosmos/bank/v1beta1/balances/{}", address))
			.await?;

		let balance = response
			.get("balances")
			.and_then(Value::as_array)
			.and_then(|coins| {
				coins
					.iter()
					.find(|coin| coin.get("denom").and_then(Value::as_str) == Some(&denom))
			})
			.and_then(|coin| coin.get("amount"))
			.map(|amount| parse_amount(Some(amount)))
			.transpose()?;

		Ok(balance.unwrap_or(0))
	}
}

#[async_trait]
impl<R: Send + Sync + RestTransport> ChainClient for TerraClient<R> {
	async fn get_block_by_hash(
		&self,
		_block_hash: &str,
		_include_tx: bool,
	) -> Result<Block, ChainError> {
		Err(ChainError::NotImplemented(
			"Terra blocks are only addressable by height",
		))
	}

	#[instrument(skip(self))]
	async fn get_block_by_number(
		&self,
		block_number: u64,
		include_tx: bool,
	) -> Result<Block, ChainError> {
		let response = self
			.lcd
			.get_json(&format!("/blocks/{}", block_number))
			.await
			.map_err(|e| match e.to_string() {
				msg if msg.contains("HTTP 404") => {
					ChainError::BlockNotFound(block_number.to_string())
				}
				_ => ChainError::Transport(e),
			})?;

		let raw: TerraBlock = serde_json::from_value(response)
			.map_err(|e| ChainError::response(e.to_string()))?;
		let mut block = normalize_block(&raw)?;

		if include_tx {
			block.transactions = Some(self.transactions_at_height(block.number).await?);
		}

		Ok(block)
	}

	async fn get_block_height(&self) -> Result<u64, ChainError> {
		let response = self.lcd.get_json("/blocks/latest").await?;
		let raw: TerraBlock = serde_json::from_value(response)
			.map_err(|e| ChainError::response(e.to_string()))?;
		raw.block
			.header
			.height
			.as_u64()
			.ok_or_else(|| ChainError::response("bad block height"))
	}

	#[instrument(skip(self))]
	async fn get_transaction_by_hash(&self, tx_hash: &str) -> Result<Transaction, ChainError> {
		let response = self
			.lcd
			.get_json(&format!("/cosmos/tx/v1beta1/txs/{}", tx_hash))
			.await
			.map_err(|e| match e.to_string() {
				msg if msg.contains("HTTP 404") || msg.contains("not found") => {
					ChainError::TransactionNotFound(tx_hash.to_string())
				}
				_ => ChainError::Transport(e),
			})?;

		let tx_response = response
			.get("tx_response")
			.cloned()
			.ok_or_else(|| ChainError::TransactionNotFound(tx_hash.to_string()))?;
		let raw: TerraTxInfo =
			serde_json::from_value(tx_response).map_err(ChainError::invalid_transaction)?;

		let current_block = self.get_block_height().await?;
		normalize_transaction(&raw, &self.network.supported_assets, Some(current_block))
	}

	#[instrument(skip(self, addresses, assets))]
	async fn get_balance(
		&self,
		addresses: &[Address],
		assets: &[Asset],
	) -> Result<Vec<u128>, ChainError> {
		// All address x asset lookups fan out concurrently; sums are
		// commutative so completion order is irrelevant.
		let lookups = assets.iter().map(|asset| {
			let per_asset = addresses
				.iter()
				.map(|address| self.single_balance(&address.address, asset));
			async move {
				let balances: Vec<u128> = try_join_all(per_asset).await?;
				Ok::<u128, ChainError>(balances.into_iter().sum())
			}
		});
		try_join_all(lookups).await
	}

	async fn get_fees(&self, asset: Option<&Asset>) -> Result<FeeData, ChainError> {
		let fee_asset = asset
			.and_then(|asset| self.network.supported_assets.get(&asset.name))
			.map(|supported| supported.fee_asset.clone())
			.unwrap_or_else(|| "uluna".to_string());

		// A stale or unreachable price feed fails the call; there is no
		// cached fallback.
		let prices = self.gas_prices.get_json("").await?;
		let fee = prices
			.get(&fee_asset)
			.and_then(|price| match price {
				Value::String(s) => s.parse::<f64>().ok(),
				Value::Number(n) => n.as_f64(),
				_ => None,
			})
			.ok_or_else(|| {
				ChainError::response(format!("No gas price for denom {}", fee_asset))
			})?;

		Ok(FeeData::Legacy { fee })
	}

	async fn send_raw_transaction(&self, _raw_tx: &str) -> Result<String, ChainError> {
		Err(ChainError::NotImplemented(
			"raw broadcast is not supported over the LCD client",
		))
	}

	async fn send_rpc_request(&self, _method: &str, _params: Value) -> Result<Value, ChainError> {
		Err(ChainError::NotImplemented(
			"the LCD API exposes no raw RPC surface",
		))
	}
}

/// Parses an LCD amount value (decimal string or number) into base units.
fn parse_amount(value: Option<&Value>) -> Result<u128, ChainError> {
	match value {
		Some(Value::String(s)) => s
			.parse()
			.map_err(|_| ChainError::response(format!("bad amount: {}", s))),
		Some(Value::Number(n)) => n
			.as_u64()
			.map(u128::from)
			.ok_or_else(|| ChainError::response(format!("bad amount: {}", n))),
		_ => Err(ChainError::response("missing amount")),
	}
}
