//! Bitcoin node chain provider.
//!
//! A deliberately narrow implementation: block lookups, chain height and
//! raw broadcast. Everything else is a declared capability gap that fails
//! fast with `NotImplemented` so callers can detect it at call time.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use crate::{
	models::{Address, Asset, BitcoinBlock, BitcoinNetwork, Block, FeeData, Transaction},
	services::{
		blockchain::{
			client::ChainClient,
			error::ChainError,
			transports::{JsonRpcTransport, RpcTransport},
		},
		normalization::bitcoin::normalize_block,
	},
};

/// Client implementation for Bitcoin nodes.
#[derive(Clone)]
pub struct BitcoinClient<T: Send + Sync> {
	transport: T,
}

impl<T: Send + Sync> BitcoinClient<T> {
	/// Creates a new Bitcoin client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl BitcoinClient<JsonRpcTransport> {
	/// Creates a new Bitcoin client for the given network.
	///
	/// # Arguments
	/// * `network` - Node connection details
	/// * `username`/`password` - RPC basic-auth credentials
	pub fn new(
		network: &BitcoinNetwork,
		username: Option<String>,
		password: Option<String>,
	) -> Result<Self, ChainError> {
		let transport = JsonRpcTransport::new(&network.rpc_url, username, password)?;
		Ok(Self::new_with_transport(transport))
	}
}

impl<T: Send + Sync + RpcTransport> BitcoinClient<T> {
	async fn fetch_block(&self, block_hash: &str) -> Result<Block, ChainError> {
		let result = self
			.transport
			.call("getblock", json!([block_hash]))
			.await
			.map_err(|e| match e.to_string() {
				// bitcoind signals an unknown hash with RPC error -5
				msg if msg.contains("Block not found") => {
					ChainError::BlockNotFound(block_hash.to_string())
				}
				_ => ChainError::Transport(e),
			})?;

		if result.is_null() {
			return Err(ChainError::BlockNotFound(block_hash.to_string()));
		}

		let raw: BitcoinBlock =
			serde_json::from_value(result).map_err(|e| ChainError::response(e.to_string()))?;
		normalize_block(&raw)
	}
}

#[async_trait]
impl<T: Send + Sync + RpcTransport> ChainClient for BitcoinClient<T> {
	#[instrument(skip(self))]
	async fn get_block_by_hash(
		&self,
		block_hash: &str,
		include_tx: bool,
	) -> Result<Block, ChainError> {
		if include_tx {
			return Err(ChainError::NotImplemented(
				"Bitcoin transaction decoding is out of scope",
			));
		}
		self.fetch_block(block_hash).await
	}

	#[instrument(skip(self))]
	async fn get_block_by_number(
		&self,
		block_number: u64,
		include_tx: bool,
	) -> Result<Block, ChainError> {
		if include_tx {
			return Err(ChainError::NotImplemented(
				"Bitcoin transaction decoding is out of scope",
			));
		}
		let result = self
			.transport
			.call("getblockhash", json!([block_number]))
			.await
			.map_err(|e| match e.to_string() {
				msg if msg.contains("out of range") => {
					ChainError::BlockNotFound(block_number.to_string())
				}
				_ => ChainError::Transport(e),
			})?;
		let block_hash = result
			.as_str()
			.ok_or_else(|| ChainError::response("Non-string result for getblockhash"))?;
		self.fetch_block(block_hash).await
	}

	async fn get_block_height(&self) -> Result<u64, ChainError> {
		let result = self.transport.call("getblockcount", json!([])).await?;
		result
			.as_u64()
			.ok_or_else(|| ChainError::response("Non-numeric result for getblockcount"))
	}

	async fn get_transaction_by_hash(&self, _tx_hash: &str) -> Result<Transaction, ChainError> {
		Err(ChainError::NotImplemented(
			"Bitcoin transaction lookup is out of scope",
		))
	}

	async fn get_balance(
		&self,
		_addresses: &[Address],
		_assets: &[Asset],
	) -> Result<Vec<u128>, ChainError> {
		Err(ChainError::NotImplemented(
			"Bitcoin balance queries are out of scope",
		))
	}

	async fn get_fees(&self, _asset: Option<&Asset>) -> Result<FeeData, ChainError> {
		Err(ChainError::NotImplemented(
			"Bitcoin fee estimation is out of scope",
		))
	}

	#[instrument(skip(self, raw_tx))]
	async fn send_raw_transaction(&self, raw_tx: &str) -> Result<String, ChainError> {
		let result = self
			.transport
			.call("sendrawtransaction", json!([raw_tx]))
			.await
			.map_err(|e| ChainError::Broadcast(e.to_string()))?;
		result
			.as_str()
			.map(str::to_string)
			.ok_or_else(|| ChainError::response("Non-string result for sendrawtransaction"))
	}

	async fn send_rpc_request(&self, method: &str, params: Value) -> Result<Value, ChainError> {
		Ok(self.transport.call(method, params).await?)
	}
}
