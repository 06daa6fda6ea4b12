//! EVM-compatible chain provider.
//!
//! Implements the uniform [`ChainClient`] facade on top of a JSON-RPC
//! transport, plus EVM-specific extensions (receipt lookup, gas
//! estimation, contract-code checks and dev-chain mining).

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use serde_json::{json, Value};
use tracing::instrument;

use crate::{
	models::{
		Address, Asset, Block, Eip1559Fee, EvmBlock, EvmNetwork, EvmTransaction,
		EvmTransactionReceipt, EvmTransactionRequest, FeeData, Transaction,
	},
	services::{
		blockchain::{
			client::ChainClient,
			error::ChainError,
			transports::{JsonRpcTransport, RpcTransport},
		},
		fee::{GWEI, SIMPLE_TRANSFER_GAS},
		normalization::evm::{
			inclusion_stage, normalize_block, normalize_transaction, status_from_receipt,
			InclusionStage,
		},
	},
	utils::{block_tag, ensure_0x, hex_to_u128, hex_to_u64, strip_0x, u64_to_hex},
};

const GAS_LIMIT_MULTIPLIER: f64 = 1.5;

/// Settle delay after falling back to `miner_start`, giving the node a
/// chance to mine.
const MINER_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Client implementation for Ethereum Virtual Machine compatible chains.
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync> {
	/// The underlying JSON-RPC transport
	transport: T,
}

impl<T: Send + Sync> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl EvmClient<JsonRpcTransport> {
	/// Creates a new EVM client for the given network.
	pub fn new(network: &EvmNetwork) -> Result<Self, ChainError> {
		let transport = JsonRpcTransport::new(&network.rpc_url, None, None)?;
		Ok(Self::new_with_transport(transport))
	}
}

/// Extended functionality specific to EVM-compatible chains
#[async_trait]
pub trait EvmClientTrait {
	/// Retrieves a transaction receipt by its hash.
	///
	/// # Returns
	/// * `Result<EvmTransactionReceipt, ChainError>` - Receipt, or
	///   `TransactionNotFound` when the node knows no such receipt
	async fn get_transaction_receipt(
		&self,
		tx_hash: &str,
	) -> Result<EvmTransactionReceipt, ChainError>;

	/// Sender nonce at the given block tag (`"pending"` includes queued
	/// transactions).
	async fn get_transaction_count(
		&self,
		address: &str,
		block: &str,
	) -> Result<u64, ChainError>;

	/// Estimates gas for a request, applying the safety multiplier.
	///
	/// The raw estimate is multiplied by 1.5 and rounded up, except when it
	/// already equals the canonical simple-transfer cost (21000), which
	/// passes through unmodified.
	async fn estimate_gas(&self, tx: &EvmTransactionRequest) -> Result<u64, ChainError>;

	/// Current legacy gas price in gwei.
	async fn get_gas_price(&self) -> Result<f64, ChainError>;

	/// Contract code at an address, as a bare hex string.
	async fn get_code(&self, address: &str, block: Option<u64>) -> Result<String, ChainError>;

	/// Fails with `InvalidDestinationAddress` when no contract code exists
	/// at the address.
	async fn assert_contract_exists(&self, address: &str) -> Result<(), ChainError>;

	/// Executes a read-only contract call against the latest block.
	async fn call_contract(&self, tx: &EvmTransactionRequest) -> Result<String, ChainError>;

	/// Mines blocks on a dev/test chain.
	///
	/// Tries `evm_mine` first and falls back once to the geth-style
	/// miner_start/miner_stop pair with a fixed settle delay, because some
	/// node implementations lack the primary method.
	async fn generate_block(&self, number_of_blocks: u64) -> Result<(), ChainError>;
}

#[async_trait]
impl<T: Send + Sync + RpcTransport> EvmClientTrait for EvmClient<T> {
	async fn get_transaction_receipt(
		&self,
		tx_hash: &str,
	) -> Result<EvmTransactionReceipt, ChainError> {
		let result = self
			.transport
			.call("eth_getTransactionReceipt", json!([ensure_0x(tx_hash)]))
			.await?;

		if result.is_null() {
			return Err(ChainError::TransactionNotFound(tx_hash.to_string()));
		}

		serde_json::from_value(result).map_err(|e| ChainError::response(e.to_string()))
	}

	async fn get_transaction_count(
		&self,
		address: &str,
		block: &str,
	) -> Result<u64, ChainError> {
		let result = self
			.transport
			.call(
				"eth_getTransactionCount",
				json!([ensure_0x(address), block]),
			)
			.await?;
		Ok(hex_to_u64(result_str(&result, "eth_getTransactionCount")?)?)
	}

	async fn estimate_gas(&self, tx: &EvmTransactionRequest) -> Result<u64, ChainError> {
		let result = self.transport.call("eth_estimateGas", json!([tx])).await?;
		let gas = hex_to_u64(result_str(&result, "eth_estimateGas")?)?;
		if gas == SIMPLE_TRANSFER_GAS {
			return Ok(gas);
		}
		Ok((gas as f64 * GAS_LIMIT_MULTIPLIER).ceil() as u64)
	}

	async fn get_gas_price(&self) -> Result<f64, ChainError> {
		let result = self.transport.call("eth_gasPrice", json!([])).await?;
		let wei = hex_to_u128(result_str(&result, "eth_gasPrice")?)?;
		Ok(wei as f64 / GWEI)
	}

	async fn get_code(&self, address: &str, block: Option<u64>) -> Result<String, ChainError> {
		let result = self
			.transport
			.call("eth_getCode", json!([ensure_0x(address), block_tag(block)]))
			.await?;
		Ok(strip_0x(result_str(&result, "eth_getCode")?).to_string())
	}

	async fn assert_contract_exists(&self, address: &str) -> Result<(), ChainError> {
		let code = self.get_code(address, None).await?;
		if code.is_empty() {
			return Err(ChainError::InvalidDestinationAddress(format!(
				"Contract does not exist at given address: {}",
				address
			)));
		}
		Ok(())
	}

	async fn call_contract(&self, tx: &EvmTransactionRequest) -> Result<String, ChainError> {
		let result = self
			.transport
			.call("eth_call", json!([tx, "latest"]))
			.await?;
		Ok(result_str(&result, "eth_call")?.to_string())
	}

	async fn generate_block(&self, number_of_blocks: u64) -> Result<(), ChainError> {
		if number_of_blocks > 1 {
			return Err(ChainError::NotImplemented(
				"EVM block generation is limited to 1 block at a time",
			));
		}
		if self.transport.call("evm_mine", json!([])).await.is_ok() {
			return Ok(());
		}
		// Geth-style fallback
		self.transport.call("miner_start", json!([])).await?;
		tokio::time::sleep(MINER_SETTLE_DELAY).await;
		self.transport.call("miner_stop", json!([])).await?;
		Ok(())
	}
}

#[async_trait]
impl<T: Send + Sync + RpcTransport> ChainClient for EvmClient<T> {
	#[instrument(skip(self))]
	async fn get_block_by_hash(
		&self,
		block_hash: &str,
		include_tx: bool,
	) -> Result<Block, ChainError> {
		let result = self
			.transport
			.call(
				"eth_getBlockByHash",
				json!([ensure_0x(block_hash), include_tx]),
			)
			.await?;

		if result.is_null() {
			return Err(ChainError::BlockNotFound(block_hash.to_string()));
		}

		let block: EvmBlock =
			serde_json::from_value(result).map_err(|e| ChainError::response(e.to_string()))?;
		let height = hex_to_u64(&block.number)?;
		normalize_block(&block, include_tx, Some(height))
	}

	#[instrument(skip(self))]
	async fn get_block_by_number(
		&self,
		block_number: u64,
		include_tx: bool,
	) -> Result<Block, ChainError> {
		let result = self
			.transport
			.call(
				"eth_getBlockByNumber",
				json!([u64_to_hex(block_number), include_tx]),
			)
			.await?;

		if result.is_null() {
			return Err(ChainError::BlockNotFound(block_number.to_string()));
		}

		let block: EvmBlock =
			serde_json::from_value(result).map_err(|e| ChainError::response(e.to_string()))?;
		normalize_block(&block, include_tx, Some(block_number))
	}

	async fn get_block_height(&self) -> Result<u64, ChainError> {
		let result = self.transport.call("eth_blockNumber", json!([])).await?;
		Ok(hex_to_u64(result_str(&result, "eth_blockNumber")?)?)
	}

	#[instrument(skip(self))]
	async fn get_transaction_by_hash(&self, tx_hash: &str) -> Result<Transaction, ChainError> {
		let result = self
			.transport
			.call("eth_getTransactionByHash", json!([ensure_0x(tx_hash)]))
			.await?;

		if result.is_null() {
			return Err(ChainError::TransactionNotFound(tx_hash.to_string()));
		}

		let raw: EvmTransaction =
			serde_json::from_value(result).map_err(ChainError::invalid_transaction)?;
		let current_height = self.get_block_height().await?;
		let mut tx = normalize_transaction(&raw, Some(current_height))?;

		// Second stage: resolve the final status through the receipt once
		// the transaction is included.
		if let InclusionStage::Included { .. } = inclusion_stage(&tx) {
			let receipt = self.get_transaction_receipt(tx_hash).await?;
			tx.status = status_from_receipt(&receipt)?;
		}

		Ok(tx)
	}

	#[instrument(skip(self, addresses, assets))]
	async fn get_balance(
		&self,
		addresses: &[Address],
		assets: &[Asset],
	) -> Result<Vec<u128>, ChainError> {
		let mut totals = Vec::with_capacity(assets.len());
		for asset in assets {
			if asset.contract_address.is_some() {
				return Err(ChainError::NotImplemented(
					"token balance queries are not supported on EVM chains",
				));
			}
			let lookups = addresses.iter().map(|address| {
				let address = ensure_0x(&address.address);
				async move {
					let result = self
						.transport
						.call("eth_getBalance", json!([address, "latest"]))
						.await?;
					hex_to_u128(result_str(&result, "eth_getBalance")?)
						.map_err(ChainError::from)
				}
			});
			let balances: Vec<u128> = try_join_all(lookups).await?;
			totals.push(balances.into_iter().sum());
		}
		Ok(totals)
	}

	async fn get_fees(&self, _asset: Option<&Asset>) -> Result<FeeData, ChainError> {
		let result = self
			.transport
			.call("eth_getBlockByNumber", json!(["latest", false]))
			.await?;

		let base_fee = result
			.get("baseFeePerGas")
			.and_then(Value::as_str)
			.map(hex_to_u128)
			.transpose()?;

		match base_fee {
			Some(base_fee) => {
				let result = self
					.transport
					.call("eth_maxPriorityFeePerGas", json!([]))
					.await?;
				let tip = hex_to_u128(result_str(&result, "eth_maxPriorityFeePerGas")?)?;
				Ok(FeeData::Eip1559(Eip1559Fee {
					max_fee_per_gas: (2 * base_fee + tip) as f64 / GWEI,
					max_priority_fee_per_gas: tip as f64 / GWEI,
				}))
			}
			// Pre-London chain: legacy scalar
			None => Ok(FeeData::Legacy {
				fee: self.get_gas_price().await?,
			}),
		}
	}

	#[instrument(skip(self, raw_tx))]
	async fn send_raw_transaction(&self, raw_tx: &str) -> Result<String, ChainError> {
		let result = self
			.transport
			.call("eth_sendRawTransaction", json!([ensure_0x(raw_tx)]))
			.await
			.map_err(|e| ChainError::Broadcast(e.to_string()))?;
		Ok(result_str(&result, "eth_sendRawTransaction")?.to_string())
	}

	async fn send_rpc_request(&self, method: &str, params: Value) -> Result<Value, ChainError> {
		Ok(self.transport.call(method, params).await?)
	}
}

/// Extracts a string result from a JSON-RPC reply.
fn result_str<'a>(result: &'a Value, method: &str) -> Result<&'a str, ChainError> {
	result
		.as_str()
		.ok_or_else(|| ChainError::response(format!("Non-string result for {}", method)))
}
