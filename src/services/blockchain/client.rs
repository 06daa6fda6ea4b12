//! Core chain client interface.
//!
//! This trait is the uniform facade every chain-specific provider
//! implements. Each method either resolves with a fully populated canonical
//! record or fails with a [`ChainError`]; partial records are never
//! returned. Implementations that do not support an operation fail
//! immediately with [`ChainError::NotImplemented`] so callers can detect
//! capability gaps at call time.

use async_trait::async_trait;
use serde_json::Value;

use crate::{
	models::{Address, Asset, Block, FeeData, Transaction},
	services::blockchain::error::ChainError,
};

/// Uniform contract for chain providers, polymorphic over chain identity.
#[async_trait]
pub trait ChainClient: Send + Sync {
	/// Retrieves a block by hash.
	///
	/// # Arguments
	/// * `block_hash` - Chain-native block hash
	/// * `include_tx` - Whether to normalize the contained transactions
	///
	/// # Returns
	/// * `Result<Block, ChainError>` - Canonical block, or `BlockNotFound`
	async fn get_block_by_hash(
		&self,
		block_hash: &str,
		include_tx: bool,
	) -> Result<Block, ChainError>;

	/// Retrieves a block by number, same contract as [`Self::get_block_by_hash`].
	async fn get_block_by_number(
		&self,
		block_number: u64,
		include_tx: bool,
	) -> Result<Block, ChainError>;

	/// Current chain tip height.
	async fn get_block_height(&self) -> Result<u64, ChainError>;

	/// Retrieves a transaction by hash with status resolved per chain
	/// policy.
	///
	/// # Returns
	/// * `Result<Transaction, ChainError>` - Canonical transaction, or
	///   `TransactionNotFound`
	async fn get_transaction_by_hash(&self, tx_hash: &str) -> Result<Transaction, ChainError>;

	/// Sums balances across all supplied addresses, one entry per asset in
	/// declaration order.
	///
	/// Per-asset "does not exist" node errors resolve to zero rather than
	/// propagating; accounts with no prior activity on a contract are not
	/// an error condition.
	async fn get_balance(
		&self,
		addresses: &[Address],
		assets: &[Asset],
	) -> Result<Vec<u128>, ChainError>;

	/// Prevailing fee data; the provider decides the legacy-vs-EIP-1559
	/// shape. The asset argument only matters on chains with per-asset fee
	/// markets.
	async fn get_fees(&self, asset: Option<&Asset>) -> Result<FeeData, ChainError>;

	/// Broadcasts a signed raw transaction, returning its hash.
	///
	/// Node-level rejection propagates as `ChainError::Broadcast`.
	async fn send_raw_transaction(&self, raw_tx: &str) -> Result<String, ChainError>;

	/// Escape hatch for unmodeled node calls. Bypasses normalization
	/// entirely and is not part of the canonical contract.
	async fn send_rpc_request(&self, method: &str, params: Value) -> Result<Value, ChainError>;
}
