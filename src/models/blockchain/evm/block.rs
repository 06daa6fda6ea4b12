//! EVM block wire shapes.

use serde::{Deserialize, Serialize};

use crate::models::blockchain::evm::transaction::EvmTransaction;

/// Transactions embedded in a block response.
///
/// Nodes return bare hashes or full objects depending on the
/// `eth_getBlockBy*` include flag; the variant is decided by the payload
/// shape alone.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum EvmBlockTransactions {
	Hashes(Vec<String>),
	Full(Vec<EvmTransaction>),
}

impl Default for EvmBlockTransactions {
	fn default() -> Self {
		Self::Hashes(Vec::new())
	}
}

/// A block as returned by `eth_getBlockByHash` / `eth_getBlockByNumber`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvmBlock {
	pub number: String,

	pub hash: String,

	pub parent_hash: String,

	pub timestamp: String,

	pub size: String,

	pub difficulty: String,

	/// Absent on some proof-of-authority dev chains
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nonce: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub base_fee_per_gas: Option<String>,

	#[serde(default)]
	pub transactions: EvmBlockTransactions,
}
