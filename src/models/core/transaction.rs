//! Canonical, chain-agnostic transaction record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle status of a transaction.
///
/// A transaction stays `Pending` until the block containing it is known and,
/// for chains with explicit receipts, until the receipt status is resolved.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum TransactionStatus {
	Pending,
	Success,
	Failed,
}

/// The normalized transaction shape every chain-specific provider produces.
///
/// Values are expressed in the chain's base unit (wei, uluna, satoshi).
/// The original chain-native payload (or its decoded parameter set) is
/// retained under `_raw` for chain-specific downstream use.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Transaction {
	/// Chain-native transaction hash, without a network-specific prefix
	pub hash: String,

	/// Transferred amount in the chain base unit
	pub value: u128,

	/// Number of the containing block, if included
	#[serde(rename = "blockNumber", skip_serializing_if = "Option::is_none")]
	pub block_number: Option<u64>,

	/// Hash of the containing block, if included
	#[serde(rename = "blockHash", skip_serializing_if = "Option::is_none")]
	pub block_hash: Option<String>,

	/// Block-depth distance to the chain tip; defined iff `block_number` is
	#[serde(skip_serializing_if = "Option::is_none")]
	pub confirmations: Option<u64>,

	/// Total fee paid, in the chain base unit
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fee: Option<u128>,

	/// Fee per gas/byte unit in display scale (gwei for EVM chains)
	#[serde(rename = "feePrice", skip_serializing_if = "Option::is_none")]
	pub fee_price: Option<f64>,

	pub status: TransactionStatus,

	/// Opaque chain-native payload (decoded swap secret, contract address,
	/// init code id, ...)
	#[serde(rename = "_raw")]
	pub raw: Value,
}

impl Transaction {
	/// Builds a minimal pending record around a raw payload.
	///
	/// Derived fields start unset; normalizers fill them in.
	pub fn pending(hash: impl Into<String>, value: u128, raw: Value) -> Self {
		Self {
			hash: hash.into(),
			value,
			block_number: None,
			block_hash: None,
			confirmations: None,
			fee: None,
			fee_price: None,
			status: TransactionStatus::Pending,
			raw,
		}
	}
}
