//! Canonical, chain-agnostic block record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::core::transaction::Transaction;

/// The normalized block shape every chain-specific provider produces.
///
/// `transactions` is populated only when the caller requested transaction
/// inclusion; otherwise the raw hash list stays available under `_raw`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Block {
	pub number: u64,
	pub hash: String,

	#[serde(rename = "parentHash")]
	pub parent_hash: String,

	/// Block time in Unix seconds
	pub timestamp: u64,

	pub size: u64,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub difficulty: Option<u128>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub nonce: Option<u64>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub transactions: Option<Vec<Transaction>>,

	/// Opaque chain-native payload
	#[serde(rename = "_raw")]
	pub raw: Value,
}
