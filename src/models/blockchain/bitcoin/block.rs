//! Bitcoin block wire shapes.

use serde::{Deserialize, Serialize};

/// A block as returned by `getblock` with verbosity 1.
///
/// `difficulty` is a float on the Bitcoin RPC API; the normalizer truncates
/// it into the canonical integer field.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BitcoinBlock {
	pub hash: String,

	pub height: u64,

	/// Absent for the genesis block
	#[serde(skip_serializing_if = "Option::is_none")]
	pub previousblockhash: Option<String>,

	/// Unix seconds
	pub time: u64,

	pub size: u64,

	pub difficulty: f64,

	pub nonce: u64,

	/// Transaction ids, always bare hashes at verbosity 1
	#[serde(default)]
	pub tx: Vec<String>,
}
