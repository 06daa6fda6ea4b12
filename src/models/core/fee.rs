//! Fee models and outbound transaction options.

use serde::{Deserialize, Serialize};

/// EIP-1559 style fee, in gwei-scale units.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq)]
pub struct Eip1559Fee {
	#[serde(rename = "maxFeePerGas")]
	pub max_fee_per_gas: f64,

	#[serde(rename = "maxPriorityFeePerGas")]
	pub max_priority_fee_per_gas: f64,
}

/// Prevailing fee data returned by `get_fees`.
///
/// The provider, not the caller, decides which shape applies: legacy
/// price-per-unit chains return `Legacy`, EIP-1559 chains return `Eip1559`.
#[derive(Debug, Copy, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FeeData {
	Eip1559(Eip1559Fee),
	Legacy { fee: f64 },
}

/// Caller-supplied fee preference on an outbound transaction.
///
/// A bare number is treated as a legacy price-per-unit in gwei-scale; a
/// structured fee passes max fee / priority fee through verbatim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FeePreference {
	PerUnit(f64),
	Eip1559(Eip1559Fee),
}

impl From<FeeData> for FeePreference {
	fn from(fee: FeeData) -> Self {
		match fee {
			FeeData::Legacy { fee } => FeePreference::PerUnit(fee),
			FeeData::Eip1559(fee) => FeePreference::Eip1559(fee),
		}
	}
}

/// Options for building an outbound transfer.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
	/// Destination address; `None` for contract deployment
	pub to: Option<String>,

	/// Amount in the chain base unit
	pub value: u128,

	/// Call data as a bare hex string
	pub data: Option<String>,

	/// Fee preference; `None` lets the provider pick the prevailing fee
	pub fee: Option<FeePreference>,
}

/// A fully resolved unsigned transaction, ready for request building.
#[derive(Debug, Clone)]
pub struct UnsignedTransaction {
	pub from: String,
	pub to: Option<String>,
	pub value: u128,
	pub data: Option<String>,
	pub nonce: Option<u64>,
	pub fee: Option<FeePreference>,
}
