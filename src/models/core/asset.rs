//! Asset models for balance and fee queries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An asset a caller can query balances or fees for.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Asset {
	/// Asset ticker, e.g. `LUNA`, `UST`, `ETH`
	pub name: String,

	/// Token contract address for contract-backed assets; `None` for the
	/// chain's native coin
	#[serde(rename = "contractAddress", skip_serializing_if = "Option::is_none")]
	pub contract_address: Option<String>,
}

impl Asset {
	pub fn native(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			contract_address: None,
		}
	}

	pub fn token(name: impl Into<String>, contract_address: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			contract_address: Some(contract_address.into()),
		}
	}
}

/// Per-network declaration of a supported asset and its fee market.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SupportedAsset {
	/// On-chain denom, e.g. `uluna`
	pub asset: String,

	/// Denom fees are paid in for this asset
	#[serde(rename = "feeAsset")]
	pub fee_asset: String,

	#[serde(rename = "tokenAddress", skip_serializing_if = "Option::is_none")]
	pub token_address: Option<String>,

	/// Whether the fee for this asset comes from a stable-fee price feed
	#[serde(rename = "stableFee", default)]
	pub stable_fee: bool,
}

/// Asset table keyed by ticker.
pub type SupportedAssets = HashMap<String, SupportedAsset>;
