//! Terra LCD transaction wire shapes.
//!
//! These structs mirror the LCD `tx_response` payload. Quantities arrive as
//! decimal strings, integers occasionally as JSON numbers depending on the
//! LCD version, so every numeric field goes through [`Amount`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A numeric LCD field, encoded either as a decimal string or a number.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Amount {
	Number(u64),
	Text(String),
}

impl Amount {
	pub fn as_u128(&self) -> Option<u128> {
		match self {
			Amount::Number(n) => Some(*n as u128),
			Amount::Text(s) => s.parse().ok(),
		}
	}

	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Amount::Number(n) => Some(*n),
			Amount::Text(s) => s.parse().ok(),
		}
	}
}

impl Default for Amount {
	fn default() -> Self {
		Amount::Number(0)
	}
}

/// A denom/amount pair.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TerraCoin {
	pub denom: String,
	pub amount: Amount,
}

/// Coins attached to a message: the LCD emits an array, older gateways a
/// single object.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TerraCoins {
	Many(Vec<TerraCoin>),
	One(TerraCoin),
}

impl TerraCoins {
	pub fn iter(&self) -> impl Iterator<Item = &TerraCoin> {
		match self {
			TerraCoins::Many(coins) => coins.iter().collect::<Vec<_>>().into_iter(),
			TerraCoins::One(coin) => vec![coin].into_iter(),
		}
	}
}

/// The first-class fields of a transaction body message.
///
/// Only instantiate/execute contract messages carry the swap-relevant
/// fields; everything else deserializes with all options absent.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraMessage {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sender: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub contract: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub code_id: Option<Amount>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub init_coins: Option<TerraCoins>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub init_msg: Option<Value>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub execute_msg: Option<Value>,
}

/// One event attribute, e.g. `contract_address = terra1...`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TerraEventAttribute {
	pub key: String,
	pub value: String,
}

/// One ABCI event emitted by a message.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TerraEvent {
	#[serde(rename = "type")]
	pub kind: String,
	pub attributes: Vec<TerraEventAttribute>,
}

/// Per-message execution log.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraTxLog {
	#[serde(default)]
	pub msg_index: u32,

	#[serde(default)]
	pub events: Vec<TerraEvent>,
}

/// The declared transaction fee.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraFee {
	#[serde(default)]
	pub amount: Vec<TerraCoin>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<Amount>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraAuthInfo {
	#[serde(default)]
	pub fee: TerraFee,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraTxBody {
	#[serde(default)]
	pub messages: Vec<TerraMessage>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraTx {
	#[serde(default)]
	pub body: TerraTxBody,

	#[serde(default)]
	pub auth_info: TerraAuthInfo,
}

/// A transaction as returned by `GET /cosmos/tx/v1beta1/txs/{hash}`
/// (the `tx_response` object) or listed in a by-height query.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraTxInfo {
	pub height: Amount,

	pub txhash: String,

	#[serde(default)]
	pub raw_log: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub logs: Option<Vec<TerraTxLog>>,

	#[serde(default)]
	pub tx: TerraTx,
}
