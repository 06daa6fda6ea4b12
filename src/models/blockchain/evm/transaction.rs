//! EVM transaction wire shapes.
//!
//! These structs mirror the JSON-RPC representation exactly: quantities are
//! 0x-prefixed hex strings and optionality follows what nodes actually
//! return (pending transactions have no block fields, EIP-1559 transactions
//! have no `gasPrice` until inclusion, and so on).

use serde::{Deserialize, Serialize};

/// A transaction as returned by `eth_getTransactionByHash` or embedded in a
/// block fetched with full transaction objects.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransaction {
	pub hash: String,

	pub value: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub block_number: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub block_hash: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub from: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub to: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_price: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_fee_per_gas: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_priority_fee_per_gas: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub nonce: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub input: Option<String>,
}

/// A transaction receipt as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransactionReceipt {
	pub transaction_hash: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub block_number: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub block_hash: Option<String>,

	/// Post-Byzantium execution status: `0x1` success, `0x0` failure
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub contract_address: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_used: Option<String>,
}

/// An outbound transaction request, as accepted by `eth_sendTransaction`,
/// `eth_estimateGas` and `eth_call`.
///
/// All quantity fields are already hex encoded; absent fields are omitted
/// from the serialized object entirely.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransactionRequest {
	pub from: String,

	pub value: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub to: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub nonce: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_price: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_fee_per_gas: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_priority_fee_per_gas: Option<String>,
}

impl EvmTransactionRequest {
	/// Converts a request into the transaction shape a broadcast produces,
	/// attaching the hash returned by the node.
	pub fn into_transaction(self, hash: impl Into<String>) -> EvmTransaction {
		EvmTransaction {
			hash: hash.into(),
			value: self.value,
			block_number: None,
			block_hash: None,
			from: Some(self.from),
			to: self.to,
			gas: self.gas,
			gas_price: self.gas_price,
			max_fee_per_gas: self.max_fee_per_gas,
			max_priority_fee_per_gas: self.max_priority_fee_per_gas,
			nonce: self.nonce,
			input: self.data,
		}
	}
}
