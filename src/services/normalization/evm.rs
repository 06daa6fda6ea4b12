//! EVM transaction/block normalization.
//!
//! Maps raw `eth_*` payloads into the canonical records, deriving
//! confirmations, fee and display fee price. Status resolution is a
//! two-stage state machine: normalization only decides `Pending` vs
//! included; the receipt lookup that resolves Success/Failed belongs to the
//! client so each stage can be exercised independently.

use serde_json::Value;

use crate::{
	models::{
		Block, EvmBlock, EvmBlockTransactions, EvmTransaction, EvmTransactionReceipt,
		Transaction, TransactionStatus,
	},
	services::{blockchain::ChainError, fee::GWEI},
	utils::{hex_to_u128, hex_to_u64, strip_0x},
};

/// Inclusion stage of a normalized transaction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InclusionStage {
	/// Not yet in a block (or depth unknown)
	Pending,
	/// In a block at the given depth; final status needs a receipt lookup
	Included { confirmations: u64 },
}

/// Decides the inclusion stage from the derived confirmation count.
pub fn inclusion_stage(tx: &Transaction) -> InclusionStage {
	match tx.confirmations {
		Some(confirmations) if confirmations > 0 => InclusionStage::Included { confirmations },
		_ => InclusionStage::Pending,
	}
}

/// Maps an execution receipt onto the final status.
///
/// Receipt status `0x1` resolves to `Success`, anything else to `Failed`.
pub fn status_from_receipt(receipt: &EvmTransactionReceipt) -> Result<TransactionStatus, ChainError> {
	let status = receipt
		.status
		.as_deref()
		.ok_or_else(|| ChainError::response("Receipt has no status field"))?;
	Ok(if hex_to_u64(status)? == 1 {
		TransactionStatus::Success
	} else {
		TransactionStatus::Failed
	})
}

/// Normalizes a raw EVM transaction.
///
/// # Arguments
/// * `tx` - Raw transaction as returned by the node
/// * `current_height` - Chain tip at fetch time; confirmations are derived
///   only when it is supplied and the transaction is included
pub fn normalize_transaction(
	tx: &EvmTransaction,
	current_height: Option<u64>,
) -> Result<Transaction, ChainError> {
	let raw = serde_json::to_value(tx).map_err(ChainError::invalid_transaction)?;

	let mut normalized = Transaction::pending(strip_0x(&tx.hash), hex_to_u128(&tx.value)?, raw);

	if let Some(block_number) = &tx.block_number {
		let block_number = hex_to_u64(block_number)?;
		normalized.block_number = Some(block_number);
		normalized.block_hash = tx.block_hash.as_deref().map(|h| strip_0x(h).to_string());
		if let Some(current_height) = current_height {
			normalized.confirmations = Some(current_height.saturating_sub(block_number) + 1);
		}
	}

	if let (Some(gas), Some(gas_price)) = (&tx.gas, &tx.gas_price) {
		let gas = hex_to_u128(gas)?;
		let gas_price = hex_to_u128(gas_price)?;
		normalized.fee = Some(gas * gas_price);
		normalized.fee_price = Some(gas_price as f64 / GWEI);
	}

	Ok(normalized)
}

/// Parses and normalizes a raw transaction delivered as loose JSON.
///
/// Fails with `InvalidTransaction` when the payload is not a structured
/// transaction record.
pub fn normalize_transaction_value(
	value: &Value,
	current_height: Option<u64>,
) -> Result<Transaction, ChainError> {
	if !value.is_object() {
		return Err(ChainError::InvalidTransaction(value.to_string()));
	}
	let tx: EvmTransaction =
		serde_json::from_value(value.clone()).map_err(ChainError::invalid_transaction)?;
	normalize_transaction(&tx, current_height)
}

/// Normalizes a raw EVM block.
///
/// With `include_tx`, embedded full transaction objects are normalized
/// using `current_height`; otherwise the canonical record omits
/// transactions and the raw hash list stays available under `_raw`.
pub fn normalize_block(
	block: &EvmBlock,
	include_tx: bool,
	current_height: Option<u64>,
) -> Result<Block, ChainError> {
	let raw = serde_json::to_value(block).map_err(|e| ChainError::response(e.to_string()))?;

	let transactions = if include_tx {
		match &block.transactions {
			EvmBlockTransactions::Full(txs) => Some(
				txs.iter()
					.map(|tx| normalize_transaction(tx, current_height))
					.collect::<Result<Vec<_>, _>>()?,
			),
			// Nothing to normalize when the node only handed back hashes
			EvmBlockTransactions::Hashes(_) => None,
		}
	} else {
		None
	};

	Ok(Block {
		number: hex_to_u64(&block.number)?,
		hash: strip_0x(&block.hash).to_string(),
		parent_hash: strip_0x(&block.parent_hash).to_string(),
		timestamp: hex_to_u64(&block.timestamp)?,
		size: hex_to_u64(&block.size)?,
		difficulty: Some(hex_to_u128(&block.difficulty)?),
		nonce: block.nonce.as_deref().map(hex_to_u64).transpose()?,
		transactions,
		raw,
	})
}
