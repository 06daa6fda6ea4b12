//! Terra transaction/block normalization.
//!
//! LCD payloads carry nested message/log structures; normalization decodes
//! the first body message, resolves the transfer value against the
//! network's supported denoms, lifts a claim secret when present and
//! recovers the contract address from event logs. Confirmation counts are
//! capped at a fixed ceiling to avoid unbounded values on REST polling.

use serde_json::{json, Map, Value};

use crate::{
	models::{
		Block, SupportedAssets, TerraBlock, TerraMessage, TerraTxInfo, TerraTxLog,
		Transaction, TransactionStatus,
	},
	services::blockchain::ChainError,
};

/// Confirmation ceiling applied to REST-polled transactions.
pub const MAX_CONFIRMATIONS: u64 = 10;

/// Substring in `raw_log` marking a failed contract execution.
const EXECUTION_FAILURE_MARKER: &str = "failed to execute message";

/// Picks the transfer value out of a message's `init_coins`, matching any
/// of the network's supported denoms.
fn message_value(message: &TerraMessage, assets: &SupportedAssets) -> u128 {
	let denoms: Vec<&str> = assets.values().map(|a| a.asset.as_str()).collect();

	message
		.init_coins
		.as_ref()
		.and_then(|coins| {
			coins
				.iter()
				.find(|coin| denoms.contains(&coin.denom.as_str()))
		})
		.and_then(|coin| coin.amount.as_u128())
		.unwrap_or(0)
}

/// Recovers the executed contract address from the first message's events.
///
/// Absence of a match yields an empty string, never an error; some message
/// types legitimately have no contract address.
fn contract_address(logs: Option<&[TerraTxLog]>) -> String {
	logs.and_then(|logs| logs.first())
		.map(|log| {
			log.events
				.iter()
				.filter(|event| event.kind == "execute_contract" || event.kind == "wasm")
				.flat_map(|event| event.attributes.iter())
				.find(|attribute| attribute.key == "contract_address")
				.map(|attribute| attribute.value.clone())
				.unwrap_or_default()
		})
		.unwrap_or_default()
}

/// Decodes the swap-relevant parameters of a message into the `_raw` slot.
///
/// `init_msg` parameters come through as-is; an `execute_msg` lands under
/// `method`, and a claim-type execute additionally lifts the embedded
/// `secret` for swap-matching convenience.
fn decode_tx_params(message: &TerraMessage) -> Map<String, Value> {
	let mut params = match &message.init_msg {
		Some(Value::Object(init)) => init.clone(),
		_ => Map::new(),
	};

	if let Some(execute_msg) = &message.execute_msg {
		params.insert("method".to_string(), execute_msg.clone());

		if let Some(secret) = execute_msg
			.get("claim")
			.and_then(|claim| claim.get("secret"))
			.and_then(Value::as_str)
		{
			params.insert("secret".to_string(), json!(secret));
		}
	}

	params
}

/// Normalizes an LCD transaction.
///
/// # Arguments
/// * `tx` - LCD `tx_response` payload
/// * `assets` - Supported asset table of the network
/// * `current_block` - Chain tip at fetch time; confirmations are derived
///   only when it is supplied, capped at [`MAX_CONFIRMATIONS`]
pub fn normalize_transaction(
	tx: &TerraTxInfo,
	assets: &SupportedAssets,
	current_block: Option<u64>,
) -> Result<Transaction, ChainError> {
	let height = tx
		.height
		.as_u64()
		.ok_or_else(|| ChainError::InvalidTransaction(format!("bad height: {:?}", tx.height)))?;

	let message = tx.tx.body.messages.first();

	let value = message.map(|m| message_value(m, assets)).unwrap_or(0);

	let fee = tx
		.tx
		.auth_info
		.fee
		.amount
		.first()
		.and_then(|coin| coin.amount.as_u128());

	let status = if tx.raw_log.contains(EXECUTION_FAILURE_MARKER) {
		TransactionStatus::Failed
	} else {
		TransactionStatus::Success
	};

	let mut raw = message.map(decode_tx_params).unwrap_or_default();
	raw.insert("contractAddress".to_string(), json!(contract_address(tx.logs.as_deref())));
	raw.insert(
		"codeId".to_string(),
		json!(message.and_then(|m| m.code_id.as_ref()).and_then(|id| id.as_u64())),
	);

	Ok(Transaction {
		hash: tx.txhash.clone(),
		value,
		block_number: Some(height),
		block_hash: None,
		confirmations: current_block
			.map(|current| current.saturating_sub(height).min(MAX_CONFIRMATIONS)),
		fee,
		fee_price: None,
		status,
		raw: Value::Object(raw),
	})
}

/// Normalizes an LCD block.
///
/// `transactions` is attached by the caller when inclusion was requested;
/// the LCD lists them through a separate by-height query.
pub fn normalize_block(block: &TerraBlock) -> Result<Block, ChainError> {
	let raw = serde_json::to_value(block).map_err(|e| ChainError::response(e.to_string()))?;

	let height = block
		.block
		.header
		.height
		.as_u64()
		.ok_or_else(|| ChainError::response("bad block height"))?;

	let timestamp = chrono::DateTime::parse_from_rfc3339(&block.block.header.time)
		.map_err(|e| ChainError::response(format!("bad block time: {}", e)))?
		.timestamp() as u64;

	Ok(Block {
		number: height,
		hash: block.block_id.hash.clone(),
		parent_hash: block.block.last_commit.block_id.hash.clone(),
		timestamp,
		// LCD blocks carry no byte size
		size: height,
		difficulty: None,
		nonce: None,
		transactions: None,
		raw,
	})
}
