//! Bitcoin block normalization.
//!
//! Bitcoin has no status or receipt concept in scope; only blocks are
//! normalized, with the transaction id list retained under `_raw`.

use crate::{
	models::{BitcoinBlock, Block},
	services::blockchain::ChainError,
};

/// Normalizes a verbose `getblock` payload.
pub fn normalize_block(block: &BitcoinBlock) -> Result<Block, ChainError> {
	let raw = serde_json::to_value(block).map_err(|e| ChainError::response(e.to_string()))?;

	Ok(Block {
		number: block.height,
		hash: block.hash.clone(),
		parent_hash: block.previousblockhash.clone().unwrap_or_default(),
		timestamp: block.time,
		size: block.size,
		difficulty: Some(block.difficulty as u128),
		nonce: Some(block.nonce),
		transactions: None,
		raw,
	})
}
