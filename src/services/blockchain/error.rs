//! Chain provider error types.
//!
//! Every public provider method either resolves with a fully populated
//! canonical record or fails with one of these kinds. Normalization
//! failures are never masked into default values; the only documented
//! absorption points (zero balance for nonexistent per-asset state, empty
//! contract address) live at their component boundaries, not here.

use thiserror::Error;

use crate::utils::MalformedHexError;

/// Errors surfaced by chain providers and normalizers.
#[derive(Debug, Error)]
pub enum ChainError {
	/// The node returned no block for the requested hash/number
	#[error("block not found: {0}")]
	BlockNotFound(String),

	/// The node returned no transaction for the requested hash
	#[error("transaction not found: {0}")]
	TransactionNotFound(String),

	/// The raw transaction payload was structurally invalid
	#[error("invalid transaction object: {0}")]
	InvalidTransaction(String),

	#[error(transparent)]
	MalformedHex(#[from] MalformedHexError),

	/// Balance cannot cover the requested amount plus fee reserve
	#[error("insufficient balance: have {balance}, need {required}")]
	InsufficientBalance { balance: u128, required: u128 },

	/// Node-level rejection of a broadcast
	#[error("broadcast rejected: {0}")]
	Broadcast(String),

	/// The destination has no contract code where one is required
	#[error("invalid destination address: {0}")]
	InvalidDestinationAddress(String),

	/// Capability gap of a chain implementation, not a bug
	#[error("method not implemented: {0}")]
	NotImplemented(&'static str),

	/// Transport-level failure (connection, HTTP, middleware)
	#[error("transport error: {0}")]
	Transport(#[from] anyhow::Error),

	/// Key derivation or signing failure
	#[error("signer error: {0}")]
	Signer(String),

	/// Structurally malformed node response
	#[error("unexpected response: {0}")]
	Response(String),
}

impl ChainError {
	/// Maps a serde failure on a raw transaction payload.
	pub fn invalid_transaction(err: impl std::fmt::Display) -> Self {
		Self::InvalidTransaction(err.to_string())
	}

	/// Maps a structurally unexpected node reply.
	pub fn response(msg: impl Into<String>) -> Self {
		Self::Response(msg.into())
	}
}
