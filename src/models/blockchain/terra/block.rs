//! Terra LCD block wire shapes.

use serde::{Deserialize, Serialize};

use crate::models::blockchain::terra::transaction::Amount;

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraBlockId {
	pub hash: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraBlockHeader {
	pub height: Amount,

	/// ISO-8601 close time, e.g. `2022-01-01T00:00:00.000Z`
	pub time: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraLastCommit {
	pub block_id: TerraBlockId,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraBlockInner {
	pub header: TerraBlockHeader,
	pub last_commit: TerraLastCommit,
}

/// A block as returned by `GET /blocks/{height}` / `GET /blocks/latest`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TerraBlock {
	pub block_id: TerraBlockId,
	pub block: TerraBlockInner,
}
