//! Terra LCD wire models.

mod block;
mod transaction;

pub use block::{TerraBlock, TerraBlockHeader, TerraBlockId, TerraBlockInner, TerraLastCommit};
pub use transaction::{
	Amount, TerraAuthInfo, TerraCoin, TerraCoins, TerraEvent, TerraEventAttribute, TerraFee,
	TerraMessage, TerraTx, TerraTxBody, TerraTxInfo, TerraTxLog,
};
