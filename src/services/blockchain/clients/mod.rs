//! Chain-specific client implementations.

mod bitcoin;
mod evm;
mod terra;

pub use bitcoin::BitcoinClient;
pub use evm::{EvmClient, EvmClientTrait};
pub use terra::TerraClient;
