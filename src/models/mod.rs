//! Domain models and data structures for the multi-chain client.
//!
//! - `blockchain`: raw wire shapes per platform (EVM, Terra, Bitcoin)
//! - `core`: canonical chain-agnostic records and shared request types

mod blockchain;
mod core;

// Re-export raw wire types
pub use blockchain::bitcoin::BitcoinBlock;

pub use blockchain::evm::{
	EvmBlock, EvmBlockTransactions, EvmTransaction, EvmTransactionReceipt, EvmTransactionRequest,
};

pub use blockchain::terra::{
	Amount, TerraBlock, TerraCoin, TerraCoins, TerraEvent, TerraEventAttribute, TerraMessage,
	TerraTx, TerraTxInfo, TerraTxLog,
};

// Re-export canonical types
pub use core::{
	Address, Asset, Block, Eip1559Fee, FeeData, FeePreference, SendOptions, SupportedAsset,
	SupportedAssets, Transaction, TransactionStatus, UnsignedTransaction, BitcoinNetwork,
	EvmNetwork, TerraNetwork, TERRA_MAINNET, TERRA_TESTNET,
};
