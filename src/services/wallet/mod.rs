//! Wallet services for key management, signing and transaction dispatch.

mod evm;

pub use evm::EvmWallet;
