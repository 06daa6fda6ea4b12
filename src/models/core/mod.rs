//! Core domain models for the multi-chain client.
//!
//! This module contains the canonical, chain-agnostic records every
//! provider must produce, plus the shared request/configuration types:
//! - Transaction/Block: the normalized boundary contract
//! - Address, Asset: query inputs
//! - FeeData and friends: fee shapes and outbound transaction options
//! - Networks: per-chain connection details and constant tables

mod address;
mod asset;
mod block;
mod fee;
mod network;
mod transaction;

pub use address::Address;
pub use asset::{Asset, SupportedAsset, SupportedAssets};
pub use block::Block;
pub use fee::{Eip1559Fee, FeeData, FeePreference, SendOptions, UnsignedTransaction};
pub use network::{BitcoinNetwork, EvmNetwork, TerraNetwork, TERRA_MAINNET, TERRA_TESTNET};
pub use transaction::{Transaction, TransactionStatus};
