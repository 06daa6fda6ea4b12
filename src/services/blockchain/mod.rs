//! Chain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for interacting with
//! different blockchain networks. Includes:
//!
//! - Generic chain client trait
//! - Chain specific clients (EVM, Terra, Bitcoin)
//! - Network transport implementations
//! - Error handling for chain operations

mod client;
mod clients;
mod error;
mod transports;

pub use client::ChainClient;
pub use clients::{BitcoinClient, EvmClient, EvmClientTrait, TerraClient};
pub use error::ChainError;
pub use transports::{JsonRpcTransport, RestClient, RestTransport, RpcTransport};
