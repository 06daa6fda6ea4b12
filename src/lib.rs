//! A multi-chain blockchain client library.
//!
//! Provides uniform access to heterogeneous networks (EVM chains, Terra,
//! Bitcoin) behind a single [`services::blockchain::ChainClient`] interface.
//! Each chain client fetches data over its native protocol and normalizes
//! blocks and transactions into the canonical shapes in [`models`], so
//! callers can track inclusion, confirmations, fees and execution status
//! without chain-specific code.
//!
//! Wallet functionality in [`services::wallet`] derives keys locally from a
//! mnemonic and signs offline; the network is only consulted for nonces,
//! gas estimation and broadcasting.

pub mod models;
pub mod services;
pub mod utils;
