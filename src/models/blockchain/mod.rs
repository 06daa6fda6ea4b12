//! Chain-specific wire models.
//!
//! Each submodule mirrors the raw JSON a network hands back (hex-encoded
//! Ethereum JSON-RPC objects, Terra LCD REST responses, Bitcoin RPC block
//! objects). Normalizers in `services::normalization` turn these into the
//! canonical records in `models::core`.

pub mod bitcoin;
pub mod evm;
pub mod terra;
