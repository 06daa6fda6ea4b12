//! Transaction and block normalization.
//!
//! The centerpiece of the SDK: each submodule maps one chain's raw wire
//! representation into the canonical `Transaction`/`Block` records,
//! deriving the fields that are not directly present in the source payload
//! (confirmations, fees, status, decoded swap parameters). Raw provider
//! responses are never mutated; normalization always produces a new record
//! with the original retained under `_raw`.

pub mod bitcoin;
pub mod evm;
pub mod terra;
