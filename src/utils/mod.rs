//! Utility modules for common functionality.
//!
//! - `hex`: encode/decode helpers for 0x-prefixed hex values
//! - `logging`: tracing subscriber setup

mod hex;
mod logging;

pub use hex::{
	block_tag, ensure_0x, hex_to_u128, hex_to_u64, pad_hex_start, strip_0x, u128_to_hex,
	u64_to_hex, MalformedHexError,
};
pub use logging::{setup_logging, setup_logging_with_writer};
