//! Helpers for 0x-prefixed hex integers and byte strings.
//!
//! Every chain-native hex field that crosses the normalization boundary goes
//! through these functions, so malformed node data surfaces as
//! [`MalformedHexError`] instead of silently decoding to zero.

use thiserror::Error;

/// A hex string that could not be parsed as base-16 content.
#[derive(Debug, Error)]
#[error("malformed hex string: {0:?}")]
pub struct MalformedHexError(pub String);

/// Adds the `0x` prefix iff absent. Idempotent.
pub fn ensure_0x(s: &str) -> String {
	if s.starts_with("0x") {
		s.to_string()
	} else {
		format!("0x{}", s)
	}
}

/// Removes the `0x` prefix iff present. Idempotent.
pub fn strip_0x(s: &str) -> &str {
	s.strip_prefix("0x").unwrap_or(s)
}

/// Parses a (possibly 0x-prefixed) hex string into a `u64`.
pub fn hex_to_u64(s: &str) -> Result<u64, MalformedHexError> {
	let digits = strip_0x(s);
	u64::from_str_radix(digits, 16).map_err(|_| MalformedHexError(s.to_string()))
}

/// Parses a (possibly 0x-prefixed) hex string into a `u128`.
///
/// Used for value/fee fields, which exceed `u64` range on wei-scale chains.
pub fn hex_to_u128(s: &str) -> Result<u128, MalformedHexError> {
	let digits = strip_0x(s);
	u128::from_str_radix(digits, 16).map_err(|_| MalformedHexError(s.to_string()))
}

/// Encodes a `u64` as canonical lowercase hex with the `0x` prefix.
///
/// No leading zeros beyond the single `0` for zero itself.
pub fn u64_to_hex(n: u64) -> String {
	format!("0x{:x}", n)
}

/// Encodes a `u128` as canonical lowercase hex with the `0x` prefix.
pub fn u128_to_hex(n: u128) -> String {
	format!("0x{:x}", n)
}

/// Left-pads a bare hex string with a zero to an even number of digits.
///
/// Some nodes reject odd-length hex quantities in block tags.
pub fn pad_hex_start(s: &str) -> String {
	if s.len() % 2 == 0 {
		s.to_string()
	} else {
		format!("0{}", s)
	}
}

/// Formats a block number as a block tag parameter, defaulting to `"latest"`.
pub fn block_tag(block: Option<u64>) -> String {
	match block {
		Some(number) => ensure_0x(&pad_hex_start(&format!("{:x}", number))),
		None => "latest".to_string(),
	}
}
