//! Address model shared by chain and wallet providers.

use serde::{Deserialize, Serialize};

/// A canonical address, optionally annotated with its derivation metadata.
///
/// The string form carries no chain-specific prefix; providers add/strip
/// prefixes at the wire boundary.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Address {
	pub address: String,

	#[serde(rename = "derivationPath", skip_serializing_if = "Option::is_none")]
	pub derivation_path: Option<String>,

	#[serde(rename = "publicKey", skip_serializing_if = "Option::is_none")]
	pub public_key: Option<String>,
}

impl Address {
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			derivation_path: None,
			public_key: None,
		}
	}
}

impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.address)
	}
}

impl From<&str> for Address {
	fn from(address: &str) -> Self {
		Self::new(address)
	}
}
