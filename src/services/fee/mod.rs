//! Fee computation and outbound request building.
//!
//! Fees are expressed to callers in gwei-scale units and converted to the
//! chain base unit (wei) here, rounding up so a request never undershoots
//! the intended price.

use crate::{
	models::{EvmTransactionRequest, FeePreference, UnsignedTransaction},
	services::blockchain::ChainError,
	utils::{ensure_0x, u128_to_hex, u64_to_hex},
};

/// Wei per gwei.
pub const GWEI: f64 = 1e9;

/// Gas cost of a simple value transfer on Ethereum-family chains.
pub const SIMPLE_TRANSFER_GAS: u64 = 21_000;

/// Converts a gwei-scale price to wei, rounding up.
pub fn gwei_to_wei(gwei: f64) -> u128 {
	(gwei * GWEI).ceil() as u128
}

/// Builds the provider-native request for an unsigned transaction.
///
/// A `PerUnit` preference becomes a legacy `gasPrice`; a structured
/// preference passes max fee / priority fee through, both scaled from gwei
/// to wei. Absent fields are omitted, not zeroed.
pub fn build_transaction_request(tx: &UnsignedTransaction) -> EvmTransactionRequest {
	let mut request = EvmTransactionRequest {
		from: ensure_0x(&tx.from),
		value: u128_to_hex(tx.value),
		to: tx.to.as_deref().map(ensure_0x),
		data: tx.data.as_deref().map(ensure_0x),
		nonce: tx.nonce.map(u64_to_hex),
		..Default::default()
	};

	match tx.fee {
		Some(FeePreference::PerUnit(price)) => {
			request.gas_price = Some(u128_to_hex(gwei_to_wei(price)));
		}
		Some(FeePreference::Eip1559(fee)) => {
			request.max_fee_per_gas = Some(u128_to_hex(gwei_to_wei(fee.max_fee_per_gas)));
			request.max_priority_fee_per_gas =
				Some(u128_to_hex(gwei_to_wei(fee.max_priority_fee_per_gas)));
		}
		None => {}
	}

	request
}

/// Amount sendable when sweeping an address: balance minus the fee reserve
/// for a simple transfer.
///
/// # Arguments
/// * `balance` - Spendable balance in base units
/// * `fee_per_unit` - Fee per gas/byte unit in base units
/// * `unit_estimate` - Fixed gas/byte estimate for a simple transfer
pub fn sweep_amount(
	balance: u128,
	fee_per_unit: u128,
	unit_estimate: u64,
) -> Result<u128, ChainError> {
	let reserve = fee_per_unit * unit_estimate as u128;
	balance
		.checked_sub(reserve)
		.ok_or(ChainError::InsufficientBalance {
			balance,
			required: reserve,
		})
}
