//! Mnemonic-backed wallet for EVM chains.
//!
//! The signing key is derived once at construction from a BIP-39 phrase and
//! a BIP-44 derivation path, then held for the wallet's lifetime. All
//! signing happens locally; the chain client is only used for nonce, gas
//! and fee discovery plus broadcasting.

use alloy::{
	consensus::{SignableTransaction, TxEip1559, TxEnvelope, TxLegacy},
	eips::eip2718::Encodable2718,
	network::TxSignerSync,
	primitives::{Bytes, TxKind, U256},
	signers::{
		k256::elliptic_curve::sec1::ToEncodedPoint,
		local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
		SignerSync,
	},
};
use tracing::instrument;

use crate::{
	models::{
		Address, Asset, EvmNetwork, EvmTransaction, EvmTransactionRequest, FeePreference,
		SendOptions, Transaction, UnsignedTransaction,
	},
	services::{
		blockchain::{ChainClient, ChainError, EvmClientTrait},
		fee::{build_transaction_request, gwei_to_wei, sweep_amount, SIMPLE_TRANSFER_GAS},
		normalization::evm::normalize_transaction,
	},
	utils::{ensure_0x, hex_to_u128, hex_to_u64, strip_0x, u64_to_hex},
};

/// Wallet over a single mnemonic-derived account.
///
/// The address set reported by this wallet is always the one derived
/// account; used/unused address queries exist for interface parity with
/// multi-account wallets and resolve to that same account.
pub struct EvmWallet<C> {
	chain: C,
	network: EvmNetwork,
	signer: PrivateKeySigner,
	derivation_path: String,
}

impl<C> EvmWallet<C> {
	/// Derives the signing key from a BIP-39 phrase and derivation path.
	///
	/// # Errors
	/// Returns `Signer` when the phrase or path is invalid.
	pub fn new(
		chain: C,
		network: EvmNetwork,
		mnemonic: &str,
		derivation_path: &str,
	) -> Result<Self, ChainError> {
		let signer = MnemonicBuilder::<English>::default()
			.phrase(mnemonic)
			.derivation_path(derivation_path)
			.map_err(|e| ChainError::Signer(e.to_string()))?
			.build()
			.map_err(|e| ChainError::Signer(e.to_string()))?;

		Ok(Self {
			chain,
			network,
			signer,
			derivation_path: derivation_path.to_string(),
		})
	}

	/// The account address as a bare lowercase hex string.
	pub fn address(&self) -> String {
		hex::encode(self.signer.address().as_slice())
	}

	/// Uncompressed secp256k1 public key as bare hex, SEC1 tag stripped.
	pub fn public_key(&self) -> String {
		let point = self
			.signer
			.credential()
			.verifying_key()
			.to_encoded_point(false);
		hex::encode(&point.as_bytes()[1..])
	}

	/// All addresses managed by this wallet.
	pub fn get_addresses(&self) -> Vec<Address> {
		vec![Address {
			address: self.address(),
			derivation_path: Some(self.derivation_path.clone()),
			public_key: Some(self.public_key()),
		}]
	}

	/// The next address to receive funds at.
	pub fn get_unused_address(&self) -> Address {
		self.get_addresses().remove(0)
	}

	/// Addresses that have been handed out before.
	pub fn get_used_addresses(&self) -> Vec<Address> {
		self.get_addresses()
	}

	/// Signs a message with the EIP-191 personal-message prefix.
	///
	/// Returns the 65-byte r || s || v signature as bare hex.
	pub fn sign_message(&self, message: &str) -> Result<String, ChainError> {
		let signature = self
			.signer
			.sign_message_sync(message.as_bytes())
			.map_err(|e| ChainError::Signer(e.to_string()))?;
		Ok(hex::encode(signature.as_bytes()))
	}

	/// Signs a fully resolved request and returns the RLP-encoded raw
	/// transaction as bare hex.
	///
	/// The request shape picks the envelope: a `gasPrice` produces a legacy
	/// transaction, max fee fields produce an EIP-1559 one.
	fn sign_request(&self, request: &EvmTransactionRequest) -> Result<String, ChainError> {
		let nonce = request
			.nonce
			.as_deref()
			.ok_or_else(|| ChainError::Signer("request has no nonce".into()))
			.and_then(|n| hex_to_u64(n).map_err(ChainError::from))?;
		let gas_limit = request
			.gas
			.as_deref()
			.ok_or_else(|| ChainError::Signer("request has no gas limit".into()))
			.and_then(|g| hex_to_u64(g).map_err(ChainError::from))?;
		let value = U256::from(hex_to_u128(&request.value)?);
		let to = match request.to.as_deref() {
			Some(addr) => TxKind::Call(
				ensure_0x(addr)
					.parse()
					.map_err(|_| ChainError::InvalidDestinationAddress(addr.to_string()))?,
			),
			None => TxKind::Create,
		};
		let input = match request.data.as_deref() {
			Some(data) => Bytes::from(
				hex::decode(strip_0x(data))
					.map_err(|e| ChainError::Signer(format!("invalid call data: {e}")))?,
			),
			None => Bytes::new(),
		};

		let envelope: TxEnvelope = if let Some(gas_price) = request.gas_price.as_deref() {
			let mut tx = TxLegacy {
				chain_id: Some(self.network.chain_id),
				nonce,
				gas_price: hex_to_u128(gas_price)?,
				gas_limit,
				to,
				value,
				input,
			};
			let signature = self
				.signer
				.sign_transaction_sync(&mut tx)
				.map_err(|e| ChainError::Signer(e.to_string()))?;
			tx.into_signed(signature).into()
		} else {
			let max_fee = request
				.max_fee_per_gas
				.as_deref()
				.ok_or_else(|| ChainError::Signer("request has no fee".into()))?;
			let max_priority = request.max_priority_fee_per_gas.as_deref().unwrap_or("0x0");
			let mut tx = TxEip1559 {
				chain_id: self.network.chain_id,
				nonce,
				gas_limit,
				max_fee_per_gas: hex_to_u128(max_fee)?,
				max_priority_fee_per_gas: hex_to_u128(max_priority)?,
				to,
				value,
				input,
				access_list: Default::default(),
			};
			let signature = self
				.signer
				.sign_transaction_sync(&mut tx)
				.map_err(|e| ChainError::Signer(e.to_string()))?;
			tx.into_signed(signature).into()
		};

		Ok(hex::encode(envelope.encoded_2718()))
	}
}

impl<C: ChainClient + EvmClientTrait> EvmWallet<C> {
	/// Resolves the caller's fee preference, falling back to the chain's
	/// prevailing fee.
	async fn resolve_fee(
		&self,
		fee: Option<FeePreference>,
	) -> Result<FeePreference, ChainError> {
		match fee {
			Some(fee) => Ok(fee),
			None => Ok(FeePreference::from(self.chain.get_fees(None).await?)),
		}
	}

	/// Signs and broadcasts a resolved unsigned transaction.
	///
	/// Estimates gas after request building so the estimate sees the final
	/// call data, then returns the broadcast transaction in canonical form
	/// (pending, no block fields).
	async fn sign_and_send(&self, unsigned: UnsignedTransaction) -> Result<Transaction, ChainError> {
		let mut request = build_transaction_request(&unsigned);
		let gas = self.chain.estimate_gas(&request).await?;
		request.gas = Some(u64_to_hex(gas));

		let raw = self.sign_request(&request)?;
		let hash = self.chain.send_raw_transaction(&raw).await?;
		normalize_transaction(&request.into_transaction(hash), None)
	}

	/// Builds, signs and broadcasts a transfer.
	#[instrument(skip(self, options), fields(to = options.to.as_deref().unwrap_or("")))]
	pub async fn send_transaction(&self, options: SendOptions) -> Result<Transaction, ChainError> {
		let from = self.address();
		let nonce = self.chain.get_transaction_count(&from, "pending").await?;
		let fee = self.resolve_fee(options.fee).await?;

		self.sign_and_send(UnsignedTransaction {
			from,
			to: options.to,
			value: options.value,
			data: options.data,
			nonce: Some(nonce),
			fee: Some(fee),
		})
		.await
	}

	/// Rebroadcasts a pending transaction with a new fee.
	///
	/// The original sender, destination, value, call data and nonce are
	/// preserved so the replacement competes for the same nonce slot; gas
	/// is re-estimated against the new request.
	#[instrument(skip(self, new_fee))]
	pub async fn update_transaction_fee(
		&self,
		tx_hash: &str,
		new_fee: FeePreference,
	) -> Result<Transaction, ChainError> {
		let original = self.chain.get_transaction_by_hash(tx_hash).await?;
		let raw: EvmTransaction = serde_json::from_value(original.raw)
			.map_err(|_| ChainError::invalid_transaction(tx_hash))?;

		let nonce = match raw.nonce.as_deref() {
			Some(nonce) => Some(hex_to_u64(nonce)?),
			None => None,
		};

		self.sign_and_send(UnsignedTransaction {
			from: raw.from.unwrap_or_else(|| self.address()),
			to: raw.to,
			value: hex_to_u128(&raw.value)?,
			data: raw.input,
			nonce,
			fee: Some(new_fee),
		})
		.await
	}

	/// Sends the full spendable balance to `to`, reserving the fee for a
	/// simple transfer.
	///
	/// # Errors
	/// Returns `InsufficientBalance` when the balance cannot cover the fee
	/// reserve.
	#[instrument(skip(self, fee))]
	pub async fn send_sweep_transaction(
		&self,
		to: &str,
		fee: Option<FeePreference>,
	) -> Result<Transaction, ChainError> {
		let addresses = self.get_addresses();
		let balances = self
			.chain
			.get_balance(&addresses, &[Asset::native(&self.network.native_asset)])
			.await?;
		let balance = balances.first().copied().unwrap_or(0);

		let fee = self.resolve_fee(fee).await?;
		let fee_per_unit = match fee {
			FeePreference::PerUnit(price) => price,
			FeePreference::Eip1559(fee) => fee.max_fee_per_gas,
		};
		let amount = sweep_amount(balance, gwei_to_wei(fee_per_unit), SIMPLE_TRANSFER_GAS)?;

		self.send_transaction(SendOptions {
			to: Some(to.to_string()),
			value: amount,
			data: None,
			fee: Some(fee),
		})
		.await
	}
}
