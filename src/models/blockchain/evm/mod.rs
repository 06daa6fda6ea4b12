//! EVM wire models.

mod block;
mod transaction;

pub use block::{EvmBlock, EvmBlockTransactions};
pub use transaction::{EvmTransaction, EvmTransactionReceipt, EvmTransactionRequest};
