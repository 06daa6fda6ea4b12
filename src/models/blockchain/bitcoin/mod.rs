//! Bitcoin wire models.

mod block;

pub use block::BitcoinBlock;
