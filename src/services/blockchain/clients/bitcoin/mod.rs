mod client;

pub use client::BitcoinClient;
