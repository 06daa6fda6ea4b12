mod client;

pub use client::TerraClient;
