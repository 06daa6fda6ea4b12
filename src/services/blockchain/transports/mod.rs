//! Network transport implementations for chain providers.
//!
//! Providers treat transports as black-box collaborators: a JSON-RPC
//! `call(method, params)` for node APIs and a `get_json(path)` for REST
//! gateways (Terra LCD, price feeds). Retry/timeout behavior lives entirely
//! in this layer; the normalization layer above performs no retries.

mod http;
mod rest;

use async_trait::async_trait;
use serde_json::Value;

pub use http::JsonRpcTransport;
pub use rest::RestClient;

/// JSON-RPC call contract every node transport must satisfy.
///
/// Any non-exceptional JSON response is authoritative, including `null`
/// results signaling "not found"; translating those into typed errors is
/// the caller's job.
#[async_trait]
pub trait RpcTransport: Send + Sync {
	/// Issues a single JSON-RPC call and returns the `result` value.
	async fn call(&self, method: &str, params: Value) -> Result<Value, anyhow::Error>;
}

/// REST call contract for LCD-style gateways.
#[async_trait]
pub trait RestTransport: Send + Sync {
	/// Issues a GET against `path` (relative to the transport's base URL)
	/// and returns the parsed JSON body.
	async fn get_json(&self, path: &str) -> Result<Value, anyhow::Error>;
}
