//! HTTP JSON-RPC transport.
//!
//! A thin client for JSON-RPC 2.0 node APIs with:
//! - Connection pooling and request timeouts
//! - Transient-error retries with exponential backoff and jitter
//! - Optional basic authentication (Bitcoin nodes)

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::services::blockchain::transports::RpcTransport;

/// Error object of a JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
struct JsonRpcError {
	code: i64,
	message: String,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
	#[serde(default)]
	result: Value,
	error: Option<JsonRpcError>,
}

/// JSON-RPC over HTTP client.
#[derive(Clone, Debug)]
pub struct JsonRpcTransport {
	client: ClientWithMiddleware,
	url: Url,
	username: Option<String>,
	password: Option<String>,
}

impl JsonRpcTransport {
	/// Creates a new transport for the given node endpoint.
	///
	/// # Arguments
	/// * `url` - JSON-RPC endpoint
	/// * `username`/`password` - optional basic-auth credentials
	pub fn new(
		url: &str,
		username: Option<String>,
		password: Option<String>,
	) -> Result<Self, anyhow::Error> {
		let url = Url::parse(url).with_context(|| format!("Invalid RPC URL: {}", url))?;

		let retry_policy = ExponentialBackoff::builder()
			.base(2)
			.retry_bounds(Duration::from_millis(250), Duration::from_secs(10))
			.jitter(Jitter::Full)
			.build_with_max_retries(3);

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.context("Failed to create HTTP client")?;

		let client = ClientBuilder::new(http_client)
			.with(RetryTransientMiddleware::new_with_policy(retry_policy))
			.build();

		Ok(Self {
			client,
			url,
			username,
			password,
		})
	}
}

#[async_trait]
impl RpcTransport for JsonRpcTransport {
	async fn call(&self, method: &str, params: Value) -> Result<Value, anyhow::Error> {
		let payload = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params,
		});

		let mut request = self.client.post(self.url.clone()).json(&payload);
		if let Some(username) = &self.username {
			request = request.basic_auth(username, self.password.as_deref());
		}

		let response = request
			.send()
			.await
			.with_context(|| format!("RPC request failed: {}", method))?;

		let status = response.status();
		if !status.is_success() {
			return Err(anyhow::anyhow!(
				"RPC request {} returned HTTP {}",
				method,
				status.as_u16()
			));
		}

		let envelope: JsonRpcResponse = response
			.json()
			.await
			.with_context(|| format!("Failed to parse RPC response: {}", method))?;

		if let Some(error) = envelope.error {
			return Err(anyhow::anyhow!(
				"RPC error {} for {}: {}",
				error.code,
				method,
				error.message
			));
		}

		Ok(envelope.result)
	}
}
