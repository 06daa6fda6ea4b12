//! HTTP REST transport for LCD gateways and price feeds.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use serde_json::Value;
use url::Url;

use crate::services::blockchain::transports::RestTransport;

/// Plain GET-based JSON client rooted at a base URL.
#[derive(Clone, Debug)]
pub struct RestClient {
	client: ClientWithMiddleware,
	base_url: Url,
}

impl RestClient {
	pub fn new(base_url: &str) -> Result<Self, anyhow::Error> {
		let base_url =
			Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;

		let retry_policy = ExponentialBackoff::builder()
			.base(2)
			.retry_bounds(Duration::from_millis(250), Duration::from_secs(10))
			.jitter(Jitter::Full)
			.build_with_max_retries(3);

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.context("Failed to create HTTP client")?;

		let client = ClientBuilder::new(http_client)
			.with(RetryTransientMiddleware::new_with_policy(retry_policy))
			.build();

		Ok(Self { client, base_url })
	}
}

#[async_trait]
impl RestTransport for RestClient {
	async fn get_json(&self, path: &str) -> Result<Value, anyhow::Error> {
		// An empty path queries the base URL itself (price feeds).
		let url = if path.is_empty() {
			self.base_url.clone()
		} else {
			self.base_url
				.join(path.trim_start_matches('/'))
				.with_context(|| format!("Invalid path: {}", path))?
		};

		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.with_context(|| format!("GET {} failed", url))?;

		let status = response.status();
		let body: Value = response
			.json()
			.await
			.with_context(|| format!("Failed to parse response body: {}", url))?;

		if !status.is_success() {
			// LCD error replies carry a message body worth surfacing
			let message = body
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("")
				.to_string();
			return Err(anyhow::anyhow!(
				"GET {} returned HTTP {}: {}",
				url,
				status.as_u16(),
				message
			));
		}

		Ok(body)
	}
}
