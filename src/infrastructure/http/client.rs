//! reqwest-backed implementation of the transport port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::domain::error::{FetchError, FetchResult};
use crate::domain::models::HttpConfig;
use crate::domain::ports::JsonTransport;

/// reqwest-backed [`JsonTransport`].
///
/// Holds a pooled [`reqwest::Client`], so clones share connections and the
/// transport is cheap to pass around. Each `get_json` call performs exactly
/// one request; non-success statuses are classified into [`FetchError`]
/// variants and bodies that are not valid JSON surface as decode errors.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: ReqwestClient,
}

impl ReqwestTransport {
    /// Build a transport with the default configuration.
    pub fn new() -> FetchResult<Self> {
        Self::with_config(&HttpConfig::default())
    }

    /// Build a transport from explicit configuration.
    pub fn with_config(config: &HttpConfig) -> FetchResult<Self> {
        let http_client = ReqwestClient::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_nodelay(true)
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    #[instrument(skip(self))]
    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        debug!("GET {url}");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            warn!("GET {url} failed ({status})");
            return Err(FetchError::from_status(status, body));
        }

        let body = response.text().await?;
        let payload = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
