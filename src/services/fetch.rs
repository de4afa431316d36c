//! JSON fetch service.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::error::FetchResult;
use crate::domain::ports::JsonTransport;

/// Fetches JSON documents through the configured transport.
///
/// Each call performs exactly one transport hit: no retries, no caching.
/// Callers that want a cached value pair this with a memo slot, as
/// [`OrgClient`](crate::services::OrgClient) does.
#[derive(Clone)]
pub struct JsonFetcher {
    transport: Arc<dyn JsonTransport>,
}

impl JsonFetcher {
    /// Create a fetcher over the given transport.
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self { transport }
    }

    /// GET `url` and return the decoded JSON payload.
    #[instrument(skip(self))]
    pub async fn fetch_json(&self, url: &str) -> FetchResult<Value> {
        debug!("fetching JSON document");
        self.transport.get_json(url).await
    }
}
