//! HTTP transport port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error::FetchResult;

/// A single-shot HTTP GET returning the decoded JSON body.
///
/// Production code plugs in
/// [`ReqwestTransport`](crate::infrastructure::http::ReqwestTransport);
/// tests plug in a fake that records calls and serves canned payloads.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET `url` once and decode the body as JSON.
    ///
    /// Implementations perform exactly one request per call: no retries,
    /// no caching.
    async fn get_json(&self, url: &str) -> FetchResult<Value>;
}
