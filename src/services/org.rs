//! Organization client built from the fetch, lookup, and memo pieces.

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::domain::error::ClientError;
use crate::domain::memo::AsyncMemo;
use crate::domain::nested::access_nested;
use crate::domain::ports::JsonTransport;

/// Default API root for [`OrgClient`].
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Read-only client for a single organization's public metadata.
///
/// The organization document is fetched through the transport at most once
/// per client instance and memoized; derived accessors answer from the
/// cached document. A failed fetch is not cached, so the next read retries.
pub struct OrgClient {
    transport: Arc<dyn JsonTransport>,
    base_url: String,
    org: String,
    payload: AsyncMemo<Value>,
}

impl OrgClient {
    /// Create a client for `org` against the default API root.
    pub fn new(transport: Arc<dyn JsonTransport>, org: impl Into<String>) -> Self {
        Self::with_base_url(transport, DEFAULT_BASE_URL, org)
    }

    /// Point the client at a different API root (test servers, enterprise
    /// installs).
    pub fn with_base_url(
        transport: Arc<dyn JsonTransport>,
        base_url: impl Into<String>,
        org: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            org: org.into(),
            payload: AsyncMemo::new(),
        }
    }

    fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org)
    }

    /// The organization document, fetched on first access and cached for the
    /// lifetime of the client.
    pub async fn org(&self) -> Result<Value, ClientError> {
        self.payload
            .get_or_try_compute(|| async move {
                let payload = self.transport.get_json(&self.org_url()).await?;
                Ok(payload)
            })
            .await
    }

    /// URL of the organization's public repositories listing, taken from the
    /// memoized organization document.
    pub async fn public_repos_url(&self) -> Result<String, ClientError> {
        let payload = self.org().await?;
        let url = access_nested(&payload, &["repos_url"])?;
        url.as_str().map(ToString::to_string).ok_or_else(|| {
            ClientError::Malformed("repos_url is not a string".to_string())
        })
    }

    /// Names of the organization's public repositories, optionally restricted
    /// to repositories under the given license key.
    ///
    /// The repositories listing itself is fetched on every call; only the
    /// organization document is memoized.
    #[instrument(skip(self))]
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>, ClientError> {
        let url = self.public_repos_url().await?;
        let listing = self.transport.get_json(&url).await?;
        let repos = listing
            .as_array()
            .ok_or_else(|| ClientError::Malformed("repos listing is not an array".to_string()))?;

        let mut names = Vec::new();
        for repo in repos {
            if let Some(key) = license {
                if !Self::has_license(repo, key) {
                    continue;
                }
            }
            let name = access_nested(repo, &["name"])?;
            let name = name
                .as_str()
                .ok_or_else(|| ClientError::Malformed("repo name is not a string".to_string()))?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    /// Returns true if `repo` is licensed under `license_key`. A repository
    /// without license metadata has no license.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested(repo, &["license", "key"])
            .is_ok_and(|key| key.as_str() == Some(license_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn has_license_matches_the_key() {
        let repo = json!({"license": {"key": "my_license"}});
        assert!(OrgClient::has_license(&repo, "my_license"));
    }

    #[test]
    fn has_license_rejects_a_different_key() {
        let repo = json!({"license": {"key": "other_license"}});
        assert!(!OrgClient::has_license(&repo, "my_license"));
    }

    #[test]
    fn repo_without_license_metadata_has_no_license() {
        let repo = json!({"name": "bare"});
        assert!(!OrgClient::has_license(&repo, "my_license"));
    }

    #[test]
    fn license_key_must_be_a_string() {
        let repo = json!({"license": {"key": 7}});
        assert!(!OrgClient::has_license(&repo, "my_license"));
    }
}
