//! Domain errors for the cachette toolkit.

use thiserror::Error;

/// Errors raised while traversing a nested JSON document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// A key along the path could not be found. Carries exactly the first
    /// key that failed to resolve, not the whole path.
    #[error("key not found: \"{0}\"")]
    KeyNotFound(String),
}

/// Result type for nested lookups.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors raised while fetching a JSON document over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The requested document does not exist (404).
    #[error("resource not found")]
    NotFound,

    /// The server throttled the request (429).
    #[error("rate limited")]
    RateLimited,

    /// The server failed while handling the request (5xx).
    #[error("server error {status}: {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Any other non-success status.
    #[error("unexpected status {status}: {body}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Returns true if this error is transient and a later attempt might
    /// succeed. Note that the fetch layer itself never retries; callers
    /// decide what to do with the classification.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(err) => err.is_timeout() || err.is_connect(),
            Self::RateLimited | Self::Server { .. } => true,
            Self::NotFound | Self::Unexpected { .. } | Self::Decode(_) => false,
        }
    }

    /// Create an error from a non-success HTTP status code and its response
    /// body.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            404 => Self::NotFound,
            429 => Self::RateLimited,
            s if status.is_server_error() => Self::Server { status: s, body },
            s => Self::Unexpected { status: s, body },
        }
    }
}

/// Errors surfaced by the organization client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Fetching a remote document failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The payload did not contain an expected field.
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The payload resolved but had an unexpected shape.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn from_status_404() {
        let error = FetchError::from_status(StatusCode::NOT_FOUND, "missing".to_string());
        assert!(matches!(error, FetchError::NotFound));
    }

    #[test]
    fn from_status_429() {
        let error = FetchError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new());
        assert!(matches!(error, FetchError::RateLimited));
    }

    #[test]
    fn from_status_500() {
        let error = FetchError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        );
        assert!(matches!(error, FetchError::Server { status: 500, .. }));
    }

    #[test]
    fn from_status_unknown() {
        let error = FetchError::from_status(StatusCode::IM_A_TEAPOT, "teapot".to_string());
        assert!(matches!(error, FetchError::Unexpected { status: 418, .. }));
    }

    #[test]
    fn server_errors_and_throttling_are_transient() {
        assert!(FetchError::RateLimited.is_transient());
        let error = FetchError::Server {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn not_found_and_decode_failures_are_not_transient() {
        assert!(!FetchError::NotFound.is_transient());
        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(!FetchError::Decode(decode).is_transient());
    }

    #[test]
    fn decode_errors_convert_via_from() {
        let decode = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: FetchError = decode.into();
        assert!(matches!(error, FetchError::Decode(_)));
    }

    #[test]
    fn lookup_error_carries_the_missing_key() {
        let error = LookupError::KeyNotFound("b".to_string());
        assert_eq!(error.to_string(), "key not found: \"b\"");
        assert_eq!(error, LookupError::KeyNotFound("b".to_string()));
    }

    #[test]
    fn client_error_wraps_both_domains() {
        let fetch: ClientError = FetchError::NotFound.into();
        assert!(matches!(fetch, ClientError::Fetch(FetchError::NotFound)));

        let lookup: ClientError = LookupError::KeyNotFound("repos_url".to_string()).into();
        assert!(matches!(lookup, ClientError::Lookup(_)));
    }
}
