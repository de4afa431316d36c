//! Cachette - Lazy-Caching Toolkit for JSON APIs
//!
//! Cachette bundles the three small pieces a read-only JSON API client keeps
//! reaching for: traversal of nested documents by key path, a thin JSON fetch
//! over an injectable HTTP transport, and write-once memoization slots that
//! guarantee a computation runs at most once per owning instance.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): lookup and memoization logic, error types,
//!   and the transport port
//! - **Service Layer** (`services`): the fetch service and the organization
//!   client built on top of it
//! - **Infrastructure Layer** (`infrastructure`): the reqwest transport
//!   adapter and configuration loading
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cachette::{OrgClient, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(ReqwestTransport::new()?);
//!     let client = OrgClient::new(transport, "rust-lang");
//!     for name in client.public_repos(None).await? {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{ClientError, FetchError, FetchResult, LookupError, LookupResult};
pub use domain::memo::{AsyncMemo, Memo};
pub use domain::models::HttpConfig;
pub use domain::nested::access_nested;
pub use domain::ports::JsonTransport;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::ReqwestTransport;
pub use services::{JsonFetcher, OrgClient};
