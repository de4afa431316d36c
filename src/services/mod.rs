//! Service layer: the fetch service and the organization client.

pub mod fetch;
pub mod org;

pub use fetch::JsonFetcher;
pub use org::OrgClient;
