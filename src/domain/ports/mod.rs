//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interface that infrastructure adapters must
//! implement:
//! - `JsonTransport`: a single-shot HTTP GET returning decoded JSON
//!
//! The port is the seam that lets tests substitute a fake transport instead
//! of patching global state.

pub mod transport;

pub use transport::JsonTransport;
