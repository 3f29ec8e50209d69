//! # Client Environment Service
//!
//! Builds the client configuration from the environment independently of the
//! HTTP layer, so handlers and tests share one implementation.
//!
//! ## Features
//!
//! - Per-request environment reads, no caching
//! - Presence logging with lengths, never values
//! - Redacted debug previews of every prefixed variable
//! - Placeholder credential warnings

mod service;

pub use service::ClientEnvService;
