//! # Web API Handlers
//!
//! HTTP request handlers organized by functional area.

pub mod client_env;
pub mod health;
