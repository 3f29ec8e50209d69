#![allow(clippy::doc_markdown)] // Allow technical terms like Supabase, CORS in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Client Config Server
//!
//! Small HTTP service that hands a browser client the backend URL and API key
//! it needs, read from the server's environment on every request.
//!
//! ## Overview
//!
//! `GET /config/client-env` returns `{"supabase_url": ..., "supabase_key": ...}`
//! with status 200, whatever the environment holds. Unset variables come back
//! as empty strings. Reading them produces diagnostic log entries (lengths and
//! redacted previews, never values) and an error entry when the browser will
//! have to fall back to its mock client.
//!
//! ## Module Organization
//!
//! - [`services`] - Environment reads and diagnostic reporting
//! - [`env_source`] - Process and in-memory environment views
//! - [`diagnostics`] - Injectable logging capability and redacted previews
//! - [`models`] - Client configuration payload
//! - [`web`] - Axum routes, handlers, and middleware
//! - [`config`] - Layered server configuration
//! - [`bootstrap`] - Server lifecycle
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use client_config_server::bootstrap::ServerBootstrap;
//! use client_config_server::config::ConfigLoader;
//! use client_config_server::web::ClientEnvWebState;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load_from_env()?;
//! let handle = ServerBootstrap::start(Arc::new(ClientEnvWebState::from_process(config))).await?;
//! println!("Serving on {}", handle.base_url());
//! handle.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod env_source;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

pub use bootstrap::{ServerBootstrap, ServerHandle};
pub use config::{ConfigLoader, ServerConfig};
pub use error::{Result, ServerError};
pub use models::ClientConfig;
pub use web::create_app;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
