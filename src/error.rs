//! Error types for the client configuration server.
//!
//! The request path never fails; these errors only come out of the service
//! shell (configuration loading, socket binding, serving).

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::ConfigurationError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to bind web server to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Web server on {address} failed: {source}")]
    Serve {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Web server task did not shut down cleanly: {0}")]
    Shutdown(String),
}

pub type Result<T> = std::result::Result<T, ServerError>;
