//! # Web API Response Types
//!
//! Health probe payloads. The client configuration payload itself is
//! [`crate::models::ClientConfig`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CredentialStatus;

/// Simple health check response for Kubernetes probes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicHealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl BasicHealthResponse {
    pub fn now(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Detailed health status with credential presence
///
/// `status` is `healthy` when the browser will get usable credentials and
/// `degraded` when it will fall back to mock mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub credentials: CredentialStatus,
}
