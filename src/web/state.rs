//! # Web Server State
//!
//! Shared, read-only state handed to every handler. Nothing here is mutated
//! on the request path; the environment is re-read by the service per call.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{ConfigLoader, ServerConfig};
use crate::diagnostics::{DiagnosticLogger, TracingDiagnostics};
use crate::env_source::{EnvSource, ProcessEnv};
use crate::services::ClientEnvService;

#[derive(Debug)]
pub struct ClientEnvWebState {
    /// Configuration the server was started with
    pub config: ServerConfig,

    /// Deployment environment name reported by the detailed health probe
    pub environment: String,

    started_at: Instant,
    client_env_service: ClientEnvService,
}

impl ClientEnvWebState {
    pub fn new(
        config: ServerConfig,
        env: Arc<dyn EnvSource>,
        diagnostics: Arc<dyn DiagnosticLogger>,
    ) -> Self {
        let client_env_service =
            ClientEnvService::new(config.client_env.clone(), env, diagnostics);

        Self {
            config,
            environment: ConfigLoader::detect_environment(),
            started_at: Instant::now(),
            client_env_service,
        }
    }

    /// State backed by the process environment and `tracing`
    pub fn from_process(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(ProcessEnv), Arc::new(TracingDiagnostics))
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn client_env_service(&self) -> &ClientEnvService {
        &self.client_env_service
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
