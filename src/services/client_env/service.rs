//! # Client Environment Service
//!
//! Reads the backend URL and key for every request and reports what it found
//! through the injected diagnostic logger. Reading never fails: an unset
//! variable becomes an empty string and an error entry.

use std::fmt;
use std::sync::Arc;

use crate::config::ClientEnvConfig;
use crate::diagnostics::{redacted_preview, DiagnosticLogger, LogField};
use crate::env_source::EnvSource;
use crate::models::client_config::{is_placeholder_key, is_placeholder_url};
use crate::models::{ClientConfig, CredentialStatus};

/// Client Environment Service
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use client_config_server::config::ClientEnvConfig;
/// use client_config_server::diagnostics::RecordingDiagnostics;
/// use client_config_server::env_source::InMemoryEnv;
/// use client_config_server::services::ClientEnvService;
///
/// let env = Arc::new(InMemoryEnv::from_pairs([("SUPABASE_URL", "https://abc.supabase.co")]));
/// let service = ClientEnvService::new(
///     ClientEnvConfig::default(),
///     env,
///     Arc::new(RecordingDiagnostics::new()),
/// );
///
/// let config = service.client_config();
/// assert_eq!(config.supabase_url, "https://abc.supabase.co");
/// assert_eq!(config.supabase_key, "");
/// ```
pub struct ClientEnvService {
    settings: ClientEnvConfig,
    env: Arc<dyn EnvSource>,
    diagnostics: Arc<dyn DiagnosticLogger>,
}

impl fmt::Debug for ClientEnvService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientEnvService")
            .field("url_var", &self.settings.url_var)
            .field("key_var", &self.settings.key_var)
            .field("env", &self.env)
            .finish()
    }
}

impl ClientEnvService {
    pub fn new(
        settings: ClientEnvConfig,
        env: Arc<dyn EnvSource>,
        diagnostics: Arc<dyn DiagnosticLogger>,
    ) -> Self {
        Self {
            settings,
            env,
            diagnostics,
        }
    }

    /// Build the client configuration: GET /config/client-env
    ///
    /// Emits, in order: one info or warn entry per credential, a debug preview
    /// per prefixed variable, placeholder warnings, and one error entry if
    /// either credential is empty.
    pub fn client_config(&self) -> ClientConfig {
        let config = self.read();

        self.report_presence(&self.settings.url_var, &config.supabase_url);
        self.report_presence(&self.settings.key_var, &config.supabase_key);

        if self.settings.log_prefixed_vars {
            self.log_prefixed_previews();
        }

        if self.settings.detect_placeholders {
            self.report_placeholders(&config);
        }

        if !config.is_complete() {
            let missing: Vec<&str> = [
                (&self.settings.url_var, &config.supabase_url),
                (&self.settings.key_var, &config.supabase_key),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();

            self.diagnostics.error(
                "Backend credentials missing; browser client will fall back to mock mode",
                &[LogField::new("missing", missing.join(","))],
            );
        }

        config
    }

    /// Presence summary for health reporting. Reads the environment without
    /// emitting any diagnostic entries.
    pub fn credential_status(&self) -> CredentialStatus {
        self.read().status()
    }

    fn read(&self) -> ClientConfig {
        ClientConfig::new(
            self.env.var(&self.settings.url_var).unwrap_or_default(),
            self.env.var(&self.settings.key_var).unwrap_or_default(),
        )
    }

    fn report_presence(&self, variable: &str, value: &str) {
        if value.is_empty() {
            self.diagnostics.warn(
                &format!("{variable} is not set"),
                &[LogField::new("variable", variable)],
            );
        } else {
            self.diagnostics.info(
                &format!("{variable} loaded from environment"),
                &[
                    LogField::new("variable", variable),
                    LogField::new("length", value.chars().count()),
                ],
            );
        }
    }

    // Previews every variable sharing the prefix, not only the two credentials
    fn log_prefixed_previews(&self) {
        for (name, value) in self.env.vars_with_prefix(&self.settings.diagnostic_prefix) {
            self.diagnostics.debug(
                "Environment variable preview",
                &[
                    LogField::new("variable", &name),
                    LogField::new("preview", redacted_preview(&value)),
                ],
            );
        }
    }

    fn report_placeholders(&self, config: &ClientConfig) {
        let flagged = [
            (&self.settings.url_var, is_placeholder_url(&config.supabase_url)),
            (&self.settings.key_var, is_placeholder_key(&config.supabase_key)),
        ];

        for (variable, is_placeholder) in flagged {
            if is_placeholder {
                self.diagnostics.warn(
                    &format!("{variable} holds a placeholder value; browser client will use mock mode"),
                    &[LogField::new("variable", variable)],
                );
            }
        }
    }
}
