//! # Service Constants
//!
//! Environment variable names, log markers, and the placeholder credential
//! values the browser client refuses to use.

/// Environment variables consumed by the client configuration endpoint
pub mod env_vars {
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    pub const SUPABASE_KEY: &str = "SUPABASE_KEY";

    /// Prefix scanned for the debug-level redacted previews
    pub const SUPABASE_PREFIX: &str = "SUPABASE";
}

/// Environment variables read by the service shell itself
pub mod service_env {
    pub const CONFIG_PATH: &str = "CONFIG_SERVER_CONFIG_PATH";
    pub const ENVIRONMENT: &str = "CONFIG_SERVER_ENV";
    pub const APP_ENVIRONMENT: &str = "APP_ENV";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";

    /// Prefix for layered configuration overrides, e.g. `CONFIG_SERVER__WEB__BIND_ADDRESS`
    pub const OVERRIDE_PREFIX: &str = "CONFIG_SERVER";
    pub const OVERRIDE_SEPARATOR: &str = "__";

    pub const DEFAULT_CONFIG_PATH: &str = "config/client-config-server.toml";
    pub const DEFAULT_ENVIRONMENT: &str = "development";
}

/// Route paths
pub mod routes {
    pub const CLIENT_ENV: &str = "/config/client-env";
    pub const HEALTH: &str = "/health";
    pub const HEALTH_LIVE: &str = "/health/live";
    pub const HEALTH_READY: &str = "/health/ready";
    pub const HEALTH_DETAILED: &str = "/health/detailed";
}

/// Markers used in redacted previews
pub mod redaction {
    /// Rendered in place of an empty value
    pub const EMPTY_MARKER: &str = "(empty)";
    /// Number of leading characters kept in a preview
    pub const PREVIEW_CHARS: usize = 5;
    pub const ELLIPSIS: &str = "...";
}

/// Credential values the browser client treats as unconfigured
pub mod placeholders {
    pub const URLS: &[&str] = &[
        "https://YOUR_SUPABASE_URL.supabase.co",
        "https://example.supabase.co",
    ];
    pub const KEYS: &[&str] = &["YOUR_SUPABASE_KEY"];
    /// Any key containing this fragment is a placeholder
    pub const KEY_FRAGMENT: &str = "example";
}

pub const REQUEST_ID_HEADER: &str = "x-request-id";
