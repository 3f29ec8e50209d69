//! # Client Configuration Model
//!
//! The pair of values a browser client needs to reach the backend service.

use serde::{Deserialize, Serialize};

use crate::constants::placeholders;

/// Backend URL and API key handed to the browser
///
/// Built fresh for every request. A missing variable becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub supabase_url: String,
    pub supabase_key: String,
}

impl ClientConfig {
    pub fn new(supabase_url: impl Into<String>, supabase_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_key: supabase_key.into(),
        }
    }

    /// Both values are non-empty
    pub fn is_complete(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_key.is_empty()
    }

    pub fn status(&self) -> CredentialStatus {
        CredentialStatus {
            url_configured: !self.supabase_url.is_empty(),
            key_configured: !self.supabase_key.is_empty(),
            url_placeholder: is_placeholder_url(&self.supabase_url),
            key_placeholder: is_placeholder_key(&self.supabase_key),
        }
    }
}

/// Presence summary of the client credentials, without the values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub url_configured: bool,
    pub key_configured: bool,
    pub url_placeholder: bool,
    pub key_placeholder: bool,
}

impl CredentialStatus {
    /// Both credentials present and neither is a placeholder; the browser
    /// will build a real client rather than its mock
    pub fn is_usable(&self) -> bool {
        self.url_configured && self.key_configured && !self.url_placeholder && !self.key_placeholder
    }
}

/// URL values the browser client rejects
pub fn is_placeholder_url(url: &str) -> bool {
    placeholders::URLS.contains(&url)
}

/// Key values the browser client rejects
pub fn is_placeholder_key(key: &str) -> bool {
    placeholders::KEYS.contains(&key) || key.contains(placeholders::KEY_FRAGMENT)
}
