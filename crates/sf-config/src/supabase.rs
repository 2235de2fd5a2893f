//! Hosted backend (Supabase) configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g., `https://abcd1234.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anon key. Subject to row-level policies.
    #[serde(default)]
    pub anon_key: String,

    /// Service-role key. Bypasses row-level policies; used for admin routes
    /// when set.
    #[serde(default)]
    pub service_role_key: String,

    /// Timeout for each request to the backend, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            service_role_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SupabaseConfig {
    /// Check if the config has the minimum required fields for remote access.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Check if privileged admin access is available.
    pub fn has_service_role(&self) -> bool {
        !self.service_role_key.is_empty()
    }

    /// Key used for admin queries: the service-role key when present,
    /// otherwise the anon key.
    pub fn admin_key(&self) -> &str {
        if self.has_service_role() {
            &self.service_role_key
        } else {
            &self.anon_key
        }
    }

    /// Project URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// `PostgREST` endpoint root.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base_url())
    }

    /// Auth endpoint root.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base_url())
    }
}
