//! # sf-config
//!
//! Layered configuration loading for the storefront using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STOREFRONT_*` prefix, `__` as separator)
//! 2. Project-level `.storefront/config.toml`
//! 3. User-level `~/.config/storefront/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STOREFRONT_SUPABASE__URL` -> `supabase.url`,
//! `STOREFRONT_SERVER__PORT` -> `server.port`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sf_config::StorefrontConfig;
//!
//! let config = StorefrontConfig::load_with_dotenv().expect("config");
//!
//! if config.supabase.is_configured() {
//!     println!("Backend: {}", config.supabase.url);
//! }
//! ```

mod error;
mod general;
mod server;
mod supabase;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use supabase::SupabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest star count a rating widget may render.
const STAR_MAX_LIMIT: u8 = 10;

const REDACTED: &str = "********";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl StorefrontConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".storefront/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("STOREFRONT_").split("__"))
    }

    /// Check values that deserialize fine but cannot be served.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.supabase.url;
        if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "supabase.url".into(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }

        let stars = self.general.default_star_max;
        if stars == 0 || stars > STAR_MAX_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "general.default_star_max".into(),
                reason: format!("must be between 1 and {STAR_MAX_LIMIT}, got {stars}"),
            });
        }

        Ok(())
    }

    /// Fail unless the hosted backend is reachable with the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `supabase.url` or
    /// `supabase.anon_key` is missing.
    pub fn require_supabase(&self) -> Result<&SupabaseConfig, ConfigError> {
        if self.supabase.is_configured() {
            Ok(&self.supabase)
        } else {
            Err(ConfigError::NotConfigured {
                section: "supabase".into(),
            })
        }
    }

    /// Copy of the configuration with every secret masked, safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mask = |value: &str| {
            if value.is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            }
        };

        let mut copy = self.clone();
        copy.supabase.anon_key = mask(&self.supabase.anon_key);
        copy.supabase.service_role_key = mask(&self.supabase.service_role_key);
        copy.server.admin_token = mask(&self.server.admin_token);
        copy
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("storefront").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
