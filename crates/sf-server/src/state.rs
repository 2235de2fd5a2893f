use std::sync::Arc;

use sf_backend::{Backend, BackendError, MemoryBackend, SupabaseBackend};
use sf_config::StorefrontConfig;

/// Shared, read-only application state handed to every handler.
pub struct AppState {
    pub config: StorefrontConfig,
    pub backend: Arc<dyn Backend>,
}

impl AppState {
    #[must_use]
    pub fn new(config: StorefrontConfig, backend: Arc<dyn Backend>) -> Arc<Self> {
        Arc::new(Self { config, backend })
    }
}

/// Pick the backend for `config`: Supabase when configured, otherwise an
/// empty in-memory backend.
///
/// # Errors
///
/// Returns [`BackendError`] if the HTTP client cannot be built.
pub fn backend_from_config(config: &StorefrontConfig) -> Result<Arc<dyn Backend>, BackendError> {
    if config.supabase.is_configured() {
        tracing::info!(url = %config.supabase.url, "using hosted backend");
        if !config.supabase.has_service_role() {
            tracing::warn!("no service-role key configured; admin queries use the anon key");
        }
        Ok(Arc::new(SupabaseBackend::new(&config.supabase)?))
    } else {
        tracing::warn!(
            "supabase is not configured (set STOREFRONT_SUPABASE__URL and \
             STOREFRONT_SUPABASE__ANON_KEY); serving from an empty in-memory backend"
        );
        Ok(Arc::new(MemoryBackend::new()))
    }
}
