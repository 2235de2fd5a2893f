//! # Live tests for the Supabase client
//!
//! These tests require a real Supabase project. They are skipped (not failed)
//! when credentials are missing.
//!
//! ## Required environment variables
//!
//! ```bash
//! STOREFRONT_SUPABASE__URL=https://<project>.supabase.co
//! STOREFRONT_SUPABASE__ANON_KEY=eyJ...
//! ```
//!
//! Optional: `STOREFRONT_SUPABASE__SERVICE_ROLE_KEY` for the admin listing.
//!
//! ## Run
//!
//! ```bash
//! cargo test -p sf-backend --test live_supabase -- --ignored --nocapture
//! ```

use sf_backend::{Backend, BackendError, SupabaseBackend};
use sf_config::StorefrontConfig;
use sf_core::enums::{OtpType, ReviewStatus};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_env() {
    let workspace_env = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.join(".env"));

    if let Some(env_path) = workspace_env {
        let _ = dotenvy::from_path(&env_path);
    }
}

fn live_backend() -> Option<SupabaseBackend> {
    load_env();
    let config = StorefrontConfig::load().ok()?;
    let supabase = config.require_supabase().ok()?;
    SupabaseBackend::new(supabase).ok()
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore] // requires network
async fn live_active_banners_are_ordered() {
    let Some(backend) = live_backend() else {
        eprintln!("SKIP: Supabase not configured");
        return;
    };

    let banners = backend.active_banners().await.expect("banners query");
    assert!(banners.iter().all(|b| b.is_active));
    assert!(
        banners
            .windows(2)
            .all(|pair| pair[0].cmp_display_order(&pair[1]).is_le())
    );
    eprintln!("OK: {} active banners", banners.len());
}

#[tokio::test]
#[ignore] // requires network
async fn live_review_filter_restricts_status() {
    let Some(backend) = live_backend() else {
        eprintln!("SKIP: Supabase not configured");
        return;
    };

    let reviews = backend
        .list_reviews(Some(ReviewStatus::Pending))
        .await
        .expect("reviews query");
    assert!(reviews.iter().all(|r| r.status == ReviewStatus::Pending.as_str()));
    assert!(
        reviews
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );
    eprintln!("OK: {} pending reviews", reviews.len());
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore] // requires network
async fn live_wrong_code_is_rejected() {
    let Some(backend) = live_backend() else {
        eprintln!("SKIP: Supabase not configured");
        return;
    };

    let err = backend
        .verify_otp("nobody@example.com", "000000", OtpType::Signup)
        .await
        .expect_err("a made-up code must not verify");
    assert!(
        matches!(err, BackendError::AuthRejected { .. }),
        "expected rejection, got {err:?}"
    );
    eprintln!("OK: rejected with '{}'", err.message());
}
