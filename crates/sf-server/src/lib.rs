//! # sf-server
//!
//! HTTP surface of the storefront: an axum [`Router`] over a [`Backend`]
//! handle, plus the `storefront` binary that configures and runs it.
//!
//! ```text
//! GET   /health
//! GET   /api/banners
//! POST  /api/auth/send-otp
//! POST  /api/auth/verify-otp
//! GET   /api/products/{id}/reviews
//! GET   /widgets/products/{id}/rating
//! GET   /api/admin/reviews?status=      (admin)
//! PATCH /api/admin/reviews/{id}         (admin)
//! ```
//!
//! [`Backend`]: sf_backend::Backend

pub mod admin;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, patch, post},
};
use sf_config::ServerConfig;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppState, backend_from_config};

use handlers::{auth, banners, health, products, reviews, widgets};

/// Build the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    let admin = Router::new()
        .route("/reviews", get(reviews::list_reviews))
        .route("/reviews/{id}", patch(reviews::update_review_status))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            admin::require_admin,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/api/banners", get(banners::list_banners))
        .route("/api/auth/send-otp", post(auth::send_otp))
        .route("/api/auth/verify-otp", post(auth::verify_otp))
        .route("/api/products/{id}/reviews", get(products::product_reviews))
        .route("/widgets/products/{id}/rating", get(widgets::rating_widget))
        .nest("/api/admin", admin)
        .layer(cors_layer(&state.config.server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let address = state.config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(%address, "storefront listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("storefront shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
