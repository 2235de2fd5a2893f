use std::sync::Arc;

use axum::{Json, extract::State};
use sf_core::responses::BannersResponse;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/banners`: active banners in display order.
pub async fn list_banners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BannersResponse>, AppError> {
    let banners = state
        .backend
        .active_banners()
        .await
        .inspect_err(|error| tracing::warn!(%error, "banner query failed"))?;

    tracing::debug!(count = banners.len(), "listed banners");
    Ok(Json(BannersResponse { banners }))
}
