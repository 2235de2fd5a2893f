//! Admin review moderation.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use sf_core::enums::ReviewStatus;
use sf_core::responses::{ReviewResponse, ReviewsResponse};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReviewFilter {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /api/admin/reviews?status=`: every review with its product, newest
/// first. No pagination.
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Json<ReviewsResponse>, AppError> {
    let status = ReviewStatus::parse_filter(filter.status.as_deref())?;

    let reviews = state
        .backend
        .list_reviews(status)
        .await
        .inspect_err(|error| tracing::warn!(%error, ?status, "review query failed"))?;

    tracing::debug!(count = reviews.len(), ?status, "listed reviews");
    Ok(Json(ReviewsResponse { reviews }))
}

/// `PATCH /api/admin/reviews/{id}`: set a review's moderation status.
pub async fn update_review_status(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<ReviewResponse>, AppError> {
    let raw = payload
        .ok()
        .and_then(|Json(update)| update.status)
        .filter(|status| !status.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Status is required".to_string()))?;
    let status: ReviewStatus = raw.trim().parse()?;

    let review = state
        .backend
        .set_review_status(&review_id, status)
        .await
        .inspect_err(|error| tracing::warn!(%error, %review_id, "review update failed"))?;

    tracing::info!(%review_id, %status, "review moderated");
    Ok(Json(ReviewResponse { review }))
}
