//! Public product review listing.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use sf_core::entities::ProductReview;
use sf_core::enums::ReviewStatus;
use sf_core::ids::RecordId;
use sf_core::responses::{ProductReviewsResponse, RatingSummary};
use sf_ui::StarRating;

use crate::error::AppError;
use crate::state::AppState;

/// Count, one-decimal mean and star breakdown for a set of reviews.
///
/// Every review counts; reviews without a numeric rating are left out of the
/// mean.
#[must_use]
pub fn summarize(reviews: &[ProductReview], star_max: u8) -> RatingSummary {
    let count = reviews.len();
    let ratings: Vec<f64> = reviews
        .iter()
        .filter_map(ProductReview::rating_value)
        .collect();
    let average = if ratings.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    RatingSummary {
        count,
        average,
        stars: StarRating::new(average).max(star_max).counts(),
    }
}

/// Approved reviews of `product_id` with their summary.
pub(crate) async fn approved_reviews(
    state: &AppState,
    product_id: &str,
) -> Result<(Vec<ProductReview>, RatingSummary), AppError> {
    let reviews = state
        .backend
        .product_reviews(product_id, ReviewStatus::Approved)
        .await
        .inspect_err(|error| tracing::warn!(%error, %product_id, "product review query failed"))?;
    let summary = summarize(&reviews, state.config.general.default_star_max);
    Ok((reviews, summary))
}

/// `GET /api/products/{id}/reviews`
pub async fn product_reviews(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductReviewsResponse>, AppError> {
    let (reviews, summary) = approved_reviews(&state, &product_id).await?;

    Ok(Json(ProductReviewsResponse {
        product_id: RecordId::from_path(&product_id),
        reviews,
        summary,
    }))
}
