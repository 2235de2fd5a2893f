//! Server-rendered HTML fragments built from `sf-ui` components.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};
use sf_core::responses::RatingSummary;
use sf_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, Component, StarRating};

use crate::error::AppError;
use crate::handlers::products::approved_reviews;
use crate::state::AppState;

/// `GET /widgets/products/{id}/rating`
pub async fn rating_widget(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let (_, summary) = approved_reviews(&state, &product_id).await?;
    Ok(Html(rating_card(
        &product_id,
        &summary,
        state.config.general.default_star_max,
    )))
}

fn count_label(count: usize) -> String {
    match count {
        0 => "No reviews yet".to_string(),
        1 => "1 review".to_string(),
        n => format!("{n} reviews"),
    }
}

/// A card with the star display, a review-count badge and a link to the
/// product's review section.
#[must_use]
pub fn rating_card(product_id: &str, summary: &RatingSummary, star_max: u8) -> String {
    let stars = StarRating::new(summary.average)
        .max(star_max)
        .show_value(summary.count > 0)
        .render();
    let variant = if summary.count == 0 {
        BadgeVariant::Default
    } else {
        BadgeVariant::Info
    };
    let badge = Badge::new(count_label(summary.count), variant).render();
    let link = Button::new("Read reviews")
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Sm)
        .href(format!("/products/{product_id}#reviews"))
        .render();

    Card::new(format!("{stars}{badge}"))
        .title("Customer rating")
        .footer(link)
        .render()
}
