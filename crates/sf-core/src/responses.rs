//! JSON bodies returned by the storefront HTTP API.
//!
//! Field names are part of the public contract consumed by the storefront
//! frontend; do not rename them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuthSession, AuthUser, Banner, ProductReview};
use crate::ids::RecordId;

/// Error body for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response from `GET /api/admin/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReviewsResponse {
    pub reviews: Vec<ProductReview>,
}

/// Response from `PATCH /api/admin/reviews/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReviewResponse {
    pub review: ProductReview,
}

/// Response from `GET /api/banners`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BannersResponse {
    pub banners: Vec<Banner>,
}

/// Response from `POST /api/auth/verify-otp`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub user: AuthUser,
    pub session: Option<AuthSession>,
    pub message: String,
}

/// Response from `POST /api/auth/send-otp`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
}

/// Whole, half and empty star counts for a rating display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct StarCounts {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarCounts {
    /// Total number of star slots.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.full + self.half + self.empty
    }
}

/// Aggregate of a product's approved reviews.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RatingSummary {
    pub count: usize,
    /// Mean rating rounded to one decimal; `0.0` when there are no reviews.
    pub average: f64,
    pub stars: StarCounts,
}

/// Response from `GET /api/products/{id}/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProductReviewsResponse {
    pub product_id: RecordId,
    pub reviews: Vec<ProductReview>,
    pub summary: RatingSummary,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
