//! # sf-backend
//!
//! Clients for the hosted backend-as-a-service that owns every storefront
//! record and user account.
//!
//! ```text
//! Backend (trait)
//! ├── SupabaseBackend   (PostgREST database API + auth API over HTTPS)
//! └── MemoryBackend     (in-process tables for tests and offline runs)
//! ```
//!
//! Handlers depend only on [`Backend`], so the HTTP contract can be exercised
//! without network access.

pub mod memory;
pub mod query;
pub mod supabase;

mod error;
mod http;

pub use error::BackendError;
pub use memory::MemoryBackend;
pub use query::{Direction, Query};
pub use supabase::SupabaseBackend;

use async_trait::async_trait;
use sf_core::entities::{Banner, ProductReview, VerifiedOtp};
use sf_core::enums::{OtpType, ReviewStatus};

/// Operations the storefront performs against its hosted backend.
///
/// Every method is a single request; there are no multi-step transactions.
#[async_trait]
pub trait Backend: Send + Sync {
    /// All reviews, newest first, each joined with its product's id and title.
    /// `status` restricts the listing to one moderation state.
    async fn list_reviews(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<ProductReview>, BackendError>;

    /// Reviews of one product in the given state, newest first.
    async fn product_reviews(
        &self,
        product_id: &str,
        status: ReviewStatus,
    ) -> Result<Vec<ProductReview>, BackendError>;

    /// Set a review's moderation status and return the updated row.
    async fn set_review_status(
        &self,
        review_id: &str,
        status: ReviewStatus,
    ) -> Result<ProductReview, BackendError>;

    /// Active banners ordered by `display_order` ascending.
    async fn active_banners(&self) -> Result<Vec<Banner>, BackendError>;

    /// Ask the auth provider to email a signup code, creating the user if
    /// needed.
    async fn send_signup_otp(&self, email: &str) -> Result<(), BackendError>;

    /// Verify a one-time code for `email`.
    async fn verify_otp(
        &self,
        email: &str,
        token: &str,
        kind: OtpType,
    ) -> Result<VerifiedOtp, BackendError>;
}
