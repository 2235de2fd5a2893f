//! In-process backend.
//!
//! Holds products, reviews, banners and pending one-time codes in memory and
//! answers every [`Backend`] call with the same filtering and ordering the
//! hosted database applies. Used by the server's tests and by `serve` when no
//! hosted backend is configured.
//!
//! Query failures can be injected with [`MemoryBackend::fail_queries`] to
//! exercise error paths.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use sf_core::entities::{
    AuthSession, AuthUser, Banner, Product, ProductRef, ProductReview, VerifiedOtp,
};
use sf_core::enums::{OtpType, ReviewStatus};
use sf_core::tables;

use crate::{Backend, BackendError};

/// Message the auth provider returns for a wrong or stale code.
pub const INVALID_OTP_MESSAGE: &str = "Token has expired or is invalid";

/// First code handed out by [`MemoryBackend::send_signup_otp`].
const FIRST_OTP_CODE: u32 = 100_000;

#[derive(Debug, Default)]
struct Tables {
    products: Vec<Product>,
    reviews: Vec<ProductReview>,
    banners: Vec<Banner>,
    /// email → expected code
    pending_otps: HashMap<String, String>,
    users: HashMap<String, AuthUser>,
    issued_codes: u32,
    failure: Option<String>,
}

/// In-memory [`Backend`] implementation.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: RwLock<Tables>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_product(self, product: Product) -> Self {
        self.write().products.push(product);
        self
    }

    #[must_use]
    pub fn with_review(self, review: ProductReview) -> Self {
        self.write().reviews.push(review);
        self
    }

    #[must_use]
    pub fn with_banner(self, banner: Banner) -> Self {
        self.write().banners.push(banner);
        self
    }

    /// Register a code that [`Backend::verify_otp`] will accept once for `email`.
    #[must_use]
    pub fn with_pending_otp(self, email: &str, code: &str) -> Self {
        self.write()
            .pending_otps
            .insert(email.to_string(), code.to_string());
        self
    }

    /// Make every subsequent call fail with a 500 carrying `message`.
    pub fn fail_queries(&self, message: impl Into<String>) {
        self.write().failure = Some(message.into());
    }

    /// Undo [`Self::fail_queries`].
    pub fn clear_failure(&self) {
        self.write().failure = None;
    }

    /// The code currently pending for `email`, if any.
    #[must_use]
    pub fn pending_otp(&self, email: &str) -> Option<String> {
        self.read().pending_otps.get(email).cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Tables {
    fn check_failure(&self) -> Result<(), BackendError> {
        match &self.failure {
            Some(message) => Err(BackendError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Attach the `products(id,title)` projection, as the joined select does.
    fn joined(&self, review: &ProductReview) -> ProductReview {
        let mut review = review.clone();
        review.products = self
            .products
            .iter()
            .find(|product| product.id == review.product_id)
            .map(ProductRef::from);
        review
    }

    fn reviews_newest_first(&self, keep: impl Fn(&ProductReview) -> bool) -> Vec<ProductReview> {
        let mut rows: Vec<ProductReview> = self
            .reviews
            .iter()
            .filter(|review| keep(review))
            .map(|review| self.joined(review))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn list_reviews(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<ProductReview>, BackendError> {
        let db = self.read();
        db.check_failure()?;
        Ok(db.reviews_newest_first(|review| {
            status.is_none_or(|s| review.status == s.as_str())
        }))
    }

    async fn product_reviews(
        &self,
        product_id: &str,
        status: ReviewStatus,
    ) -> Result<Vec<ProductReview>, BackendError> {
        let db = self.read();
        db.check_failure()?;
        Ok(db.reviews_newest_first(|review| {
            review.product_id.matches(product_id) && review.status == status.as_str()
        }))
    }

    async fn set_review_status(
        &self,
        review_id: &str,
        status: ReviewStatus,
    ) -> Result<ProductReview, BackendError> {
        let mut db = self.write();
        db.check_failure()?;

        let review = db
            .reviews
            .iter_mut()
            .find(|review| review.id.matches(review_id))
            .ok_or_else(|| BackendError::NotFound {
                table: tables::PRODUCT_REVIEWS,
                id: review_id.to_string(),
            })?;
        review.status = status.as_str().to_string();
        let updated = review.clone();

        Ok(db.joined(&updated))
    }

    async fn active_banners(&self) -> Result<Vec<Banner>, BackendError> {
        let db = self.read();
        db.check_failure()?;

        let mut banners: Vec<Banner> = db
            .banners
            .iter()
            .filter(|banner| banner.is_active)
            .cloned()
            .collect();
        banners.sort_by(Banner::cmp_display_order);
        Ok(banners)
    }

    async fn send_signup_otp(&self, email: &str) -> Result<(), BackendError> {
        let mut db = self.write();
        db.check_failure()?;

        if !email.contains('@') {
            return Err(BackendError::AuthRejected {
                status: 400,
                message: "Unable to validate email address: invalid format".into(),
            });
        }

        let code = format!("{:06}", FIRST_OTP_CODE + db.issued_codes);
        db.issued_codes += 1;
        db.pending_otps.insert(email.to_string(), code);
        Ok(())
    }

    async fn verify_otp(
        &self,
        email: &str,
        token: &str,
        kind: OtpType,
    ) -> Result<VerifiedOtp, BackendError> {
        let mut db = self.write();
        db.check_failure()?;

        let accepted = db
            .pending_otps
            .get(email)
            .is_some_and(|expected| expected == token);
        if !accepted {
            return Err(BackendError::AuthRejected {
                status: 403,
                message: INVALID_OTP_MESSAGE.into(),
            });
        }
        db.pending_otps.remove(email);

        let next_id = db.users.len() + 1;
        let user = db
            .users
            .entry(email.to_string())
            .or_insert_with(|| AuthUser {
                id: format!("memory-user-{next_id}"),
                email: Some(email.to_string()),
                email_confirmed_at: None,
                extra: serde_json::Map::new(),
            });
        if kind == OtpType::Signup {
            user.email_confirmed_at.get_or_insert_with(Utc::now);
        }
        let user = user.clone();

        let session = AuthSession {
            access_token: format!("memory-access-{}", user.id),
            refresh_token: format!("memory-refresh-{}", user.id),
            token_type: "bearer".into(),
            expires_in: 3600,
            expires_at: Some(Utc::now().timestamp() + 3600),
            extra: serde_json::Map::new(),
        };

        Ok(VerifiedOtp {
            user,
            session: Some(session),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone};
    use pretty_assertions::assert_eq;
    use sf_core::ids::RecordId;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap()
    }

    fn review(id: i64, product_id: i64, status: ReviewStatus, hour: u32) -> ProductReview {
        ProductReview {
            id: RecordId::Int(id),
            product_id: RecordId::Int(product_id),
            status: status.as_str().to_string(),
            rating: Some(4.into()),
            body: None,
            created_at: at(hour),
            products: None,
            extra: serde_json::Map::new(),
        }
    }

    fn product(id: i64, title: &str) -> Product {
        Product {
            id: RecordId::Int(id),
            title: Some(title.into()),
            extra: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn list_reviews_joins_products_newest_first() {
        let backend = MemoryBackend::new()
            .with_product(product(1, "Mug"))
            .with_review(review(10, 1, ReviewStatus::Pending, 8))
            .with_review(review(11, 1, ReviewStatus::Approved, 9));

        let rows = backend.list_reviews(None).await.unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![RecordId::Int(11), RecordId::Int(10)]);
        assert_eq!(
            rows[0].products.as_ref().unwrap().title.as_deref(),
            Some("Mug")
        );
    }

    #[tokio::test]
    async fn set_review_status_updates_row() {
        let backend = MemoryBackend::new().with_review(review(10, 1, ReviewStatus::Pending, 8));

        let updated = backend
            .set_review_status("10", ReviewStatus::Approved)
            .await
            .unwrap();
        assert_eq!(updated.review_status(), Some(ReviewStatus::Approved));

        let approved = backend
            .list_reviews(Some(ReviewStatus::Approved))
            .await
            .unwrap();
        assert_eq!(approved.len(), 1);
    }

    #[tokio::test]
    async fn set_review_status_unknown_id() {
        let backend = MemoryBackend::new();
        let err = backend
            .set_review_status("99", ReviewStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NotFound { .. }));
    }

    #[tokio::test]
    async fn issued_code_verifies_once() {
        let backend = MemoryBackend::new();
        backend.send_signup_otp("sam@example.com").await.unwrap();
        let code = backend.pending_otp("sam@example.com").unwrap();
        assert_eq!(code, "100000");

        let verified = backend
            .verify_otp("sam@example.com", &code, OtpType::Signup)
            .await
            .unwrap();
        assert_eq!(verified.user.email.as_deref(), Some("sam@example.com"));
        assert!(verified.user.email_confirmed_at.is_some());
        assert!(verified.session.is_some());

        let replay = backend
            .verify_otp("sam@example.com", &code, OtpType::Signup)
            .await
            .unwrap_err();
        assert!(matches!(replay, BackendError::AuthRejected { status: 403, .. }));
    }

    #[tokio::test]
    async fn injected_failure_applies_until_cleared() {
        let backend = MemoryBackend::new();
        backend.fail_queries("connection refused");

        let err = backend.active_banners().await.unwrap_err();
        assert_eq!(err.message(), "connection refused");

        backend.clear_failure();
        assert!(backend.active_banners().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unrecognised_rows_pass_through() {
        let mut flagged = review(12, 1, ReviewStatus::Pending, 10);
        flagged.status = "flagged".into();
        flagged.rating = None;
        let backend = MemoryBackend::new()
            .with_review(flagged)
            .with_review(review(10, 1, ReviewStatus::Pending, 8));

        let all = backend.list_reviews(None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].status, "flagged");

        let pending = backend
            .list_reviews(Some(ReviewStatus::Pending))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
    }

    #[tokio::test]
    async fn banners_without_position_sort_last() {
        let banner = |id: i64, order: Option<serde_json::Number>| Banner {
            id: RecordId::Int(id),
            is_active: true,
            display_order: order,
            title: None,
            image_url: None,
            link_url: None,
            extra: serde_json::Map::new(),
        };
        let backend = MemoryBackend::new()
            .with_banner(banner(1, None))
            .with_banner(banner(2, Some(3.into())))
            .with_banner(banner(3, serde_json::Number::from_f64(1.5)));

        let ids: Vec<_> = backend
            .active_banners()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![RecordId::Int(3), RecordId::Int(2), RecordId::Int(1)]);
    }
}
