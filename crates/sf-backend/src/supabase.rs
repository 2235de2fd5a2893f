//! Supabase client: `PostgREST` for tables, the auth API for OTP flows.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use sf_config::SupabaseConfig;
use sf_core::entities::{AuthSession, AuthUser, Banner, ProductReview, VerifiedOtp};
use sf_core::enums::{OtpType, ReviewStatus};
use sf_core::tables;

use crate::http::{check_auth_response, check_response};
use crate::query::{Direction, Query};
use crate::{Backend, BackendError};

/// Which key a request is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Anon key, subject to row-level policies.
    Public,
    /// Service-role key when configured, anon key otherwise.
    Admin,
}

/// HTTP client for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseBackend {
    http: reqwest::Client,
    rest_url: String,
    auth_url: String,
    anon_key: String,
    admin_key: String,
}

impl SupabaseBackend {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &SupabaseConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            rest_url: config.rest_url(),
            auth_url: config.auth_url(),
            anon_key: config.anon_key.clone(),
            admin_key: config.admin_key().to_string(),
        })
    }

    fn key(&self, access: Access) -> &str {
        match access {
            Access::Public => &self.anon_key,
            Access::Admin => &self.admin_key,
        }
    }

    fn authorize(&self, request: RequestBuilder, access: Access) -> RequestBuilder {
        let key = self.key(access);
        request.header("apikey", key).bearer_auth(key)
    }

    fn table_url(&self, table: &str, query: &Query) -> String {
        let qs = query.to_query_string();
        if qs.is_empty() {
            format!("{}/{table}", self.rest_url)
        } else {
            format!("{}/{table}?{qs}", self.rest_url)
        }
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        access: Access,
    ) -> Result<Vec<T>, BackendError> {
        let url = self.table_url(table, query);
        tracing::debug!(table, %url, "select");

        let request = self.authorize(self.http.get(&url), access);
        let resp = check_response(request.send().await?).await?;
        parse_json(resp).await
    }

    /// `PATCH` one review's status, asking for the updated row back.
    fn status_update(&self, review_id: &str, status: ReviewStatus) -> RequestBuilder {
        let query = Query::new()
            .select(tables::REVIEW_WITH_PRODUCT)
            .eq("id", review_id);
        let url = self.table_url(tables::PRODUCT_REVIEWS, &query);

        self.authorize(self.http.patch(&url), Access::Admin)
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "status": status }))
    }

    async fn auth_post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, BackendError> {
        let url = format!("{}/{path}", self.auth_url);
        tracing::debug!(%url, "auth request");

        let request = self.authorize(self.http.post(&url), Access::Public).json(body);
        let resp = check_auth_response(request.send().await?).await?;
        parse_json(resp).await
    }
}

async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BackendError> {
    let bytes = resp.bytes().await?;
    if bytes.is_empty() {
        return serde_json::from_str("{}").map_err(|e| BackendError::Parse(e.to_string()));
    }
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Parse(e.to_string()))
}

/// The row returned by a status update. An empty representation means the
/// filter matched nothing.
async fn updated_review(
    resp: reqwest::Response,
    review_id: &str,
) -> Result<ProductReview, BackendError> {
    let resp = check_response(resp).await?;
    let rows: Vec<ProductReview> = parse_json(resp).await?;

    rows.into_iter().next().ok_or_else(|| BackendError::NotFound {
        table: tables::PRODUCT_REVIEWS,
        id: review_id.to_string(),
    })
}

/// Split a verify response into user and optional session.
///
/// A verify that mints a session returns the session object with the user
/// nested under `user`; a verify that only confirms returns the bare user.
pub(crate) fn parse_verified(value: serde_json::Value) -> Result<VerifiedOtp, BackendError> {
    let parse = |e: serde_json::Error| BackendError::Parse(e.to_string());

    if value.get("access_token").is_some() {
        let user = value
            .get("user")
            .cloned()
            .ok_or_else(|| BackendError::Parse("session response missing 'user'".into()))?;
        let user: AuthUser = serde_json::from_value(user).map_err(parse)?;
        let session: AuthSession = serde_json::from_value(value).map_err(parse)?;
        return Ok(VerifiedOtp {
            user,
            session: Some(session),
        });
    }

    let user_value = value.get("user").cloned().unwrap_or(value);
    let user: AuthUser = serde_json::from_value(user_value).map_err(parse)?;
    Ok(VerifiedOtp {
        user,
        session: None,
    })
}

#[async_trait]
impl Backend for SupabaseBackend {
    async fn list_reviews(
        &self,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<ProductReview>, BackendError> {
        let mut query = Query::new().select(tables::REVIEW_WITH_PRODUCT);
        if let Some(status) = status {
            query = query.eq("status", status);
        }
        let query = query.order("created_at", Direction::Desc);

        self.select(tables::PRODUCT_REVIEWS, &query, Access::Admin)
            .await
    }

    async fn product_reviews(
        &self,
        product_id: &str,
        status: ReviewStatus,
    ) -> Result<Vec<ProductReview>, BackendError> {
        let query = Query::new()
            .select(tables::REVIEW_WITH_PRODUCT)
            .eq("product_id", product_id)
            .eq("status", status)
            .order("created_at", Direction::Desc);

        self.select(tables::PRODUCT_REVIEWS, &query, Access::Public)
            .await
    }

    async fn set_review_status(
        &self,
        review_id: &str,
        status: ReviewStatus,
    ) -> Result<ProductReview, BackendError> {
        tracing::debug!(review_id, %status, "update review status");
        let request = self.status_update(review_id, status);
        updated_review(request.send().await?, review_id).await
    }

    async fn active_banners(&self) -> Result<Vec<Banner>, BackendError> {
        let query = Query::new()
            .select("*")
            .eq("is_active", true)
            .order("display_order", Direction::Asc);

        self.select(tables::BANNERS, &query, Access::Public).await
    }

    async fn send_signup_otp(&self, email: &str) -> Result<(), BackendError> {
        let body = serde_json::json!({ "email": email, "create_user": true });
        self.auth_post("otp", &body).await?;
        Ok(())
    }

    async fn verify_otp(
        &self,
        email: &str,
        token: &str,
        kind: OtpType,
    ) -> Result<VerifiedOtp, BackendError> {
        let body = serde_json::json!({ "type": kind, "email": email, "token": token });
        let value = self.auth_post("verify", &body).await?;
        parse_verified(value)
    }
}
