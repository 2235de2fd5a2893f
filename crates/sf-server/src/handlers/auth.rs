//! Email one-time-code signup.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use sf_core::enums::OtpType;
use sf_core::responses::{SendOtpResponse, VerifyOtpResponse};

use crate::error::AppError;
use crate::state::AppState;

const CREDENTIALS_REQUIRED: &str = "Email and OTP are required";
const EMAIL_REQUIRED: &str = "Email is required";

#[derive(Debug, Default, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub otp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SendOtpRequest {
    #[serde(default)]
    pub email: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `POST /api/auth/send-otp`: email a signup code.
pub async fn send_otp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SendOtpRequest>, JsonRejection>,
) -> Result<Json<SendOtpResponse>, AppError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let email = non_blank(request.email)
        .ok_or_else(|| AppError::BadRequest(EMAIL_REQUIRED.to_string()))?;

    state
        .backend
        .send_signup_otp(&email)
        .await
        .inspect_err(|error| tracing::warn!(%error, "sending verification code failed"))?;

    tracing::info!("verification code sent");
    Ok(Json(SendOtpResponse {
        success: true,
        message: "Verification code sent".to_string(),
    }))
}

/// `POST /api/auth/verify-otp`: confirm a signup code and return the session.
pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Result<Json<VerifyOtpResponse>, AppError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let (Some(email), Some(otp)) = (non_blank(request.email), non_blank(request.otp)) else {
        return Err(AppError::BadRequest(CREDENTIALS_REQUIRED.to_string()));
    };

    let verified = state
        .backend
        .verify_otp(&email, &otp, OtpType::Signup)
        .await
        .inspect_err(|error| tracing::warn!(%error, "otp verification failed"))?;

    tracing::info!(user_id = %verified.user.id, "email verified");
    Ok(Json(VerifyOtpResponse {
        success: true,
        user: verified.user,
        session: verified.session,
        message: "Email verified successfully".to_string(),
    }))
}
