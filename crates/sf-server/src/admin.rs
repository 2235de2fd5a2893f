use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Gate `/api/admin/*` behind `Authorization: Bearer <server.admin_token>`.
///
/// Passes every request through when no token is configured.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let server = &state.config.server;
    if !server.admin_auth_enabled() {
        return Ok(next.run(request).await);
    }

    let authorized = bearer_token(request.headers())
        .is_some_and(|token| tokens_match(token, &server.admin_token));

    if authorized {
        Ok(next.run(request).await)
    } else {
        tracing::debug!(path = %request.uri().path(), "rejected admin request");
        Err(AppError::Unauthorized)
    }
}

/// The credentials of an `Authorization: Bearer …` header. The scheme name
/// is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then_some(token.trim())
        .filter(|token| !token.is_empty())
}

/// Compare in time that depends only on the lengths, not on where the first
/// differing byte is.
fn tokens_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }
    provided
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
