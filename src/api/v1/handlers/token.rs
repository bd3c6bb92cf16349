use axum::Json;
use axum::extract::State;
use uuid::Uuid;

use crate::api::v1::dto::refresh_request::RefreshRequest;
use crate::api::v1::dto::token_response::TokenResponse;
use crate::error::AppError;
use crate::state::AppState;

/// POST /auth/refresh
///
/// Verifies the presented refresh token and mints a new access token for the
/// same subject/email/role. Invalid, expired, or access-typed tokens all
/// produce the same 401.
///
/// The login flow that issues the initial pair lives in the account service;
/// it calls the token service directly after primary credential checks.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if req.grant_type != "refresh_token" {
        return Err(AppError::InvalidRequest(
            "unsupported grant_type".to_string(),
        ));
    }

    let claims = state.tokens.verify(&req.refresh_token).map_err(|err| {
        tracing::debug!(error = %err, "refresh token rejected");
        AppError::Unauthorized
    })?;

    // An access token must not renew a session.
    if !state.tokens.is_refresh_token(&claims) {
        return Err(AppError::Unauthorized);
    }

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;

    let access_token = state
        .tokens
        .issue_access_token(user_id, &claims.email, &claims.role)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.access_ttl_seconds(),
        refresh_token: req.refresh_token,
    }))
}
