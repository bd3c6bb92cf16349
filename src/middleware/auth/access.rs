//! Bearer access-token filter → `Identity` in request extensions.
//!
//! Contract:
//! - Runs once per request, before any protected handler.
//! - A missing/malformed header, a failed verification, or a refresh-typed
//!   token all leave the request unauthenticated; the filter never rejects
//!   and never surfaces an error to the client.
//! - On success the decoded identity is inserted into request extensions for
//!   the remainder of this request (set at most once, never cleared).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};
use uuid::Uuid;

use crate::api::v1::extractors::Identity;
use crate::state::AppState;

/// Apply the access-token filter to a router.
///
/// Example:
/// ```ignore
/// let v1 = middleware::auth::access::apply(api::v1::routes(), state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8: from_fn cannot take a State extractor, so pass state explicitly.
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(identity) = authenticate(&state, req.headers()) {
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}

/// Try to authenticate the request from its Authorization header.
///
/// Every failure degrades to `None`: downstream authorization produces the
/// uniform 401 for routes that require an identity, so no token-parsing
/// detail leaks to the client from this layer.
fn authenticate(state: &AppState, headers: &HeaderMap) -> Option<Identity> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;

    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = %err, "bearer token rejected");
            return None;
        }
    };

    // Refresh tokens renew sessions; they never authenticate ordinary
    // requests.
    if state.tokens.is_refresh_token(&claims) {
        tracing::debug!("refresh token presented as access credential");
        return None;
    }

    let user_id = match Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(_) => {
            tracing::debug!("token subject is not a UUID");
            return None;
        }
    };

    Some(Identity::new(user_id, claims.email, claims.role))
}
