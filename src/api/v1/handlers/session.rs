use axum::Json;

use crate::api::v1::dto::identity::{IdentityResponse, SessionResponse};
use crate::api::v1::extractors::MaybeIdentity;

/// Report authentication state without requiring it.
///
/// Missing and invalid credentials are indistinguishable here; both are just
/// an unauthenticated session.
pub async fn session(MaybeIdentity(identity): MaybeIdentity) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: identity.is_some(),
        identity: identity.map(IdentityResponse::from),
    })
}
