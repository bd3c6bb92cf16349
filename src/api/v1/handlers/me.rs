use axum::Json;

use crate::api::v1::dto::identity::IdentityResponse;
use crate::api::v1::extractors::IdentityExtractor;

/// Echo the authenticated caller.
///
/// Runs downstream of the access filter; an unauthenticated request is
/// rejected by the extractor and never reaches the body.
pub async fn me(IdentityExtractor(identity): IdentityExtractor) -> Json<IdentityResponse> {
    Json(identity.into())
}
