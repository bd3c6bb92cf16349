use serde::Serialize;
use uuid::Uuid;

use crate::api::v1::extractors::Identity;

#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
    /// Derived role marker, e.g. "ROLE_SELLER".
    pub authority: String,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            authority: identity.authority(),
            user_id: identity.user_id,
            email: identity.email,
            role: identity.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityResponse>,
}
