use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Seconds until the access token expires.
    pub expires_in: u64,
    /// The refresh token the client keeps using. Stateless tokens cannot be
    /// rotated or revoked server-side, so this is the one that was presented.
    pub refresh_token: String,
}
