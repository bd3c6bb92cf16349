use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distinguishes short-lived access tokens from the longer-lived refresh
/// tokens used only to mint new access tokens.
///
/// Carried on the wire as the `type` claim, lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Decoded token payload.
///
/// NOTE:
/// - `sub` is the user id; project convention is a UUID string.
/// - `iat`/`exp` are seconds since epoch (JWT NumericDate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

/// Errors returned by token verification.
///
/// Messages carry no token contents; callers map these to a uniform 401 (or
/// discard them) without exposing parsing detail.
#[derive(Debug, Error)]
pub enum InvalidTokenError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    BadSignature,

    #[error("token expired")]
    Expired,

    #[error("invalid 'sub' (expected UUID)")]
    InvalidSubject,
}
