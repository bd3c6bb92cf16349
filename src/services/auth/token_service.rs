use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::auth::claims::{Claims, InvalidTokenError, TokenType};

/// HS256 token issuer/verifier.
///
/// Holds the process-wide symmetric key for its whole lifetime; there is no
/// rotation or multi-key support. Signature comparison is delegated to the
/// jsonwebtoken MAC primitive, which is constant-time w.r.t. the key.
///
/// Issuance and verification are synchronous, CPU-bound operations; concurrent
/// callers share this service read-only behind an Arc.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl_ms: u64,
    refresh_ttl_ms: u64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenService")
            .field("access_ttl_ms", &self.access_ttl_ms)
            .field("refresh_ttl_ms", &self.refresh_ttl_ms)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_ms: u64, refresh_ttl_ms: u64) -> Self {
        // Zero leeway: a token whose `exp` equals the current second is still
        // accepted; one second past `exp` it is rejected.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl_ms,
            refresh_ttl_ms,
        }
    }

    /// Issue an access token for an already-authenticated subject.
    ///
    /// Primary credential verification (password check, etc.) happens in the
    /// login service before this is called; this only encodes the result.
    pub fn issue_access_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: &str,
    ) -> Result<String, AppError> {
        self.issue(user_id, email, role, TokenType::Access, self.access_ttl_ms)
    }

    /// Issue a refresh token: same claim shape, `type=refresh`, longer TTL.
    pub fn issue_refresh_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: &str,
    ) -> Result<String, AppError> {
        self.issue(user_id, email, role, TokenType::Refresh, self.refresh_ttl_ms)
    }

    fn issue(
        &self,
        user_id: Uuid,
        email: &str,
        role: &str,
        token_type: TokenType,
        ttl_ms: u64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + Duration::milliseconds(ttl_ms as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            token_type,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                error!(error = %e, "failed to sign token");
                AppError::Internal
            },
        )
    }

    /// Verify signature and expiry, and decode the claims.
    ///
    /// Does not check the `type` claim; the consumer decides which token
    /// types it accepts (the access filter refuses refresh tokens, the
    /// refresh endpoint requires them).
    pub fn verify(&self, token: &str) -> Result<Claims, InvalidTokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => InvalidTokenError::Expired,
                ErrorKind::InvalidSignature => InvalidTokenError::BadSignature,
                _ => InvalidTokenError::Malformed,
            })
    }

    /// Pure predicate over already-verified claims; does not re-verify.
    pub fn is_refresh_token(&self, claims: &Claims) -> bool {
        claims.token_type == TokenType::Refresh
    }

    /// Verify, then extract the subject as a UUID.
    ///
    /// Propagates verification failures unchanged; a subject that is not a
    /// UUID is `InvalidSubject`.
    pub fn user_id_from_token(&self, token: &str) -> Result<Uuid, InvalidTokenError> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| InvalidTokenError::InvalidSubject)
    }

    /// Access-token lifetime in whole seconds, for `expires_in` responses.
    pub fn access_ttl_seconds(&self) -> u64 {
        self.access_ttl_ms / 1000
    }
}
