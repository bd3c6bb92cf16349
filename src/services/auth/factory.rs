/// Factory: build the `TokenService` from application `Config`.
use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::services::auth::TokenService;

pub fn build_token_service(config: &Config) -> Arc<TokenService> {
    // Design expectation, not structurally enforced: refresh tokens should
    // outlive the access tokens they renew.
    if config.refresh_token_ttl_ms <= config.access_token_ttl_ms {
        warn!(
            access_ttl_ms = config.access_token_ttl_ms,
            refresh_ttl_ms = config.refresh_token_ttl_ms,
            "refresh token TTL is not greater than access token TTL"
        );
    }

    Arc::new(TokenService::new(
        &config.token_secret,
        config.access_token_ttl_ms,
        config.refresh_token_ttl_ms,
    ))
}
