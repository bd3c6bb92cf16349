/*
 * Responsibility
 * - v1 URL structure
 * - /health, /auth/refresh and /session are public; /me requires an identity
 *   (the access filter itself never rejects; extractors do)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{health::health, me::me, session::session, token::refresh};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/refresh", post(refresh))
        .route("/session", get(session))
        .route("/me", get(me))
}
