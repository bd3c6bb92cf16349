/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone-cheap: services are held behind Arc
 */
use std::sync::Arc;

use crate::services::auth::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}
