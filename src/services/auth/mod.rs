/*
 * Responsibility
 * - Token issuance and verification (the sole authority on token format)
 * - Claims model shared by the access filter and handlers
 */
pub mod claims;
pub mod factory;
pub mod token_service;

pub use claims::{Claims, InvalidTokenError, TokenType};
pub use factory::build_token_service;
pub use token_service::TokenService;
