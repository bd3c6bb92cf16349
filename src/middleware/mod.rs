/*
 * Responsibility
 * - Router-level middleware (auth filter, CORS, transport concerns)
 */
pub mod auth;
pub mod cors;
pub mod http;
