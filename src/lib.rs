//! Authentication subsystem of the marketplace backend.
//!
//! Two components carry all the non-trivial logic:
//! - [`services::auth::TokenService`] issues and verifies signed session
//!   tokens (access + refresh).
//! - [`middleware::auth::access`] converts a valid bearer token into a
//!   request-scoped [`api::v1::extractors::Identity`].
//!
//! Everything else is wiring: config, error envelope, routes, extractors.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
