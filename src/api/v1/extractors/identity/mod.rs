/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - Provide the request's authenticated Identity to handlers
 * - HTTP / axum wiring lives in core; the value type lives in types
 *
 * Public API:
 * - Identity
 * - IdentityExtractor
 * - MaybeIdentity
 */

mod core;
mod types;

pub use self::core::{IdentityExtractor, MaybeIdentity};
pub use self::types::Identity;
