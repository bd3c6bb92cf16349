/*
 * Responsibility
 * - The "authenticated caller" type handlers receive
 * - The access filter verifies the token and stores this in request
 *   extensions; handlers only ever see this type
 */

use uuid::Uuid;

/// Identity established for the current request.
///
/// Immutable value decoded from verified claims; never persisted. A request
/// either carries one (authenticated) or it does not; the filter sets it at
/// most once and nothing removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn new(user_id: Uuid, email: String, role: String) -> Self {
        Self {
            user_id,
            email,
            role,
        }
    }

    /// Role marker consumed by role-based access checks: upper-cased and
    /// `ROLE_`-prefixed (`seller` → `ROLE_SELLER`).
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.role.to_uppercase())
    }
}
