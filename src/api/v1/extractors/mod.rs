pub mod identity;

pub use identity::{Identity, IdentityExtractor, MaybeIdentity};
