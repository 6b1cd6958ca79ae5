//! Domain types for project identity.

mod error;
mod key;

pub use error::ProjectDomainError;
pub use key::ProjectKey;
