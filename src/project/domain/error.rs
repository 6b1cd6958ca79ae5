//! Error types for project key reconstruction.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The stored key is nested under a parent key.
    #[error("project key must not have a parent: {0}")]
    KeyHasParent(String),

    /// The stored key has a kind other than `Project`.
    #[error("project key kind must equal Project: {0}")]
    KindMismatch(String),
}
