//! Error types for task domain validation.

use crate::project::domain::ProjectDomainError;
use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty.
    #[error("task name must be present")]
    EmptyTaskName,

    /// The task name exceeds the maximum length.
    #[error("task name is too long (maximum length is {max}, got {length})")]
    TaskNameTooLong {
        /// Length of the rejected name in characters.
        length: usize,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The task name is a single whitespace character.
    #[error("a lone whitespace character cannot be used as a task name")]
    WhitespaceTaskName,

    /// The stored key is nested under a parent key.
    #[error("task key must not have a parent: {0}")]
    KeyHasParent(String),

    /// The stored key has a kind other than `Task`.
    #[error("task key kind must equal Task: {0}")]
    KindMismatch(String),

    /// A stored field holds a value of the wrong type.
    #[error("field '{field}' must be {expected}, found {found}")]
    TypeValidation {
        /// Name of the offending field.
        field: &'static str,
        /// Expected value type.
        expected: &'static str,
        /// Actual value type.
        found: &'static str,
    },

    /// A required stored field is absent.
    #[error("field '{0}' is missing")]
    MissingField(&'static str),

    /// The referenced project key is malformed.
    #[error(transparent)]
    Project(#[from] ProjectDomainError),
}
