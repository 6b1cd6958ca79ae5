//! Identity value object for tasks.

use super::TaskDomainError;
use crate::datastore::{Key, KeyId};
use data_encoding::BASE32_NOPAD;
use std::fmt;
use uuid::Uuid;

/// Identity of a task.
///
/// Keys compare by their normalized identifier, so a numeric id and its
/// decimal string form produce equal keys.
///
/// # Examples
///
/// ```
/// use todo_tasks::task::domain::TaskKey;
///
/// assert_eq!(TaskKey::build_by_id(7_i64), TaskKey::build_by_id("7"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskKey(KeyId);

impl TaskKey {
    /// Kind tag of stored task keys.
    pub const KIND: &'static str = "Task";

    /// Creates a key from a numeric id or a name; digit-only names become
    /// numeric ids.
    #[must_use]
    pub fn build_by_id(task_id: impl Into<KeyId>) -> Self {
        Self(task_id.into().normalized())
    }

    /// Creates a key for a task that has never been stored.
    ///
    /// The identifier is a random UUID encoded as unpadded lowercase base32,
    /// 26 characters from `[a-z2-7]`.
    #[must_use]
    pub fn build_for_new() -> Self {
        let encoded = BASE32_NOPAD.encode(Uuid::new_v4().as_bytes());
        Self(KeyId::Name(encoded.to_ascii_lowercase()))
    }

    /// Reconstructs a key from its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::KeyHasParent`] for nested keys and
    /// [`TaskDomainError::KindMismatch`] when the kind is not
    /// [`TaskKey::KIND`].
    pub fn build_from_key(key: &Key) -> Result<Self, TaskDomainError> {
        if key.parent().is_some() {
            return Err(TaskDomainError::KeyHasParent(key.to_string()));
        }
        if key.kind() != Self::KIND {
            return Err(TaskDomainError::KindMismatch(key.kind().to_owned()));
        }
        Ok(Self::build_by_id(key.id().clone()))
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn task_id(&self) -> &KeyId {
        &self.0
    }

    /// Returns the stored form of this key.
    #[must_use]
    pub fn to_key(&self) -> Key {
        Key::new(Self::KIND, self.0.clone())
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
