//! Identity value object for projects.

use super::ProjectDomainError;
use crate::datastore::{Key, KeyId};
use std::fmt;

/// Identity of a project, referenced weakly by tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectKey(KeyId);

impl ProjectKey {
    /// Kind tag of stored project keys.
    pub const KIND: &'static str = "Project";

    /// Creates a key from a numeric id or a name; digit-only names become
    /// numeric ids.
    #[must_use]
    pub fn build_by_id(project_id: impl Into<KeyId>) -> Self {
        Self(project_id.into().normalized())
    }

    /// Reconstructs a key from its stored form.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::KeyHasParent`] for nested keys and
    /// [`ProjectDomainError::KindMismatch`] when the kind is not
    /// [`ProjectKey::KIND`].
    pub fn build_from_key(key: &Key) -> Result<Self, ProjectDomainError> {
        if key.parent().is_some() {
            return Err(ProjectDomainError::KeyHasParent(key.to_string()));
        }
        if key.kind() != Self::KIND {
            return Err(ProjectDomainError::KindMismatch(key.kind().to_owned()));
        }
        Ok(Self::build_by_id(key.id().clone()))
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn project_id(&self) -> &KeyId {
        &self.0
    }

    /// Returns the stored form of this key.
    #[must_use]
    pub fn to_key(&self) -> Key {
        Key::new(Self::KIND, self.0.clone())
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
