//! Entity keys addressing documents in the store.
//!
//! A key is a kind tag plus an identifier, optionally nested under a parent
//! key. Keys order by kind, then identifier (numeric identifiers before
//! names), then parent, which is also the order queries return entities in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier part of a [`Key`]: either a numeric id or a string name.
///
/// # Examples
///
/// ```
/// use todo_tasks::datastore::KeyId;
///
/// assert_eq!(KeyId::from("42").normalized(), KeyId::Id(42));
/// assert_eq!(KeyId::from("abc").normalized(), KeyId::from("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyId {
    /// Numeric identifier.
    Id(i64),
    /// Opaque string identifier.
    Name(String),
}

impl KeyId {
    /// Converts a name made only of ASCII digits into a numeric identifier.
    ///
    /// Only `0`-`9` count as digits; names written in other decimal scripts
    /// (for example `"١٢"`) stay names. Names that do not fit in an `i64`
    /// are left untouched.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Name(name) if is_digit_only(&name) => match name.parse::<i64>() {
                Ok(id) => Self::Id(id),
                Err(_) => Self::Name(name),
            },
            other => other,
        }
    }

    /// Returns the numeric identifier, if this is one.
    #[must_use]
    pub const fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }

    /// Returns the string name, if this is one.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

fn is_digit_only(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

impl From<i64> for KeyId {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

impl From<String> for KeyId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<&str> for KeyId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Address of a stored entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    kind: String,
    id: KeyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Box<Key>>,
}

impl Key {
    /// Creates a root-level key.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<KeyId>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            parent: None,
        }
    }

    /// Nests this key under `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: Self) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Returns the kind tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &KeyId {
        &self.id
    }

    /// Returns the parent key, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent() {
            write!(f, "{parent}/")?;
        }
        write!(f, "{}({})", self.kind, self.id)
    }
}
