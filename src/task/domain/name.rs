//! Validated task name type.

use super::TaskDomainError;
use std::fmt;

/// Human-readable task name.
///
/// Names hold between 1 and [`TaskName::MAX_LENGTH`] characters and may not
/// be a lone whitespace character. Longer whitespace-only names are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    /// Maximum name length in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] for an empty value,
    /// [`TaskDomainError::TaskNameTooLong`] above 100 characters, and
    /// [`TaskDomainError::WhitespaceTaskName`] when the value is exactly one
    /// whitespace character.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let value = value.into();
        let length = value.chars().count();

        if length == 0 {
            return Err(TaskDomainError::EmptyTaskName);
        }

        if length > Self::MAX_LENGTH {
            return Err(TaskDomainError::TaskNameTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        if length == 1 && value.chars().all(is_name_whitespace) {
            return Err(TaskDomainError::WhitespaceTaskName);
        }

        Ok(Self(value))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Whitespace as the name rule sees it: Unicode whitespace plus the ASCII
/// information separators (U+001C to U+001F).
fn is_name_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl TryFrom<String> for TaskName {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TaskName {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
