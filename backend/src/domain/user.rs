//! User data model.
//!
//! Users are owned by the identity subsystem. This backend only reads them
//! to resolve the acting user of a translator creation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the user identifier constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NonPositiveId { value: i64 },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId { value } => {
                write!(f, "user id must be a positive integer, got {value}")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier, as issued by the identity store.
///
/// # Examples
/// ```
/// use translator_backend::domain::UserId;
///
/// let id = UserId::new(7).expect("positive id");
/// assert_eq!(id.get(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(value: i64) -> Result<Self, UserValidationError> {
        if value <= 0 {
            return Err(UserValidationError::NonPositiveId { value });
        }
        Ok(Self(value))
    }

    /// Access the raw identifier.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered application user.
///
/// Profile fields belong to the identity store and are carried as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    user_name: String,
    email: String,
}

impl User {
    pub fn new(id: UserId, user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            email: email.into(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login name.
    pub fn user_name(&self) -> &str {
        self.user_name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn rejects_non_positive_ids(#[case] raw: i64) {
        assert_eq!(
            UserId::new(raw),
            Err(UserValidationError::NonPositiveId { value: raw })
        );
    }

    #[rstest]
    fn user_id_deserialises_from_integer() {
        let id: UserId = serde_json::from_str("42").expect("valid id");
        assert_eq!(id.get(), 42);
        assert!(serde_json::from_str::<UserId>("-1").is_err());
    }

    #[rstest]
    fn user_keeps_blank_profile_fields() {
        let id = UserId::new(1).expect("valid id");
        let user = User::new(id, "", "  ");
        assert_eq!(user.id(), id);
        assert_eq!(user.user_name(), "");
        assert_eq!(user.email(), "  ");
    }
}
