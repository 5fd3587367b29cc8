//! User domain types

use serde::{Deserialize, Serialize};

/// User identifier, assigned by the store
pub type UserId = i64;

/// A persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Store-assigned identifier, immutable once created
    pub id: UserId,

    /// Contact address (not unique)
    pub email: String,

    /// Given name, never empty
    pub first_name: String,

    /// Family name, never empty
    pub last_name: String,

    /// Avatar URL or opaque reference
    pub avatar: Option<String>,
}

/// A validated create request; carries no `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

impl NewUser {
    /// Build a create request without an avatar
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            avatar: None,
        }
    }

    /// Set the avatar
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Attach the assigned id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: self.avatar,
        }
    }
}

/// A validated partial update
///
/// `None` means "leave unchanged". For `avatar` the inner option
/// distinguishes clearing (`Some(None)`) from not touching it (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<Option<String>>,
}

impl UserChanges {
    /// True when the update would not modify anything
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar.is_none()
    }
}
