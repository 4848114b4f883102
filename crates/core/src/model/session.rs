use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::UserId;
use crate::model::serde_util::null_as_empty;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionRecordError {
    #[error("session email cannot be empty")]
    EmptyEmail,
}

/// Client-held record of the authenticated user.
///
/// This is exactly the `user` object returned by the auth endpoint, and also the
/// shape written to local storage. Extra fields sent by the server are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: UserId,
    email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

impl Session {
    /// Creates a session record.
    ///
    /// # Errors
    ///
    /// Returns `SessionRecordError::EmptyEmail` if the email is blank.
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        full_name: impl Into<String>,
        role: impl Into<String>,
        avatar_url: Option<String>,
    ) -> Result<Self, SessionRecordError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(SessionRecordError::EmptyEmail);
        }
        Ok(Self {
            id,
            email,
            full_name: full_name.into(),
            role: role.into(),
            avatar_url: avatar_url.filter(|url| !url.trim().is_empty()),
        })
    }

    /// Re-check invariants on a record that came from outside (server or disk).
    ///
    /// # Errors
    ///
    /// Returns `SessionRecordError` when the record violates `Session::new` rules.
    pub fn validated(self) -> Result<Self, SessionRecordError> {
        Self::new(self.id, self.email, self.full_name, self.role, self.avatar_url)
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Name to greet the user with; falls back to the email when the server sent no name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

/// Where the active session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Returned by the auth endpoint during this run.
    Authenticated,
    /// Read back from local storage without server validation.
    Restored,
}
