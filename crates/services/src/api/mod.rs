//! Contracts for the two remote functions (auth, courses).

mod http;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use edu_core::model::{Course, CourseId, Session, UserId};

use crate::error::ApiError;

pub use http::{HttpAuthApi, HttpCourseApi};

/// Body of a POST to the auth endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        full_name: String,
    },
}

impl AuthRequest {
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            AuthRequest::Login { .. } => "login",
            AuthRequest::Register { .. } => "register",
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            AuthRequest::Login { email, .. } | AuthRequest::Register { email, .. } => email,
        }
    }
}

// Passwords must never reach logs.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("action", &self.action())
            .field("email", &self.email())
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Confirmation returned by a successful enroll call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EnrollmentReceipt {
    #[serde(default)]
    pub message: String,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Submit a login or register action.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` for non-2xx responses (carrying the server's
    /// `error` message when present) and `ApiError::Connectivity` when the
    /// endpoint cannot be reached.
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, ApiError>;
}

#[async_trait]
pub trait CourseApi: Send + Sync {
    /// List courses, scoped to `viewer` when present.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status, or decode failures.
    async fn list_courses(&self, viewer: Option<UserId>) -> Result<Vec<Course>, ApiError>;

    /// Enroll `user_id` in `course_id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status, or decode failures.
    async fn enroll(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<EnrollmentReceipt, ApiError>;
}
