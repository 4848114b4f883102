//! Shared error types for the services crate.

use thiserror::Error;

use edu_core::model::EndpointsError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the remote auth/course clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Connectivity(String),
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// The server's `error` field, when it sent one.
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Connectivity(err.to_string())
        }
    }
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// Business/validation error with the server's message, shown verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("could not reach the auth server")]
    Connectivity,
    #[error("auth server returned an unexpected response")]
    UnexpectedResponse,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Self::Rejected(message),
            ApiError::Connectivity(_) => Self::Connectivity,
            ApiError::Rejected { .. } | ApiError::Decode(_) => Self::UnexpectedResponse,
        }
    }
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `EnrollmentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnrollmentError {
    #[error("sign in to enroll")]
    AuthorizationRequired,
    #[error("an enrollment for this course is already in progress")]
    InFlight,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Endpoints(#[from] EndpointsError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
