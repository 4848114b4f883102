use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use edu_core::model::{EndpointsDraft, Session};
use storage::repository::Storage;

use crate::api::{AuthApi, CourseApi, HttpAuthApi, HttpCourseApi};
use crate::catalog_service::CatalogService;
use crate::enrollment_service::EnrollmentService;
use crate::error::{AppServicesError, SessionError};
use crate::session_service::SessionService;

/// Assembles app-facing services over one storage backend and two APIs.
#[derive(Clone)]
pub struct AppServices {
    sessions: Arc<SessionService>,
    catalog: Arc<CatalogService>,
    enrollment: Arc<EnrollmentService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, auth: Arc<dyn AuthApi>, courses: Arc<dyn CourseApi>) -> Self {
        Self {
            sessions: Arc::new(SessionService::new(auth, Arc::clone(&storage.local))),
            catalog: Arc::new(CatalogService::new(Arc::clone(&courses))),
            enrollment: Arc::new(EnrollmentService::new(courses)),
        }
    }

    /// Build services talking HTTP to the endpoints in `draft`; unset ones use the
    /// production functions.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Endpoints` if an override is not an http(s) URL,
    /// or `AppServicesError::HttpClient` if the HTTP client cannot be built.
    pub fn http(storage: &Storage, draft: EndpointsDraft) -> Result<Self, AppServicesError> {
        let endpoints = draft.validate()?;
        info!(auth = %endpoints.auth(), courses = %endpoints.courses(), "using remote endpoints");
        let client = Client::builder()
            .user_agent(concat!("eduplatform/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let auth: Arc<dyn AuthApi> =
            Arc::new(HttpAuthApi::new(client.clone(), endpoints.auth().clone()));
        let courses: Arc<dyn CourseApi> =
            Arc::new(HttpCourseApi::new(client, endpoints.courses().clone()));
        Ok(Self::new(storage, auth, courses))
    }

    /// Open `SQLite` local storage at `db_url` and build HTTP services.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or client setup fails.
    pub async fn new_sqlite(
        db_url: &str,
        endpoints: EndpointsDraft,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::http(&storage, endpoints)
    }

    /// Restore the persisted session before the UI starts.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if local storage cannot be read.
    pub async fn restore_session(&self) -> Result<Option<Session>, SessionError> {
        self.sessions.restore().await
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn enrollment(&self) -> Arc<EnrollmentService> {
        Arc::clone(&self.enrollment)
    }
}
