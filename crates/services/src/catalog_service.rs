use std::sync::Arc;

use tracing::debug;

use edu_core::model::{Course, UserId};

use crate::api::CourseApi;
use crate::error::CatalogError;

/// Loads the course list shown to the current viewer.
#[derive(Clone)]
pub struct CatalogService {
    courses: Arc<dyn CourseApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseApi>) -> Self {
        Self { courses }
    }

    /// Fetch the catalog; anonymous when `viewer` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the course endpoint fails. Callers keep their
    /// previous list in that case.
    pub async fn load(&self, viewer: Option<UserId>) -> Result<Vec<Course>, CatalogError> {
        let courses = self.courses.list_courses(viewer).await?;
        debug!(viewer = ?viewer, count = courses.len(), "catalog loaded");
        Ok(courses)
    }
}
