use serde::{Deserialize, Serialize};

use crate::model::ids::CourseId;
use crate::model::serde_util::null_as_empty;

/// A course as listed by the course endpoint.
///
/// `progress` is only present when the catalog was fetched for a signed-in user
/// who is enrolled in the course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    #[serde(deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    duration: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    level: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    instructor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    progress: Option<u32>,
}

impl Course {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
        level: impl Into<String>,
        image_url: Option<String>,
        instructor_name: Option<String>,
        progress: Option<u32>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            duration: duration.into(),
            level: level.into(),
            image_url,
            instructor_name,
            progress,
        }
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    #[must_use]
    pub fn instructor_name(&self) -> Option<&str> {
        self.instructor_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Completion percentage, capped at 100.
    #[must_use]
    pub fn progress(&self) -> Option<u32> {
        self.progress.map(|p| p.min(100))
    }

    #[must_use]
    pub fn is_enrolled(&self) -> bool {
        self.progress.is_some()
    }
}
