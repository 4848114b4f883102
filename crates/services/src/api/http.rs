use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use edu_core::model::{Course, CourseId, Session, UserId};

use super::{AuthApi, AuthRequest, CourseApi, EnrollmentReceipt};
use crate::error::ApiError;

/// reqwest-backed client for the auth function.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    url: Url,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, ApiError> {
        debug!(action = request.action(), email = request.email(), "auth request");
        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?;

        let envelope: UserEnvelope = read_json(response).await?;
        envelope
            .user
            .validated()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// reqwest-backed client for the course function.
#[derive(Clone)]
pub struct HttpCourseApi {
    client: Client,
    url: Url,
}

impl HttpCourseApi {
    #[must_use]
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn list_courses(&self, viewer: Option<UserId>) -> Result<Vec<Course>, ApiError> {
        let mut request = self.client.get(self.url.clone());
        if let Some(user_id) = viewer {
            request = request.query(&[("user_id", user_id.value())]);
        }
        debug!(viewer = ?viewer, "loading courses");

        let envelope: CoursesEnvelope = read_json(request.send().await?).await?;
        debug!(count = envelope.courses.len(), "courses loaded");
        Ok(envelope.courses)
    }

    async fn enroll(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<EnrollmentReceipt, ApiError> {
        debug!(%user_id, %course_id, "enroll request");
        let body = EnrollBody {
            action: "enroll",
            user_id,
            course_id,
        };
        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Decode a 2xx body as `T`; turn anything else into `ApiError::Rejected`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorEnvelope>(&bytes)
            .ok()
            .and_then(|envelope| envelope.error);
        debug!(status = status.as_u16(), ?message, "request rejected");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

#[derive(Debug, Serialize)]
struct EnrollBody {
    action: &'static str,
    user_id: UserId,
    course_id: CourseId,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: Session,
}

#[derive(Debug, Deserialize)]
struct CoursesEnvelope {
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}
