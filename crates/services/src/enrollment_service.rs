use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use edu_core::model::{CourseId, Session, UserId};

use crate::api::{CourseApi, EnrollmentReceipt};
use crate::error::EnrollmentError;

type InFlightSet = Arc<Mutex<HashSet<(UserId, CourseId)>>>;

/// Enrolls the signed-in user in a course.
///
/// At most one request per (user, course) pair is outstanding at a time.
#[derive(Clone)]
pub struct EnrollmentService {
    courses: Arc<dyn CourseApi>,
    in_flight: InFlightSet,
}

impl EnrollmentService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseApi>) -> Self {
        Self {
            courses,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Enroll the session's user in `course_id`.
    ///
    /// # Errors
    ///
    /// - `EnrollmentError::AuthorizationRequired` when `session` is `None` (no request is made).
    /// - `EnrollmentError::InFlight` when the same enrollment is already pending.
    /// - `EnrollmentError::Api` when the course endpoint fails.
    pub async fn enroll(
        &self,
        session: Option<&Session>,
        course_id: CourseId,
    ) -> Result<EnrollmentReceipt, EnrollmentError> {
        let Some(session) = session else {
            debug!(%course_id, "enroll without session");
            return Err(EnrollmentError::AuthorizationRequired);
        };
        let user_id = session.id();

        let _guard = InFlightGuard::acquire(&self.in_flight, (user_id, course_id))
            .ok_or(EnrollmentError::InFlight)?;

        match self.courses.enroll(user_id, course_id).await {
            Ok(receipt) => {
                info!(%user_id, %course_id, "enrolled");
                Ok(receipt)
            }
            Err(err) => {
                warn!(%user_id, %course_id, error = %err, "enrollment failed");
                Err(err.into())
            }
        }
    }

    #[must_use]
    pub fn is_in_flight(&self, user_id: UserId, course_id: CourseId) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(user_id, course_id))
    }
}

struct InFlightGuard {
    set: InFlightSet,
    key: (UserId, CourseId),
}

impl InFlightGuard {
    fn acquire(set: &InFlightSet, key: (UserId, CourseId)) -> Option<Self> {
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key);
        inserted.then(|| Self {
            set: Arc::clone(set),
            key,
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
