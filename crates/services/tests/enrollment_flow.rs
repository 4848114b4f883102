use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use edu_core::model::{Course, CourseId, Session, UserId};
use services::{
    ApiError, CatalogService, CourseApi, EnrollmentError, EnrollmentReceipt, EnrollmentService,
};
use tokio::sync::Notify;

/// Course API double; `enroll` blocks until `release` is notified when gated.
struct GatedCourses {
    list_calls: AtomicUsize,
    enroll_calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
    fail_enroll: bool,
}

impl GatedCourses {
    fn open() -> Arc<Self> {
        Arc::new(Self {
            list_calls: AtomicUsize::new(0),
            enroll_calls: AtomicUsize::new(0),
            gate: None,
            fail_enroll: false,
        })
    }
}

#[async_trait]
impl CourseApi for GatedCourses {
    async fn list_courses(&self, viewer: Option<UserId>) -> Result<Vec<Course>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let progress = viewer.map(|_| 0);
        Ok(vec![Course::new(
            CourseId::new(1),
            "Rust",
            "Systems programming",
            "6 weeks",
            "Beginner",
            None,
            Some("Ann".into()),
            progress,
        )])
    }

    async fn enroll(
        &self,
        _user_id: UserId,
        _course_id: CourseId,
    ) -> Result<EnrollmentReceipt, ApiError> {
        self.enroll_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_enroll {
            return Err(ApiError::Rejected {
                status: 500,
                message: None,
            });
        }
        Ok(EnrollmentReceipt {
            message: "Enrolled".into(),
        })
    }
}

fn student() -> Session {
    Session::new(UserId::new(9), "s@x.io", "S", "student", None).unwrap()
}

#[tokio::test]
async fn enroll_without_session_makes_no_request() {
    let api = GatedCourses::open();
    let service = EnrollmentService::new(api.clone());

    let err = service.enroll(None, CourseId::new(1)).await.unwrap_err();
    assert!(matches!(err, EnrollmentError::AuthorizationRequired));
    assert_eq!(api.enroll_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn enroll_returns_server_message() {
    let api = GatedCourses::open();
    let service = EnrollmentService::new(api.clone());
    let session = student();

    let receipt = service
        .enroll(Some(&session), CourseId::new(1))
        .await
        .expect("enroll");
    assert_eq!(receipt.message, "Enrolled");
    assert!(!service.is_in_flight(session.id(), CourseId::new(1)));
}

#[tokio::test]
async fn failed_enroll_releases_the_in_flight_slot() {
    let api = Arc::new(GatedCourses {
        list_calls: AtomicUsize::new(0),
        enroll_calls: AtomicUsize::new(0),
        gate: None,
        fail_enroll: true,
    });
    let service = EnrollmentService::new(api.clone());
    let session = student();

    let err = service
        .enroll(Some(&session), CourseId::new(1))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::Api(_)));
    assert!(!service.is_in_flight(session.id(), CourseId::new(1)));
}

#[tokio::test]
async fn duplicate_enroll_is_rejected_while_first_is_pending() {
    let gate = Arc::new(Notify::new());
    let api = Arc::new(GatedCourses {
        list_calls: AtomicUsize::new(0),
        enroll_calls: AtomicUsize::new(0),
        gate: Some(Arc::clone(&gate)),
        fail_enroll: false,
    });
    let service = EnrollmentService::new(api.clone());
    let session = student();

    let first = {
        let service = service.clone();
        let session = session.clone();
        tokio::spawn(async move { service.enroll(Some(&session), CourseId::new(1)).await })
    };

    while !service.is_in_flight(session.id(), CourseId::new(1)) {
        tokio::task::yield_now().await;
    }

    let second = service.enroll(Some(&session), CourseId::new(1)).await;
    assert!(matches!(second, Err(EnrollmentError::InFlight)));

    // A different course is not blocked by the pending one.
    assert!(!service.is_in_flight(session.id(), CourseId::new(2)));

    gate.notify_one();
    first.await.unwrap().expect("first enroll");
    assert_eq!(api.enroll_calls.load(Ordering::SeqCst), 1);
    assert!(!service.is_in_flight(session.id(), CourseId::new(1)));
}

#[tokio::test]
async fn catalog_is_scoped_by_viewer() {
    let api = GatedCourses::open();
    let catalog = CatalogService::new(api.clone());

    let anonymous = catalog.load(None).await.expect("anonymous");
    assert!(anonymous.iter().all(|course| course.progress().is_none()));

    let scoped = catalog.load(Some(UserId::new(9))).await.expect("scoped");
    assert!(scoped.iter().all(Course::is_enrolled));
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
}
