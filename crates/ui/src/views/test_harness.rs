use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use edu_core::model::{Course, CourseId, Locale, Session, UserId};
use edu_core::time::fixed_clock;
use edu_core::Clock;
use services::{
    ApiError, AppServices, AuthApi, AuthRequest, CatalogService, CourseApi, EnrollmentReceipt,
    EnrollmentService, SessionService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::page::{PageIntent, PageTestHandles};

pub enum AuthOutcome {
    Accept(Session),
    Reject { status: u16, message: String },
}

pub struct FakeAuth {
    outcome: AuthOutcome,
    pub requests: Mutex<Vec<AuthRequest>>,
}

impl FakeAuth {
    pub fn new(outcome: AuthOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Session, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            AuthOutcome::Accept(session) => Ok(session.clone()),
            AuthOutcome::Reject { status, message } => Err(ApiError::Rejected {
                status: *status,
                message: Some(message.clone()),
            }),
        }
    }
}

#[derive(Default)]
pub struct FakeCourses {
    pub courses: Mutex<Vec<Course>>,
    pub list_calls: Mutex<Vec<Option<UserId>>>,
    pub enroll_calls: Mutex<Vec<(UserId, CourseId)>>,
    listing_fails: AtomicBool,
}

impl FakeCourses {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Mutex::new(courses),
            ..Self::default()
        }
    }

    /// Makes later `list_courses` calls fail as if the server were unreachable.
    pub fn set_listing_fails(&self, fails: bool) {
        self.listing_fails.store(fails, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> Vec<Option<UserId>> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn enroll_calls(&self) -> Vec<(UserId, CourseId)> {
        self.enroll_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CourseApi for FakeCourses {
    async fn list_courses(&self, viewer: Option<UserId>) -> Result<Vec<Course>, ApiError> {
        self.list_calls.lock().unwrap().push(viewer);
        if self.listing_fails.load(Ordering::SeqCst) {
            return Err(ApiError::Connectivity("connection refused".to_string()));
        }
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn enroll(
        &self,
        user_id: UserId,
        course_id: CourseId,
    ) -> Result<EnrollmentReceipt, ApiError> {
        self.enroll_calls.lock().unwrap().push((user_id, course_id));
        Ok(EnrollmentReceipt {
            message: "Enrolled in the course".to_string(),
        })
    }
}

#[derive(Clone)]
struct TestApp {
    restored_session: Option<Session>,
    services: AppServices,
}

impl UiApp for TestApp {
    fn locale(&self) -> Locale {
        Locale::En
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn restored_session(&self) -> Option<Session> {
        self.restored_session.clone()
    }

    fn sessions(&self) -> Arc<SessionService> {
        self.services.sessions()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn enrollment(&self) -> Arc<EnrollmentService> {
        self.services.enrollment()
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: PageTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn PageHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<Route> {} }
}

pub struct PageHarnessBuilder {
    storage: Storage,
    auth: Arc<FakeAuth>,
    courses: Arc<FakeCourses>,
}

impl PageHarnessBuilder {
    pub fn new(auth: Arc<FakeAuth>, courses: Arc<FakeCourses>) -> Self {
        Self {
            storage: Storage::in_memory(),
            auth,
            courses,
        }
    }

    pub fn storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }

    /// Restores the persisted session the same way the app binary does.
    pub async fn build(self) -> PageHarness {
        let services = AppServices::new(&self.storage, self.auth, self.courses);
        let restored_session = services
            .restore_session()
            .await
            .expect("restore session");
        let handles = PageTestHandles::default();
        let app = Arc::new(TestApp {
            restored_session,
            services,
        });
        let dom = VirtualDom::new_with_props(
            PageHarness,
            HarnessProps {
                app,
                handles: handles.clone(),
            },
        );
        PageHarness {
            dom,
            storage: self.storage,
            handles,
        }
    }
}

pub struct PageHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub handles: PageTestHandles,
}

impl PageHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Lets spawned tasks and resources finish.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: PageIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_session() -> Session {
    Session::new(UserId::new(1), "a@b.com", "A B", "student", None).expect("valid session")
}

pub fn sample_course(id: u64, title: &str, progress: Option<u32>) -> Course {
    Course::new(
        CourseId::new(id),
        title,
        "Learn the basics",
        "6 weeks",
        "Beginner",
        None,
        Some("Ann Lee".to_string()),
        progress,
    )
}
