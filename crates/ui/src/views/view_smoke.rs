use std::sync::Arc;
use dioxus::prelude::ReadableExt;

use async_trait::async_trait;
use edu_core::model::{CourseId, UserId};
use storage::repository::{InMemoryRepository, LocalStore, Storage, StorageError};
use tokio::sync::Notify;

use super::page::PageIntent;
use super::test_harness::{
    AuthOutcome, FakeAuth, FakeCourses, PageHarness, PageHarnessBuilder, sample_course,
    sample_session,
};

const STORED_SESSION: &str =
    r#"{"id":1,"email":"a@b.com","full_name":"A B","role":"student"}"#;

fn accepting_auth() -> Arc<FakeAuth> {
    Arc::new(FakeAuth::new(AuthOutcome::Accept(sample_session())))
}

async fn signed_in_storage() -> Storage {
    let storage = Storage::in_memory();
    storage
        .local
        .set_item("user", STORED_SESSION)
        .await
        .expect("seed session");
    storage
}

/// Holds every `remove_item` until the test releases it.
struct GatedRemoval {
    inner: InMemoryRepository,
    release: Notify,
}

#[async_trait]
impl LocalStore for GatedRemoval {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<bool, StorageError> {
        self.release.notified().await;
        self.inner.remove_item(key).await
    }
}

async fn start(harness: PageHarnessBuilder) -> PageHarness {
    let mut harness = harness.build().await;
    harness.rebuild();
    harness.settle().await;
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_page_lists_courses_with_sign_in_required() {
    let courses = Arc::new(FakeCourses::with_courses(vec![sample_course(
        1,
        "Rust Basics",
        None,
    )]));
    let harness = start(PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses))).await;

    assert_eq!(courses.list_calls(), vec![None]);
    let html = harness.render();
    assert!(html.contains("Rust Basics"), "missing course in {html}");
    assert!(html.contains("Sign in required"), "missing disabled label in {html}");
    assert!(html.contains("is-disabled"), "action not disabled in {html}");
    assert!(html.contains("Sign in"), "missing sign in trigger in {html}");
    assert!(!html.contains("Hello,"), "unexpected greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn restored_session_scopes_catalog_and_shows_progress_actions() {
    let courses = Arc::new(FakeCourses::with_courses(vec![
        sample_course(1, "Rust Basics", Some(40)),
        sample_course(2, "Async Rust", None),
    ]));
    let harness = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses))
            .storage(signed_in_storage().await),
    )
    .await;

    assert_eq!(courses.list_calls(), vec![Some(UserId::new(1))]);
    let html = harness.render();
    assert!(html.contains("Hello, A B"), "missing greeting in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("Enroll"), "missing enroll in {html}");
    assert!(html.contains("40%"), "missing progress badge in {html}");
    assert!(html.contains("Sign out"), "missing sign out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_stored_session_renders_anonymous_page() {
    let storage = Storage::in_memory();
    storage
        .local
        .set_item("user", "{not json")
        .await
        .expect("seed");
    let courses = Arc::new(FakeCourses::default());
    let harness = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses)).storage(storage.clone()),
    )
    .await;

    assert_eq!(courses.list_calls(), vec![None]);
    assert_eq!(storage.local.get_item("user").await.expect("read"), None);
    let html = harness.render();
    assert!(html.contains("No courses available yet."), "missing empty text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_persists_session_and_reloads_scoped_catalog() {
    let courses = Arc::new(FakeCourses::with_courses(vec![sample_course(
        1,
        "Rust Basics",
        None,
    )]));
    let auth = accepting_auth();
    let mut harness = start(PageHarnessBuilder::new(Arc::clone(&auth), Arc::clone(&courses))).await;

    harness.dispatch(PageIntent::Login {
        email: "a@b.com".into(),
        password: "secret".into(),
    });
    harness.settle().await;

    assert_eq!(auth.requests.lock().unwrap().len(), 1);
    assert_eq!(courses.list_calls(), vec![None, Some(UserId::new(1))]);
    let stored = harness.storage.local.get_item("user").await.expect("read");
    assert!(stored.is_some_and(|raw| raw.contains("a@b.com")));
    let html = harness.render();
    assert!(html.contains("Welcome back!"), "missing welcome toast in {html}");
    assert!(html.contains("Hello, A B"), "missing greeting in {html}");
    assert!(!html.contains("Sign in required"), "still anonymous in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_login_shows_server_message_and_stays_anonymous() {
    let auth = Arc::new(FakeAuth::new(AuthOutcome::Reject {
        status: 401,
        message: "Invalid credentials".into(),
    }));
    let courses = Arc::new(FakeCourses::default());
    let mut harness = start(PageHarnessBuilder::new(auth, Arc::clone(&courses))).await;

    harness.dispatch(PageIntent::Login {
        email: "a@b.com".into(),
        password: "wrong".into(),
    });
    harness.settle().await;

    assert_eq!(harness.storage.local.get_item("user").await.expect("read"), None);
    assert_eq!(courses.list_calls(), vec![None]);
    let html = harness.render();
    assert!(html.contains("Invalid credentials"), "missing server message in {html}");
    assert!(html.contains("toast--destructive"), "toast not destructive in {html}");
    assert!(!html.contains("Hello,"), "unexpected greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_sends_full_name_and_greets_new_user() {
    let auth = accepting_auth();
    let courses = Arc::new(FakeCourses::default());
    let mut harness = start(PageHarnessBuilder::new(Arc::clone(&auth), courses)).await;

    harness.dispatch(PageIntent::Register {
        email: "a@b.com".into(),
        password: "secret".into(),
        full_name: "A B".into(),
    });
    harness.settle().await;

    let requests = auth.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].action(), "register");
    let html = harness.render();
    assert!(html.contains("Registration complete!"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn enroll_success_toasts_and_reloads_catalog_once() {
    let courses = Arc::new(FakeCourses::with_courses(vec![sample_course(
        2,
        "Async Rust",
        None,
    )]));
    let mut harness = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses))
            .storage(signed_in_storage().await),
    )
    .await;

    harness.dispatch(PageIntent::Enroll(CourseId::new(2)));
    harness.settle().await;

    assert_eq!(courses.enroll_calls(), vec![(UserId::new(1), CourseId::new(2))]);
    assert_eq!(
        courses.list_calls(),
        vec![Some(UserId::new(1)), Some(UserId::new(1))]
    );
    let state = harness.handles.state();
    assert!(harness.dom.in_runtime(|| state.enrolling.peek().is_empty()));
    let html = harness.render();
    assert!(html.contains("Success!"), "missing success toast in {html}");
    assert!(html.contains("Enrolled in the course"), "missing server message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn enroll_without_session_asks_to_sign_in() {
    let courses = Arc::new(FakeCourses::with_courses(vec![sample_course(
        2,
        "Async Rust",
        None,
    )]));
    let mut harness = start(PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses))).await;

    harness.dispatch(PageIntent::Enroll(CourseId::new(2)));
    harness.settle().await;

    assert!(courses.enroll_calls().is_empty());
    assert_eq!(courses.list_calls(), vec![None]);
    let html = harness.render();
    assert!(html.contains("Authorization required"), "missing notice in {html}");
    assert!(html.contains("Please sign in"), "missing notice body in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn logout_clears_session_everywhere() {
    let courses = Arc::new(FakeCourses::default());
    let mut harness = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses))
            .storage(signed_in_storage().await),
    )
    .await;
    assert!(harness.render().contains("Hello, A B"));

    harness.dispatch(PageIntent::Logout);
    harness.settle().await;

    assert_eq!(harness.storage.local.get_item("user").await.expect("read"), None);
    assert_eq!(courses.list_calls(), vec![Some(UserId::new(1)), None]);
    let html = harness.render();
    assert!(html.contains("You have signed out"), "missing toast in {html}");
    assert!(!html.contains("Hello,"), "greeting still shown in {html}");

    // A fresh page over the same storage starts anonymous.
    let reloaded = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::new(FakeCourses::default()))
            .storage(harness.storage.clone()),
    )
    .await;
    assert!(!reloaded.render().contains("Hello,"));
}

#[tokio::test(flavor = "current_thread")]
async fn page_stays_signed_in_until_stored_session_is_removed() {
    let gated = Arc::new(GatedRemoval {
        inner: InMemoryRepository::new(),
        release: Notify::new(),
    });
    gated
        .inner
        .set_item("user", STORED_SESSION)
        .await
        .expect("seed session");
    let local: Arc<dyn LocalStore> = gated.clone();
    let mut harness = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::new(FakeCourses::default()))
            .storage(Storage { local }),
    )
    .await;

    harness.dispatch(PageIntent::Logout);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Hello, A B"), "signed out before removal in {html}");
    assert!(!html.contains("You have signed out"), "early toast in {html}");
    assert!(gated.inner.get_item("user").await.expect("read").is_some());

    gated.release.notify_one();
    harness.settle().await;
    assert_eq!(gated.inner.get_item("user").await.expect("read"), None);
    let html = harness.render();
    assert!(!html.contains("Hello,"), "greeting still shown in {html}");
    assert!(html.contains("You have signed out"), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_catalog_reload_keeps_previous_cards_quietly() {
    let courses = Arc::new(FakeCourses::with_courses(vec![
        sample_course(1, "Rust Basics", Some(40)),
        sample_course(2, "Async Rust", None),
    ]));
    let mut harness = start(
        PageHarnessBuilder::new(accepting_auth(), Arc::clone(&courses))
            .storage(signed_in_storage().await),
    )
    .await;
    assert!(harness.render().contains("Async Rust"));

    courses.set_listing_fails(true);
    harness.dispatch(PageIntent::Enroll(CourseId::new(2)));
    harness.settle().await;

    assert_eq!(
        courses.list_calls(),
        vec![Some(UserId::new(1)), Some(UserId::new(1))]
    );
    let state = harness.handles.state();
    let kept = harness
        .dom
        .in_runtime(|| state.courses.peek().as_ref().map(Vec::len));
    assert_eq!(kept, Some(2));
    let html = harness.render();
    assert!(html.contains("Rust Basics"), "previous cards dropped in {html}");
    assert!(html.contains("Async Rust"), "previous cards dropped in {html}");
    assert!(html.contains("40%"), "progress badge dropped in {html}");
    assert!(!html.contains("toast--destructive"), "load failure surfaced in {html}");
    assert!(!html.contains("Connection error"), "load failure surfaced in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dismissed_toast_disappears() {
    let mut harness = start(PageHarnessBuilder::new(
        accepting_auth(),
        Arc::new(FakeCourses::default()),
    ))
    .await;

    harness.dispatch(PageIntent::Enroll(CourseId::new(9)));
    harness.settle().await;
    let toaster = harness.handles.state().toaster;
    let toast_id = harness
        .dom
        .in_runtime(|| toaster.queue().peek().latest().map(|toast| toast.id()))
        .expect("toast shown");

    harness.dispatch(PageIntent::DismissToast(toast_id));
    harness.settle().await;
    assert!(!harness.render().contains("Authorization required"));
}

#[tokio::test(flavor = "current_thread")]
async fn static_sections_render() {
    let harness = start(PageHarnessBuilder::new(
        accepting_auth(),
        Arc::new(FakeCourses::default()),
    ))
    .await;

    let html = harness.render();
    for needle in [
        "Start learning",
        "Learn more",
        "About the platform",
        "Certificates",
        "Frequently asked questions",
        "Can I get a certificate?",
        "info@eduplatform.ru",
        "All rights reserved.",
    ] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
    // Accordion starts collapsed.
    assert!(!html.contains("official certificate"), "answer expanded in {html}");
}
