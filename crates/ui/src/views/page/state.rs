use std::collections::HashSet;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use edu_core::Clock;
use edu_core::model::{Course, CourseId, Session, SessionOrigin, ToastId, ToastQueue};
use services::{CatalogService, EnrollmentService, SessionService};

use crate::context::AppContext;
use crate::i18n::Strings;
use crate::vm::NoticeVm;

/// Services the page talks to, cloned out of `AppContext`.
#[derive(Clone)]
pub struct PageServices {
    pub sessions: Arc<SessionService>,
    pub catalog: Arc<CatalogService>,
    pub enrollment: Arc<EnrollmentService>,
}

impl PageServices {
    #[must_use]
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            sessions: ctx.sessions(),
            catalog: ctx.catalog(),
            enrollment: ctx.enrollment(),
        }
    }
}

/// Pushes notices onto the page toast queue.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
    clock: Clock,
}

impl Toaster {
    pub fn show(&self, notice: NoticeVm) -> ToastId {
        let mut queue = self.queue;
        let now = self.clock.now();
        queue
            .write()
            .push(notice.title, notice.description, notice.variant, now)
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    /// Drops expired toasts; leaves the signal untouched when nothing expired.
    pub fn prune(&self) {
        let mut queue = self.queue;
        let mut next = queue.peek().clone();
        if next.prune_expired(self.clock.now()) > 0 {
            queue.set(next);
        }
    }

    #[must_use]
    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }
}

/// Who is signed in, and how that came about.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: Signal<Option<Session>>,
    pub origin: Signal<Option<SessionOrigin>>,
}

impl SessionContext {
    pub fn sign_in(&self, session: Session, origin: SessionOrigin) {
        let mut current = self.session;
        let mut current_origin = self.origin;
        current.set(Some(session));
        current_origin.set(Some(origin));
    }

    pub fn sign_out(&self) {
        let mut current = self.session;
        let mut current_origin = self.origin;
        current.set(None);
        current_origin.set(None);
    }
}

/// Shared page state, owned by `PageShell` and handed to children via context.
#[derive(Clone, Copy)]
pub struct PageState {
    pub strings: &'static Strings,
    pub session: SessionContext,
    pub toaster: Toaster,
    /// `None` until the first catalog load completes.
    pub courses: Signal<Option<Vec<Course>>>,
    pub enrolling: Signal<HashSet<CourseId>>,
    pub catalog_resource: Resource<()>,
}

pub fn use_page_state(ctx: &AppContext, services: &PageServices) -> PageState {
    let strings = ctx.strings();
    let clock = ctx.clock();
    let restored = ctx.restored_session();

    let session = use_signal(|| restored.clone());
    let origin = use_signal(|| restored.as_ref().map(|_| SessionOrigin::Restored));
    let session = SessionContext { session, origin };

    let queue = use_signal(ToastQueue::default);
    let toaster = Toaster { queue, clock };

    let courses = use_signal(|| None::<Vec<Course>>);
    let enrolling = use_signal(HashSet::<CourseId>::new);

    // Re-runs whenever the signed-in identity changes.
    let viewer = use_memo(move || session.session.read().as_ref().map(Session::id));
    let catalog = Arc::clone(&services.catalog);
    let catalog_resource = use_resource(move || {
        let catalog = Arc::clone(&catalog);
        let viewer = viewer();
        let origin = *session.origin.peek();
        let mut courses = courses;
        async move {
            match catalog.load(viewer).await {
                Ok(list) => {
                    debug!(viewer = ?viewer, origin = ?origin, count = list.len(), "catalog applied to page");
                    courses.set(Some(list));
                }
                Err(err) => {
                    warn!(viewer = ?viewer, origin = ?origin, error = %err, "catalog load failed; keeping previous list");
                    if courses.peek().is_none() {
                        courses.set(Some(Vec::new()));
                    }
                }
            }
        }
    });

    PageState {
        strings,
        session,
        toaster,
        courses,
        enrolling,
        catalog_resource,
    }
}
