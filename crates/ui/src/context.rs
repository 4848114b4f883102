use std::sync::Arc;

use edu_core::Clock;
use edu_core::model::{Locale, Session};
use services::{CatalogService, EnrollmentService, SessionService};

use crate::i18n::{Strings, strings};

pub trait UiApp: Send + Sync {
    fn locale(&self) -> Locale;
    fn clock(&self) -> Clock;
    /// Session read from local storage before the window opened.
    fn restored_session(&self) -> Option<Session>;

    fn sessions(&self) -> Arc<SessionService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn enrollment(&self) -> Arc<EnrollmentService>;
}

#[derive(Clone)]
pub struct AppContext {
    locale: Locale,
    clock: Clock,
    restored_session: Option<Session>,

    sessions: Arc<SessionService>,
    catalog: Arc<CatalogService>,
    enrollment: Arc<EnrollmentService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            locale: app.locale(),
            clock: app.clock(),
            restored_session: app.restored_session(),
            sessions: app.sessions(),
            catalog: app.catalog(),
            enrollment: app.enrollment(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        strings(self.locale)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn restored_session(&self) -> Option<Session> {
        self.restored_session.clone()
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
