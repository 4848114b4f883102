use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::{debug, warn};

use edu_core::model::{CourseId, SessionOrigin, ToastId};
use services::EnrollmentError;

use crate::vm::{
    Section, enrolled_notice, enrollment_error_notice, session_error_notice, signed_out_notice,
    welcome_notice,
};

use super::super::scripts::scroll_to_section_script;
use super::state::{PageServices, PageState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageIntent {
    Login {
        email: String,
        password: String,
    },
    Register {
        email: String,
        password: String,
        full_name: String,
    },
    Logout,
    Enroll(CourseId),
    DismissToast(ToastId),
    ScrollTo(Section),
}

#[derive(Clone, Copy)]
pub struct PageDispatcher {
    pub dispatch: Callback<PageIntent>,
}

pub fn use_page_dispatcher(state: PageState, services: &PageServices) -> PageDispatcher {
    let auth_action = build_auth_action(state, services);
    let logout_action = build_logout_action(state, services);
    let enroll_action = build_enroll_action(state, services);

    let dispatch = use_callback(move |intent: PageIntent| match intent {
        PageIntent::Login { .. } | PageIntent::Register { .. } => auth_action.call(intent),
        PageIntent::Logout => logout_action.call(()),
        PageIntent::Enroll(course_id) => enroll_action.call(course_id),
        PageIntent::DismissToast(id) => state.toaster.dismiss(id),
        PageIntent::ScrollTo(section) => {
            let _ = eval(&scroll_to_section_script(section.anchor_id()));
        }
    });

    PageDispatcher { dispatch }
}

fn build_auth_action(state: PageState, services: &PageServices) -> Callback<PageIntent> {
    let sessions = services.sessions.clone();
    use_callback(move |intent: PageIntent| {
        let sessions = sessions.clone();
        spawn(async move {
            let (result, registered) = match &intent {
                PageIntent::Login { email, password } => {
                    (sessions.login(email, password).await, false)
                }
                PageIntent::Register {
                    email,
                    password,
                    full_name,
                } => (sessions.register(email, password, full_name).await, true),
                _ => return,
            };
            match result {
                Ok(session) => {
                    let notice = welcome_notice(state.strings, registered, session.display_name());
                    state.session.sign_in(session, SessionOrigin::Authenticated);
                    state.toaster.show(notice);
                }
                Err(err) => {
                    state.toaster.show(session_error_notice(state.strings, &err));
                }
            }
        });
    })
}

fn build_logout_action(state: PageState, services: &PageServices) -> Callback<()> {
    let sessions = services.sessions.clone();
    use_callback(move |()| {
        let sessions = sessions.clone();
        spawn(async move {
            // Persisted record is removed before the page shows the signed-out state.
            if let Err(err) = sessions.logout().await {
                warn!(error = %err, "failed to clear persisted session");
            }
            state.session.sign_out();
            state.toaster.show(signed_out_notice(state.strings));
        });
    })
}

fn build_enroll_action(state: PageState, services: &PageServices) -> Callback<CourseId> {
    let enrollment = services.enrollment.clone();
    use_callback(move |course_id: CourseId| {
        let current = state.session.session.peek().clone();
        if state.enrolling.peek().contains(&course_id) {
            debug!(%course_id, "enroll already pending");
            return;
        }
        let enrollment = enrollment.clone();
        let mut enrolling = state.enrolling;
        let mut catalog_resource = state.catalog_resource;
        spawn(async move {
            if current.is_some() {
                enrolling.write().insert(course_id);
            }
            let result = enrollment.enroll(current.as_ref(), course_id).await;
            enrolling.write().remove(&course_id);
            match result {
                Ok(receipt) => {
                    state
                        .toaster
                        .show(enrolled_notice(state.strings, &receipt.message));
                    catalog_resource.restart();
                }
                Err(EnrollmentError::InFlight) => debug!(%course_id, "enroll already pending"),
                Err(err) => {
                    state
                        .toaster
                        .show(enrollment_error_notice(state.strings, &err));
                }
            }
        });
    })
}
