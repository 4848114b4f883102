use std::collections::HashSet;

use edu_core::model::{Course, CourseId};

use crate::i18n::Strings;

/// What the action button on a course card offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollAction {
    /// Nobody is signed in.
    SignInRequired,
    Enroll,
    /// An enroll request for this card is pending.
    Enrolling,
    /// The viewer already has progress on the course.
    Continue,
}

impl EnrollAction {
    #[must_use]
    pub fn label(self, strings: &Strings) -> &'static str {
        match self {
            EnrollAction::SignInRequired => strings.action_sign_in_required,
            EnrollAction::Enroll => strings.action_enroll,
            EnrollAction::Enrolling => strings.action_enrolling,
            EnrollAction::Continue => strings.action_continue,
        }
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        !matches!(self, EnrollAction::Enroll)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: String,
    pub image_url: Option<String>,
    pub instructor: Option<String>,
    pub progress_label: Option<String>,
    pub action: EnrollAction,
}

#[must_use]
pub fn enroll_action(course: &Course, signed_in: bool, enrolling: bool) -> EnrollAction {
    if !signed_in {
        EnrollAction::SignInRequired
    } else if course.is_enrolled() {
        EnrollAction::Continue
    } else if enrolling {
        EnrollAction::Enrolling
    } else {
        EnrollAction::Enroll
    }
}

#[must_use]
pub fn map_course_cards(
    courses: &[Course],
    signed_in: bool,
    enrolling: &HashSet<CourseId>,
) -> Vec<CourseCardVm> {
    courses
        .iter()
        .map(|course| CourseCardVm {
            id: course.id(),
            title: course.title().to_string(),
            description: course.description().to_string(),
            duration: course.duration().to_string(),
            level: course.level().to_string(),
            image_url: course.image_url().map(str::to_string),
            instructor: course.instructor_name().map(str::to_string),
            progress_label: course.progress().map(|p| format!("{p}%")),
            action: enroll_action(course, signed_in, enrolling.contains(&course.id())),
        })
        .collect()
}
