use edu_core::model::ToastVariant;
use services::{EnrollmentError, SessionError};

use crate::i18n::Strings;

/// Title, body and tone for one toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl NoticeVm {
    fn info(title: &str, description: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            description,
            variant: ToastVariant::Default,
        }
    }

    fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
        }
    }
}

#[must_use]
pub fn welcome_notice(strings: &Strings, registered: bool, name: &str) -> NoticeVm {
    let title = if registered {
        strings.toast_registered
    } else {
        strings.toast_welcome_back
    };
    NoticeVm::info(title, Some(strings.greeting(name)))
}

#[must_use]
pub fn signed_out_notice(strings: &Strings) -> NoticeVm {
    NoticeVm::info(strings.toast_signed_out, None)
}

#[must_use]
pub fn enrolled_notice(strings: &Strings, message: &str) -> NoticeVm {
    let description = (!message.trim().is_empty()).then(|| message.to_string());
    NoticeVm::info(strings.toast_success, description)
}

#[must_use]
pub fn auth_required_notice(strings: &Strings) -> NoticeVm {
    NoticeVm::error(strings.toast_auth_required, strings.toast_auth_required_body)
}

/// Server messages are shown verbatim; everything else gets a generic line.
#[must_use]
pub fn session_error_notice(strings: &Strings, err: &SessionError) -> NoticeVm {
    match err {
        SessionError::Rejected(message) => NoticeVm::error(strings.toast_error, message.clone()),
        SessionError::Connectivity => NoticeVm::error(
            strings.toast_connection_error,
            strings.toast_connection_error_body,
        ),
        _ => NoticeVm::error(strings.toast_error, strings.toast_generic_error),
    }
}

#[must_use]
pub fn enrollment_error_notice(strings: &Strings, err: &EnrollmentError) -> NoticeVm {
    match err {
        EnrollmentError::AuthorizationRequired => auth_required_notice(strings),
        _ => NoticeVm::error(strings.toast_error, strings.toast_enroll_failed),
    }
}
