mod course;
mod endpoints;
mod ids;
mod locale;
mod serde_util;
mod session;
mod toast;

pub use course::Course;
pub use endpoints::{
    DEFAULT_AUTH_URL, DEFAULT_COURSES_URL, Endpoints, EndpointsDraft, EndpointsError,
};
pub use ids::{CourseId, UserId};
pub use locale::{Locale, LocaleError};
pub use session::{Session, SessionOrigin, SessionRecordError};
pub use toast::{Toast, ToastId, ToastQueue, ToastVariant};
