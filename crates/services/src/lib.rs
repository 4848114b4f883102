#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod catalog_service;
pub mod config;
pub mod enrollment_service;
pub mod error;
pub mod session_service;

pub use edu_core::Clock;

pub use api::{AuthApi, AuthRequest, CourseApi, EnrollmentReceipt, HttpAuthApi, HttpCourseApi};
pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use config::endpoints_from_env;
pub use enrollment_service::EnrollmentService;
pub use error::{ApiError, AppServicesError, CatalogError, EnrollmentError, SessionError};
pub use session_service::{SESSION_STORAGE_KEY, SessionService};
