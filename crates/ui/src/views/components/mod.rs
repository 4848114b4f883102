mod auth_dialog;
mod course_grid;
mod fragments;
mod nav;
mod toasts;

pub use course_grid::CourseGrid;
pub use fragments::{ContactCard, FaqAccordion, FeatureCard};
pub use nav::NavBar;
pub use toasts::ToastViewport;
