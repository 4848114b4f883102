mod actions;
mod landing;
mod shell;
pub(crate) mod state;

pub use actions::{PageDispatcher, PageIntent};
pub use landing::LandingView;
pub use shell::PageShell;
pub use state::PageState;

#[cfg(test)]
pub use shell::PageTestHandles;
