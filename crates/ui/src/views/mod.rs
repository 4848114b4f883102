mod components;
mod page;
mod scripts;

pub use page::{LandingView, PageDispatcher, PageIntent, PageShell, PageState};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
