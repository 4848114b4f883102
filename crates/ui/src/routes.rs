use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{LandingView, PageShell};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageShell)]
        #[route("/", LandingView)] Landing {},
}
