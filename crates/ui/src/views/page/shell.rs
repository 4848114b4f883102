use dioxus::prelude::*;
use dioxus_router::Outlet;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{NavBar, ToastViewport};

use super::actions::use_page_dispatcher;
use super::state::{PageServices, use_page_state};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use super::actions::PageIntent;
#[cfg(test)]
use super::state::PageState;

#[cfg(test)]
#[derive(Clone, Default)]
pub struct PageTestHandles {
    pub dispatch: Rc<RefCell<Option<Callback<PageIntent>>>>,
    pub state: Rc<RefCell<Option<PageState>>>,
}

#[cfg(test)]
impl PageTestHandles {
    pub fn dispatch(&self) -> Callback<PageIntent> {
        self.dispatch.borrow().clone().expect("dispatch registered")
    }

    pub fn state(&self) -> PageState {
        self.state.borrow().clone().expect("state registered")
    }
}

/// Page frame: navigation, routed content, footer and toasts.
#[component]
pub fn PageShell() -> Element {
    let ctx = use_context::<AppContext>();
    let services = PageServices::from_context(&ctx);
    let state = use_page_state(&ctx, &services);
    let dispatcher = use_page_dispatcher(state, &services);
    use_context_provider(|| state);
    use_context_provider(|| dispatcher);

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<PageTestHandles>() {
            *handles.dispatch.borrow_mut() = Some(dispatcher.dispatch);
            *handles.state.borrow_mut() = Some(state);
        }
    });

    let footer = state.strings.footer;

    rsx! {
        div { class: "page",
            NavBar {}
            main { class: "page__content",
                Outlet::<Route> {}
            }
            footer { class: "footer", "{footer}" }
            ToastViewport {}
        }
    }
}
