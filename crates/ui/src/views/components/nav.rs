use dioxus::prelude::*;

use crate::views::page::{PageDispatcher, PageIntent, PageState};
use crate::vm::Section;

use super::auth_dialog::AuthDialog;

#[component]
pub fn NavBar() -> Element {
    let state = use_context::<PageState>();
    let dispatch = use_context::<PageDispatcher>().dispatch;
    let strings = state.strings;
    let greeting = state
        .session
        .session
        .read()
        .as_ref()
        .map(|session| strings.greeting(session.display_name()));

    rsx! {
        header { class: "nav",
            span { class: "nav__brand", "{strings.brand}" }
            ul { class: "nav__links",
                for section in Section::ALL {
                    li { key: "{section.anchor_id()}",
                        button {
                            class: "nav__link",
                            r#type: "button",
                            onclick: move |_| dispatch.call(PageIntent::ScrollTo(section)),
                            "{section.label(strings)}"
                        }
                    }
                }
            }
            div { class: "nav__account",
                if let Some(greeting) = greeting {
                    span { class: "nav__greeting", "{greeting}" }
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| dispatch.call(PageIntent::Logout),
                        "{strings.sign_out}"
                    }
                } else {
                    AuthDialog {}
                }
            }
        }
    }
}
