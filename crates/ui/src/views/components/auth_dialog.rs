use dioxus::prelude::*;

use crate::views::page::{PageDispatcher, PageIntent, PageState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

/// Sign-in trigger plus its modal. Only mounted while nobody is signed in,
/// so a successful login closes it by unmounting.
#[component]
pub fn AuthDialog() -> Element {
    let state = use_context::<PageState>();
    let dispatch = use_context::<PageDispatcher>().dispatch;
    let strings = state.strings;

    let mut open = use_signal(|| false);
    let mut tab = use_signal(|| AuthTab::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut full_name = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let intent = match tab() {
            AuthTab::Login => PageIntent::Login {
                email: email.read().trim().to_string(),
                password: password(),
            },
            AuthTab::Register => PageIntent::Register {
                email: email.read().trim().to_string(),
                password: password(),
                full_name: full_name.read().trim().to_string(),
            },
        };
        dispatch.call(intent);
    };

    let tab_class = move |which: AuthTab| {
        if tab() == which {
            "tabs__tab is-active"
        } else {
            "tabs__tab"
        }
    };

    let submit_label = match tab() {
        AuthTab::Login => strings.submit_login,
        AuthTab::Register => strings.submit_register,
    };

    rsx! {
        button {
            class: "btn btn-primary",
            r#type: "button",
            onclick: move |_| open.set(true),
            "{strings.sign_in}"
        }
        if open() {
            div { class: "modal-backdrop",
                div { class: "modal", role: "dialog",
                    div { class: "modal__header",
                        div {
                            h2 { class: "modal__title", "{strings.auth_title}" }
                            p { class: "modal__description", "{strings.auth_description}" }
                        }
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            aria_label: strings.close,
                            onclick: move |_| open.set(false),
                            "✕"
                        }
                    }
                    div { class: "tabs",
                        button {
                            class: tab_class(AuthTab::Login),
                            r#type: "button",
                            onclick: move |_| tab.set(AuthTab::Login),
                            "{strings.tab_login}"
                        }
                        button {
                            class: tab_class(AuthTab::Register),
                            r#type: "button",
                            onclick: move |_| tab.set(AuthTab::Register),
                            "{strings.tab_register}"
                        }
                    }
                    form { class: "form", onsubmit: submit,
                        if tab() == AuthTab::Register {
                            label {
                                "{strings.label_full_name}"
                                input {
                                    r#type: "text",
                                    required: true,
                                    placeholder: strings.placeholder_full_name,
                                    value: "{full_name}",
                                    oninput: move |evt| full_name.set(evt.value()),
                                }
                            }
                        }
                        label {
                            "{strings.label_email}"
                            input {
                                r#type: "email",
                                required: true,
                                placeholder: strings.placeholder_email,
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                        label {
                            "{strings.label_password}"
                            input {
                                r#type: "password",
                                required: true,
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                        }
                        button { class: "btn btn-primary btn-block", r#type: "submit",
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
