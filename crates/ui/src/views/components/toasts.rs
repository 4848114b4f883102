use std::time::Duration;

use dioxus::prelude::*;

use edu_core::model::{Toast, ToastVariant};

use crate::views::page::{PageDispatcher, PageIntent, PageState};

const PRUNE_INTERVAL: Duration = Duration::from_secs(1);

#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_context::<PageState>().toaster;

    use_future(move || async move {
        loop {
            tokio::time::sleep(PRUNE_INTERVAL).await;
            toaster.prune();
        }
    });

    let toasts: Vec<Toast> = toaster.queue().read().iter().cloned().collect();

    rsx! {
        div { class: "toasts", role: "status",
            for toast in toasts {
                ToastItem { key: "{toast.id().value()}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let strings = use_context::<PageState>().strings;
    let dispatch = use_context::<PageDispatcher>().dispatch;
    let id = toast.id();
    let class = match toast.variant() {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    };

    rsx! {
        div { class,
            div {
                p { class: "toast__title", "{toast.title()}" }
                if let Some(description) = toast.description() {
                    p { class: "toast__description", "{description}" }
                }
            }
            button {
                class: "toast__dismiss",
                r#type: "button",
                aria_label: strings.dismiss,
                onclick: move |_| dispatch.call(PageIntent::DismissToast(id)),
                "✕"
            }
        }
    }
}
