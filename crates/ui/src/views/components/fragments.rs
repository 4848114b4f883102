use dioxus::prelude::*;

use crate::i18n::{ContactCopy, FaqCopy, FeatureCopy};

#[component]
pub fn FeatureCard(feature: FeatureCopy) -> Element {
    rsx! {
        div { class: "info-card",
            div { class: "info-card__icon", "{feature.icon}" }
            h3 { class: "info-card__title", "{feature.title}" }
            p { class: "info-card__body", "{feature.description}" }
        }
    }
}

#[component]
pub fn ContactCard(contact: ContactCopy) -> Element {
    rsx! {
        div { class: "info-card",
            div { class: "info-card__icon", "{contact.icon}" }
            h3 { class: "info-card__title", "{contact.title}" }
            p { class: "info-card__body", "{contact.value}" }
        }
    }
}

/// At most one answer is expanded; clicking the open question collapses it.
#[component]
pub fn FaqAccordion(items: &'static [FaqCopy]) -> Element {
    let mut expanded = use_signal(|| None::<usize>);

    rsx! {
        div { class: "faq",
            for (index, item) in items.iter().enumerate() {
                div { key: "{index}", class: "faq__item",
                    button {
                        class: "faq__question",
                        r#type: "button",
                        aria_expanded: expanded() == Some(index),
                        onclick: move |_| {
                            let next = if expanded() == Some(index) { None } else { Some(index) };
                            expanded.set(next);
                        },
                        span { "{item.question}" }
                        span { if expanded() == Some(index) { "−" } else { "+" } }
                    }
                    if expanded() == Some(index) {
                        p { class: "faq__answer", "{item.answer}" }
                    }
                }
            }
        }
    }
}
