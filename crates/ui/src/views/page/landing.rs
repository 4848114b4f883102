use dioxus::prelude::*;

use crate::views::components::{ContactCard, CourseGrid, FaqAccordion, FeatureCard};
use crate::vm::Section;

use super::actions::{PageDispatcher, PageIntent};
use super::state::PageState;

#[component]
pub fn LandingView() -> Element {
    let state = use_context::<PageState>();
    let dispatcher = use_context::<PageDispatcher>();
    let strings = state.strings;
    let dispatch = dispatcher.dispatch;

    rsx! {
        section { id: Section::Home.anchor_id(), class: "section hero",
            h1 { class: "hero__title",
                "{strings.hero_title_top}"
                span { "{strings.hero_title_bottom}" }
            }
            p { class: "hero__subtitle", "{strings.hero_subtitle}" }
            div { class: "hero__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(PageIntent::ScrollTo(Section::Courses)),
                    "{strings.start_learning}"
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| dispatch.call(PageIntent::ScrollTo(Section::About)),
                    "{strings.learn_more}"
                }
            }
        }

        section { id: Section::Courses.anchor_id(), class: "section",
            h2 { class: "section__title", "{strings.courses_title}" }
            CourseGrid {}
        }

        section { id: Section::About.anchor_id(), class: "section",
            h2 { class: "section__title", "{strings.about_title}" }
            p { class: "section__subtitle", "{strings.about_body}" }
            div { class: "card-grid",
                for feature in strings.features.iter() {
                    FeatureCard { key: "{feature.title}", feature: *feature }
                }
            }
        }

        section { id: Section::Faq.anchor_id(), class: "section",
            h2 { class: "section__title", "{strings.faq_title}" }
            FaqAccordion { items: strings.faq }
        }

        section { id: Section::Contacts.anchor_id(), class: "section",
            h2 { class: "section__title", "{strings.contacts_title}" }
            p { class: "section__subtitle", "{strings.contacts_subtitle}" }
            div { class: "card-grid",
                for contact in strings.contacts.iter() {
                    ContactCard { key: "{contact.title}", contact: *contact }
                }
            }
        }
    }
}
