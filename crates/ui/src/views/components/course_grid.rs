use dioxus::prelude::*;

use edu_core::model::CourseId;

use crate::i18n::Strings;
use crate::views::page::{PageDispatcher, PageIntent, PageState};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CourseGrid() -> Element {
    let state = use_context::<PageState>();
    let dispatch = use_context::<PageDispatcher>().dispatch;
    let strings = state.strings;

    let signed_in = state.session.session.read().is_some();
    let cards = state
        .courses
        .read()
        .as_ref()
        .map(|courses| map_course_cards(courses, signed_in, &state.enrolling.read()));

    let on_enroll = move |course_id: CourseId| dispatch.call(PageIntent::Enroll(course_id));

    match cards {
        None => rsx! {
            p { class: "course-grid__status", "{strings.courses_loading}" }
        },
        Some(cards) if cards.is_empty() => rsx! {
            p { class: "course-grid__status", "{strings.courses_empty}" }
        },
        Some(cards) => rsx! {
            div { class: "course-grid",
                for card in cards {
                    CourseCard {
                        key: "{card.id}",
                        card: card.clone(),
                        strings,
                        on_enroll,
                    }
                }
            }
        },
    }
}

#[component]
fn CourseCard(card: CourseCardVm, strings: &'static Strings, on_enroll: EventHandler<CourseId>) -> Element {
    let course_id = card.id;
    let disabled = card.action.is_disabled();
    let action_label = card.action.label(strings);
    let action_class = if disabled {
        "btn btn-primary btn-block course-card__action is-disabled"
    } else {
        "btn btn-primary btn-block course-card__action"
    };
    let instructor = card
        .instructor
        .as_deref()
        .unwrap_or(strings.instructor_unknown);

    rsx! {
        article { class: "course-card",
            div { class: "course-card__media",
                if let Some(url) = card.image_url.as_deref() {
                    img { src: "{url}", alt: "{card.title}" }
                } else {
                    span { "📘" }
                }
                if let Some(progress) = card.progress_label.as_deref() {
                    span { class: "course-card__progress", "{progress}" }
                }
            }
            div { class: "course-card__body",
                h3 { class: "course-card__title", "{card.title}" }
                p { class: "course-card__description", "{card.description}" }
                div { class: "course-card__meta",
                    if !card.duration.is_empty() {
                        span { "⏱ {card.duration}" }
                    }
                    if !card.level.is_empty() {
                        span { "📊 {card.level}" }
                    }
                }
                p { class: "course-card__instructor", "👤 {instructor}" }
                button {
                    class: action_class,
                    r#type: "button",
                    disabled,
                    onclick: move |_| on_enroll.call(course_id),
                    "{action_label}"
                }
            }
        }
    }
}
