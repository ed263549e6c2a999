use dioxus::prelude::*;

use api::experience::ExperienceEntry;
use common::{
    layout::{Placed, place},
    page::SectionView,
};

use super::SectionError;

#[component]
pub fn Experience(state: SectionView<Vec<ExperienceEntry>>, stagger_ms: u32) -> Element {
    rsx! {
        section { id: "experience", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Experience" }
                div { id: "experience-container", class: "experience-timeline",
                    match state {
                        SectionView::Pending => rsx! {},
                        SectionView::Ready(entries) => rsx! {
                            for placed in place(&entries, stagger_ms) {
                                ExperienceItem { key: "{placed.index}", placed }
                            }
                        },
                        SectionView::Failed(message) => rsx! {
                            SectionError { message }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceItem(placed: Placed<ExperienceEntry>) -> Element {
    let entry = &placed.item;
    let side = placed.placement.class();

    rsx! {
        div {
            class: "experience-entry",
            "data-aos": "fade-up",
            "data-aos-delay": "{placed.delay_ms}",
            div { class: "experience-entry-dot" }
            div { class: "experience-content {side}",
                h3 { "{entry.title}" }
                h4 { "{entry.employer_line()}" }
                span { class: "date-range", "{entry.date_range}" }
                ul {
                    for point in entry.description_points.iter() {
                        li { "{point}" }
                    }
                }
            }
        }
    }
}
