use dioxus::prelude::*;

use api::education::EducationEntry;
use common::{
    layout::{Placed, place},
    page::SectionView,
};

use super::SectionError;

#[component]
pub fn Education(state: SectionView<Vec<EducationEntry>>, stagger_ms: u32) -> Element {
    rsx! {
        section { id: "education", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Education" }
                div { id: "education-container",
                    match state {
                        SectionView::Pending => rsx! {},
                        SectionView::Ready(entries) => rsx! {
                            for placed in place(&entries, stagger_ms) {
                                EducationItem { key: "{placed.index}", placed }
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
fn EducationItem(placed: Placed<EducationEntry>) -> Element {
    let entry = &placed.item;
    let side = placed.placement.class();

    rsx! {
        div {
            class: "education-entry {side}",
            "data-aos": "fade-up",
            "data-aos-delay": "{placed.delay_ms}",
            h3 { "{entry.degree}" }
            h4 { "{entry.institution}" }
            span { class: "date-range", "{entry.date_range}" }
        }
    }
}
