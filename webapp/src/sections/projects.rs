use dioxus::prelude::*;

use api::project::Project;
use common::{
    layout::{Placed, place},
    overlay::Overlays,
    page::SectionView,
};

use super::SectionError;

#[component]
pub fn Projects(
    state: SectionView<Vec<Project>>,
    stagger_ms: u32,
    overlays: Signal<Overlays>,
) -> Element {
    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { id: "projects-container", class: "projects-grid",
                    match state {
                        SectionView::Pending => rsx! {},
                        SectionView::Ready(projects) => rsx! {
                            for placed in place(&projects, stagger_ms) {
                                ProjectCard { key: "{placed.index}", placed, overlays }
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

// ProjectCard
//
// the card only shows the summary fields, but clicking it hands the whole
// project record to the detail modal
#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    placed: Placed<Project>,
    overlays: Signal<Overlays>,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut overlays = props.overlays;
    let placed = props.placed;

    let project = placed.item.clone();
    let open_detail = move |_: MouseEvent| overlays.write().open_project(project.clone());

    rsx! {
        div {
            class: "project-card",
            "data-aos": "fade-up",
            "data-aos-delay": "{placed.delay_ms}",
            "data-project-index": "{placed.index}",
            onclick: open_detail,
            img {
                class: "project-card-image",
                src: "{placed.item.cover_image}",
                alt: "{placed.item.name} Cover",
                "loading": "lazy",
            }
            div { class: "project-card-content",
                h3 { "{placed.item.name}" }
                p { "{placed.item.short_description}" }
            }
        }
    }
}
