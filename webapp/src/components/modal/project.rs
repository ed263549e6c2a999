use dioxus::prelude::*;

use common::{
    detail::{MediaTile, ProjectDetail},
    overlay::{Layer, MediaElement, Overlays},
};

// ProjectDetailModal
//
// renders whatever project is currently open in the overlay state, and nothing
// when none is.  because the markup is rebuilt from that state, opening a
// second project replaces every field, and closing unmounts any playing video
#[derive(Clone, PartialEq, Props)]
pub struct ProjectDetailModalProps {
    overlays: Signal<Overlays>,
}

#[component]
pub fn ProjectDetailModal(props: ProjectDetailModalProps) -> Element {
    let mut overlays = props.overlays;

    let detail = match overlays.read().project() {
        Some(project) => ProjectDetail::from(project),
        None => return rsx! {},
    };

    rsx! {
        div {
            id: "projectDetailModal",
            class: "modal project-modal",
            // clicks that reach the backdrop close the modal
            onclick: move |_| overlays.write().close(Layer::ProjectDetail),
            div {
                class: "modal-content project-modal-content",
                onclick: move |evt| evt.stop_propagation(),

                span {
                    class: "close-button project-modal-close",
                    onclick: move |_| overlays.write().close(Layer::ProjectDetail),
                    "×"
                }

                h2 { id: "modalProjectName", "{detail.name}" }
                img {
                    id: "modalProjectCover",
                    class: "modal-project-cover",
                    src: "{detail.cover}",
                    alt: "{detail.name} Cover",
                }
                p { id: "modalProjectDescription", "{detail.description}" }

                if let Some(features) = detail.features {
                    div { id: "modalProjectFeatures", class: "modal-subsection",
                        h3 { "Key Features" }
                        ul {
                            for feature in features {
                                li { "{feature}" }
                            }
                        }
                    }
                }

                if let Some(technologies) = detail.technologies {
                    div { id: "modalProjectTechnologies", class: "modal-subsection",
                        h3 { "Technologies Used" }
                        ul {
                            for technology in technologies {
                                li { "{technology}" }
                            }
                        }
                    }
                }

                if let Some(links) = detail.links {
                    div { id: "modalProjectLinks", class: "modal-subsection",
                        h3 { "Links" }
                        div { class: "project-links",
                            for link in links {
                                a {
                                    href: "{link.url}",
                                    class: "btn btn-primary",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link.kind}"
                                }
                            }
                        }
                    }
                }

                if let Some(media) = detail.media {
                    div { id: "modalProjectMedia", class: "modal-subsection",
                        h3 { "Media" }
                        div { class: "project-media-grid",
                            for tile in media {
                                MediaThumb { key: "{tile.position}", tile, overlays }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MediaThumb(tile: MediaTile, overlays: Signal<Overlays>) -> Element {
    let mut overlays = overlays;

    let src = tile.url.clone();
    let kind = tile.kind.clone();
    let enlarge = move |_: MouseEvent| overlays.write().open_lightbox(src.clone(), kind.clone());

    match tile.element {
        MediaElement::Image => rsx! {
            img {
                class: "media-item",
                src: "{tile.url}",
                alt: "{tile.alt}",
                "data-type": "{tile.kind}",
                "loading": "lazy",
                onclick: enlarge,
            }
        },
        MediaElement::Video => rsx! {
            video {
                class: "media-item",
                src: "{tile.url}",
                controls: true,
                "preload": "metadata",
                "data-type": "{tile.kind}",
                onclick: enlarge,
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use api::project::{MediaItem, MediaKind, Project};

    use super::*;

    thread_local! {
        static OVERLAYS: Cell<Option<Signal<Overlays>>> = const { Cell::new(None) };
    }

    fn repeated_media_project() -> Project {
        Project {
            name: "Tracker".into(),
            cover_image: "images/tracker.png".into(),
            short_description: "Tracks things".into(),
            description: "Tracks things in detail".into(),
            features: vec![],
            technologies_used: vec![],
            links: vec![],
            media: vec![
                MediaItem { kind: MediaKind::Screenshot, url: "media/a.png".into() },
                MediaItem { kind: MediaKind::Screenshot, url: "media/a.png".into() },
            ],
        }
    }

    fn OpenProject() -> Element {
        let overlays = use_signal(|| {
            let mut overlays = Overlays::default();
            overlays.open_project(repeated_media_project());
            overlays
        });
        use_hook(|| OVERLAYS.with(|cell| cell.set(Some(overlays))));

        rsx! { ProjectDetailModal { overlays } }
    }

    #[test]
    fn repeated_media_survives_rerender() {
        let mut dom = VirtualDom::new(OpenProject);
        dom.rebuild_in_place();

        let mut overlays = OVERLAYS.with(Cell::get).unwrap();
        dom.in_runtime(|| {
            overlays
                .write()
                .open_lightbox("media/a.png".into(), MediaKind::Screenshot)
        });
        dom.render_immediate(&mut NoOpMutations);

        dom.in_runtime(|| {
            let overlays = overlays.read();
            assert!(overlays.lightbox().is_some());
            assert!(overlays.project().is_some());
        });
    }
}
